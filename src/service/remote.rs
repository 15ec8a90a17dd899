use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

use super::{Determination, DeterminingService, ServiceError};
use crate::config::ConfigError;

const PROBABLE_PASTIME_PATH: &str = "ProbablePastime/Task1";
const UNPOPULAR_PASTIME_PATH: &str = "UnpopularPastime/Task1";

/// Forwards determinations to a separately deployed analysis backend.
///
/// The base URL points at the backend's `Determining` root, e.g.
/// `http://analysis:5000/api/Determining`; each entry point posts the input
/// to its task path below it and relays the answer untouched.
pub struct RemoteDeterminingService {
    client: Client,
    probable_pastime_url: Url,
    unpopular_pastime_url: Url,
}

impl RemoteDeterminingService {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ConfigError> {
        // Url::join drops the last segment unless the base ends with '/'
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let join = |path: &str| {
            base.join(path).map_err(|e| ConfigError::Invalid {
                key: "DETERMINING_SERVICE_URL",
                value: base_url.to_string(),
                reason: e.to_string(),
            })
        };

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            probable_pastime_url: join(PROBABLE_PASTIME_PATH)?,
            unpopular_pastime_url: join(UNPOPULAR_PASTIME_PATH)?,
        })
    }

    async fn forward(&self, url: &Url, input: Value) -> Result<Determination, ServiceError> {
        debug!("Forwarding determination to {}", url);
        let response = self.client.post(url.clone()).json(&input).send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let body = response.bytes().await?;

        if !status.is_success() {
            warn!("Determining backend {} answered {}", url, status);
            return Err(ServiceError::Upstream {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(Determination::Raw { content_type, body })
    }
}

#[async_trait]
impl DeterminingService for RemoteDeterminingService {
    async fn determining_probable_pastime_task1(
        &self,
        input: Value,
    ) -> Result<Determination, ServiceError> {
        self.forward(&self.probable_pastime_url, input).await
    }

    async fn determining_unpopular_pastime_task1(
        &self,
        input: Value,
    ) -> Result<Determination, ServiceError> {
        self.forward(&self.unpopular_pastime_url, input).await
    }
}

//! The determining service seam.
//!
//! The dispatcher never looks inside a determination: it hands the parsed
//! request body to one of the entry points below and relays whatever comes
//! back. The pastime logic itself lives behind this trait.

use actix_web::web::Bytes;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod remote;

pub use remote::RemoteDeterminingService;

/// What a determining entry point hands back to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Determination {
    /// A JSON value, serialized with the default JSON response rule.
    Json(Value),
    /// An already rendered body, relayed byte for byte.
    Raw { content_type: String, body: Bytes },
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("determining backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("determining backend answered {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("determining service unavailable: {message}")]
    Unavailable { message: String },
}

#[async_trait]
pub trait DeterminingService: Send + Sync {
    async fn determining_probable_pastime_task1(
        &self,
        input: Value,
    ) -> Result<Determination, ServiceError>;

    async fn determining_unpopular_pastime_task1(
        &self,
        input: Value,
    ) -> Result<Determination, ServiceError>;
}

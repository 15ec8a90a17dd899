use actix_web::{post, web, HttpResponse};
use log::{debug, error, warn};
use serde_json::Value;

use crate::config::BodyOptions;
use crate::error::{DeterminingError, ErrorBody};
use crate::service::{Determination, DeterminingService, ServiceError};

#[utoipa::path(
    post,
    path = "/api/Determining/ProbablePastime/Task1",
    tag = "Determining",
    request_body(content = Value, description = "Any JSON value, forwarded unchanged"),
    responses(
        (status = 200, description = "Determining service result, passed through as-is", body = Value),
        (status = 400, description = "Body is not valid JSON", body = ErrorBody),
        (status = 413, description = "Body exceeds the configured size limit", body = ErrorBody),
        (status = 415, description = "Content-Type rejected (forced JSON parsing disabled)", body = ErrorBody),
        (status = 502, description = "Determining service failed or answered with an error", body = ErrorBody),
        (status = 503, description = "Determining service unavailable", body = ErrorBody),
        (status = 504, description = "Determining service timed out", body = ErrorBody),
    )
)]
#[post("/ProbablePastime/Task1")]
pub async fn probable_pastime_task1(
    service: web::Data<dyn DeterminingService>,
    input: web::Json<Value>,
) -> Result<HttpResponse, DeterminingError> {
    debug!("ProbablePastime/Task1 dispatch");
    let result = service
        .determining_probable_pastime_task1(input.into_inner())
        .await;
    respond("ProbablePastime/Task1", result)
}

#[utoipa::path(
    post,
    path = "/api/Determining/UnpopularPastime/Task1",
    tag = "Determining",
    request_body(content = Value, description = "Any JSON value, forwarded unchanged"),
    responses(
        (status = 200, description = "Determining service result, passed through as-is", body = Value),
        (status = 400, description = "Body is not valid JSON", body = ErrorBody),
        (status = 413, description = "Body exceeds the configured size limit", body = ErrorBody),
        (status = 415, description = "Content-Type rejected (forced JSON parsing disabled)", body = ErrorBody),
        (status = 502, description = "Determining service failed or answered with an error", body = ErrorBody),
        (status = 503, description = "Determining service unavailable", body = ErrorBody),
        (status = 504, description = "Determining service timed out", body = ErrorBody),
    )
)]
#[post("/UnpopularPastime/Task1")]
pub async fn unpopular_pastime_task1(
    service: web::Data<dyn DeterminingService>,
    input: web::Json<Value>,
) -> Result<HttpResponse, DeterminingError> {
    debug!("UnpopularPastime/Task1 dispatch");
    let result = service
        .determining_unpopular_pastime_task1(input.into_inner())
        .await;
    respond("UnpopularPastime/Task1", result)
}

fn respond(
    task: &str,
    result: Result<Determination, ServiceError>,
) -> Result<HttpResponse, DeterminingError> {
    let determination = result.map_err(|e| {
        error!("{} failed: {}", task, e);
        DeterminingError::from(e)
    })?;

    Ok(match determination {
        Determination::Json(value) => HttpResponse::Ok().json(value),
        Determination::Raw { content_type, body } => {
            HttpResponse::Ok().content_type(content_type).body(body)
        }
    })
}

fn json_config(options: &BodyOptions) -> web::JsonConfig {
    let config = web::JsonConfig::default()
        .limit(options.max_payload_bytes)
        .error_handler(|err, req| {
            warn!("Rejected body on {}: {}", req.path(), err);
            DeterminingError::from(err).into()
        });

    if options.force_json {
        // Declared Content-Type is ignored, absent or not
        config.content_type_required(false).content_type(|_| true)
    } else {
        config
    }
}

pub fn init_routes(
    cfg: &mut web::ServiceConfig,
    service: web::Data<dyn DeterminingService>,
    body: &BodyOptions,
) {
    cfg.service(
        web::scope("/Determining")
            .app_data(service)
            .app_data(json_config(body))
            .service(probable_pastime_task1)
            .service(unpopular_pastime_task1),
    );
}

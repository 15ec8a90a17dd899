use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::service::ServiceError;

/// Everything that can go wrong between receiving a body and answering it.
#[derive(Error, Debug)]
pub enum DeterminingError {
    #[error("request body is not usable JSON: {0}")]
    Parse(#[from] JsonPayloadError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// `parse_error` or `service_error`
    pub error: String,
    pub message: String,
}

impl DeterminingError {
    pub fn kind(&self) -> &'static str {
        match self {
            DeterminingError::Parse(_) => "parse_error",
            DeterminingError::Service(_) => "service_error",
        }
    }
}

impl ResponseError for DeterminingError {
    fn status_code(&self) -> StatusCode {
        match self {
            DeterminingError::Parse(e) => match e {
                JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                    StatusCode::PAYLOAD_TOO_LARGE
                }
                JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                _ => StatusCode::BAD_REQUEST,
            },
            DeterminingError::Service(e) => match e {
                ServiceError::Transport(err) if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
                ServiceError::Transport(_) | ServiceError::Upstream { .. } => StatusCode::BAD_GATEWAY,
                ServiceError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
        })
    }
}

use actix_web::{HttpRequest, HttpResponse};
use log::debug;
use serde_json::json;

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!("No route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(json!({
        "error": "not_found",
        "path": req.path(),
    }))
}

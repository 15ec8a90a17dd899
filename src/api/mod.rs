use actix_web::{middleware, web};

use crate::config::BodyOptions;
use crate::service::DeterminingService;

pub mod determining;
pub mod docs;

/// Registers everything under `/api` on the given registrar.
pub fn init_routes(
    cfg: &mut web::ServiceConfig,
    service: web::Data<dyn DeterminingService>,
    body: &BodyOptions,
) {
    cfg.service(
        web::scope("/api")
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| determining::init_routes(cfg, service, body)),
    );
}

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;
use env_logger::Env;
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pastime_dispatch::api::{self, docs::ApiDoc};
use pastime_dispatch::config::Settings;
use pastime_dispatch::routes;
use pastime_dispatch::service::{DeterminingService, RemoteDeterminingService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logger (RUST_LOG overrides default if set)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env().map_err(io::Error::other)?;

    let backend = RemoteDeterminingService::new(
        &settings.determining_service_url,
        settings.determining_timeout,
    )
    .map_err(io::Error::other)?;
    let service: web::Data<dyn DeterminingService> =
        web::Data::from(Arc::new(backend) as Arc<dyn DeterminingService>);
    info!(
        "Determinations forwarded to {} (timeout {:?}, forced JSON body: {})",
        settings.determining_service_url, settings.determining_timeout, settings.body.force_json
    );

    let body = settings.body.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            // Log each incoming request with status, time, and size
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(|cfg| api::init_routes(cfg, service.clone(), &body))
            .default_service(web::route().to(routes::not_found))
    })
    .shutdown_timeout(settings.shutdown_timeout_secs);
    if let Some(workers) = settings.workers {
        server = server.workers(workers);
    }

    info!("Server running at http://{}:{}", settings.host, settings.port);
    server
        .bind((settings.host.as_str(), settings.port))?
        .run()
        .await
}

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use sharedoc::config::EnvConfig;
use sharedoc::db::postgres_service::PostgresService;
use sharedoc::routes::configure_routes;
use sharedoc::utils::token::TokenIssuer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    // The signing secret lives in config and is handed to the issuer once,
    // at startup.
    let issuer = TokenIssuer::new(&config.secret_key);

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(web::Data::new(issuer.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}

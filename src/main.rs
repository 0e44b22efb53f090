mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod store;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::{AppConfig, StoreBackend};
use services::Services;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    log::info!("🚀 Starting Newz Service...");

    // Store handles are owned here and shared with every worker
    let (services, db) = match config.store_backend {
        StoreBackend::MongoDB => {
            let url = config.database_url.as_deref().unwrap_or_default();
            let db = database::MongoDB::new(url).await.map_err(|e| {
                log::error!("❌ Failed to connect to MongoDB: {}", e);
                io::Error::other(e)
            })?;
            log::info!("✅ MongoDB connected successfully");
            (Services::mongo(&db), Some(web::Data::new(db)))
        }
        StoreBackend::Memory => {
            log::warn!("⚠️ Using in-memory store: data is lost on restart");
            (Services::in_memory(), None)
        }
    };

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", config.host, config.port);

    let allowed_origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .expose_headers(vec![header::CONTENT_TYPE])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        let mut app = App::new()
            .configure(|cfg| services.configure(cfg))
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default());

        if let Some(db) = &db {
            app = app.app_data(db.clone());
        }

        app.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi),
        )
        .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

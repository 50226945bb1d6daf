mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::services::{PaymentGateway, RoleDirectory, StripeClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    log::info!("🚀 Starting Summer Camp Service...");
    log::info!("📊 Database: {}", config.database_name);

    // Initialize MongoDB connection
    let db = match database::MongoDB::new(&config.database_url, &config.database_name).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ Failed to connect to MongoDB: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };
    log::info!("✅ MongoDB connected successfully");

    let gateway: Arc<dyn PaymentGateway> = Arc::new(StripeClient::new(
        &config.stripe_api_base,
        &config.payment_secret_key,
    ));

    let roles: Arc<dyn RoleDirectory> = Arc::new(db.clone());

    let db_data = web::Data::new(db);
    let roles_data = web::Data::from(roles);
    let gateway_data = web::Data::from(gateway);
    let bind_address = config.bind_address();
    let config_data = web::Data::new(config);

    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    HttpServer::new(move || {
        // Public browser client
        let cors = Cors::permissive();

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(config_data.clone())
            .app_data(db_data.clone())
            .app_data(gateway_data.clone())
            .app_data(roles_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(Compress::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}

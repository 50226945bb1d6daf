use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::MongoDB;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

/// Liveness text kept for existing uptime checks.
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("Running Successfully")
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database reachable", body = HealthResponse),
        (status = 503, description = "Database ping failed", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    let (database, mut response) = match db.ping().await {
        Ok(()) => ("up", HttpResponse::Ok()),
        Err(e) => {
            log::warn!("⚠️ Health check: database ping failed: {}", e);
            ("down", HttpResponse::ServiceUnavailable())
        }
    };

    response.json(HealthResponse {
        status: if database == "up" { "healthy" } else { "degraded" }.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

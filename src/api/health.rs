use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::MongoDB;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

fn health_response(status: &str) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        service: "newz-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    }
}

/// Reports `degraded` with 503 when the MongoDB store stops answering.
/// With the in-memory store there is no database to check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(db: Option<web::Data<MongoDB>>) -> impl Responder {
    if let Some(db) = db {
        if let Err(e) = db.health_check().await {
            log::warn!("⚠️ Health check failed: {}", e);
            return HttpResponse::ServiceUnavailable().json(health_response("degraded"));
        }
    }

    HttpResponse::Ok().json(health_response("healthy"))
}

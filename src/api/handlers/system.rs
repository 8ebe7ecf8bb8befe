// src/api/handlers/system.rs
use actix_web::{web, HttpResponse, Responder};
use crate::api::types::HealthResponse;
use crate::core::service::{PasswordService, UpstreamStatus};

/// Service health
///
/// Always answers 200; `status` is "degraded" when a configured upstream
/// generator cannot be reached.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health(service: web::Data<PasswordService>) -> impl Responder {
    let upstream = service.upstream_status().await;
    let status = match upstream {
        UpstreamStatus::Offline => "degraded",
        UpstreamStatus::Disabled | UpstreamStatus::Online => "healthy",
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        upstream,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

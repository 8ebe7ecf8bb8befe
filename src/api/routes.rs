// src/api/routes.rs
use super::handlers;
use super::types::ErrorResponse;
use actix_web::{error, web, HttpResponse};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get the same JSON error shape as validation failures
    let json_config = web::JsonConfig::default()
        .limit(4096)
        .error_handler(|err, _req| {
            let body = ErrorResponse {
                success: false,
                error: format!("Invalid request body: {}", err),
            };
            error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        });

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            // POST: Generate a password
            .route("/generate-password", web::post().to(handlers::generator::generate_password))
            // POST: Score a password
            .route("/analyze", web::post().to(handlers::generator::analyze_password))
            // GET: Service and upstream health
            .route("/health", web::get().to(handlers::system::health))
    );
}

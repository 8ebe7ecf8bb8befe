// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use crate::core::config::Config;
use crate::core::service::PasswordService;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::ErrorResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::HealthResponse,
            crate::models::PasswordGenerationOptions,
            crate::generators::StrengthBand,
            crate::core::service::PasswordSource,
            crate::core::service::UpstreamStatus
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints"),
        (name = "System", description = "Service health")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Random password generator with strength scoring",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn cors_for(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["Content-Type", "Accept"])
        .max_age(3600);

    if origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

pub async fn start_server(config: Config, service: PasswordService) -> std::io::Result<()> {
    let bind_address = config.bind_address();
    log::info!("Starting Passforge API server on {}:{}", bind_address.0, bind_address.1);

    let config_data = web::Data::new(config);
    let service_data = web::Data::new(service);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_for(&config_data.client_origins))
            .app_data(config_data.clone())
            .app_data(service_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;


#[cfg(test)]
mod openapi_tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/api/generate-password", "/api/analyze", "/api/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn registers_response_schemas() {
        let schemas = ApiDoc::openapi().components.unwrap().schemas;
        assert!(schemas.contains_key("PasswordGenerationResponse"));
        assert!(schemas.contains_key("HealthResponse"));
        assert!(schemas.contains_key("StrengthBand"));
    }
}

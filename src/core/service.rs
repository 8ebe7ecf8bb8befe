// src/core/service.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::core::config::Config;
use crate::generators::{self, PasswordGenerator};
use crate::models::PasswordGenerationOptions;
use crate::upstream::{self, UpstreamClient};

/// Which side produced a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PasswordSource {
    Local,
    Upstream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamStatus {
    Disabled,
    Online,
    Offline,
}

#[derive(Debug, Clone)]
pub struct GeneratedPassword {
    pub password: String,
    pub source: PasswordSource,
}

/// Generates passwords, preferring the upstream generator when one is
/// configured and falling back to the in-process generator otherwise.
pub struct PasswordService {
    generator: PasswordGenerator,
    upstream: Option<UpstreamClient>,
}

impl PasswordService {
    pub fn new(upstream: Option<UpstreamClient>) -> Self {
        Self {
            generator: PasswordGenerator::new(),
            upstream,
        }
    }

    pub fn local() -> Self {
        Self::new(None)
    }

    pub fn from_config(config: &Config) -> upstream::Result<Self> {
        let url = match &config.upstream_generator_url {
            Some(url) => url,
            None => {
                log::info!("No upstream generator configured, generating locally");
                return Ok(Self::local());
            }
        };

        log::info!("Using upstream generator at {}", url);
        let upstream = UpstreamClient::new(url, config.upstream_timeout)?;
        Ok(Self::new(Some(upstream)))
    }

    // Validation errors are returned before the upstream is contacted
    pub async fn generate(
        &self,
        options: &PasswordGenerationOptions,
    ) -> generators::Result<GeneratedPassword> {
        let classes = options.classes();
        generators::validate(options.length, classes)?;

        if let Some(upstream) = &self.upstream {
            match upstream.generate(options).await {
                Ok(password) => {
                    return Ok(GeneratedPassword {
                        password,
                        source: PasswordSource::Upstream,
                    });
                }
                Err(e) => {
                    log::warn!(
                        "Upstream generator at {} failed, using local generator: {}",
                        upstream.base_url(),
                        e
                    );
                }
            }
        }

        let password = self.generator.generate(options.length, classes)?;
        Ok(GeneratedPassword {
            password,
            source: PasswordSource::Local,
        })
    }

    pub async fn upstream_status(&self) -> UpstreamStatus {
        match &self.upstream {
            None => UpstreamStatus::Disabled,
            Some(upstream) => match upstream.check_health().await {
                Ok(()) => UpstreamStatus::Online,
                Err(e) => {
                    log::warn!("Upstream generator at {} is offline: {}", upstream.base_url(), e);
                    UpstreamStatus::Offline
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::configure_routes;
    use crate::generators::{is_valid_password, ValidationError};
    use actix_web::{dev::ServerHandle, web, App, HttpResponse, HttpServer};
    use std::time::Duration;

    fn client_for(base_url: &str) -> UpstreamClient {
        UpstreamClient::new(base_url, Duration::from_secs(2)).unwrap()
    }

    // Binds a real server on an ephemeral port and returns its base URL
    macro_rules! spawn_upstream {
        ($factory:expr) => {{
            let server = HttpServer::new($factory)
                .workers(1)
                .bind(("127.0.0.1", 0))
                .unwrap();
            let addr = server.addrs()[0];
            let server = server.run();
            let handle = server.handle();
            actix_web::rt::spawn(server);
            (format!("http://{}", addr), handle)
        }};
    }

    fn passforge_upstream() -> (String, ServerHandle) {
        spawn_upstream!(|| {
            App::new()
                .app_data(web::Data::new(Config::default()))
                .app_data(web::Data::new(PasswordService::local()))
                .configure(configure_routes)
        })
    }

    #[actix_web::test]
    async fn local_service_generates_locally() {
        let service = PasswordService::local();
        let options = PasswordGenerationOptions::default();
        let generated = service.generate(&options).await.unwrap();
        assert_eq!(generated.source, PasswordSource::Local);
        assert!(is_valid_password(&generated.password, 12, options.classes()));
        assert_eq!(service.upstream_status().await, UpstreamStatus::Disabled);
    }

    #[actix_web::test]
    async fn config_without_upstream_builds_local_service() {
        let service = PasswordService::from_config(&Config::default()).unwrap();
        assert!(service.upstream.is_none());
        assert_eq!(service.upstream_status().await, UpstreamStatus::Disabled);
    }

    #[actix_web::test]
    async fn config_with_upstream_builds_client() {
        let config = Config {
            upstream_generator_url: Some("http://127.0.0.1:9".to_string()),
            ..Config::default()
        };
        let service = PasswordService::from_config(&config).unwrap();
        let upstream = service.upstream.as_ref().unwrap();
        assert_eq!(upstream.base_url(), "http://127.0.0.1:9");
        assert_eq!(service.upstream_status().await, UpstreamStatus::Offline);
    }

    #[actix_web::test]
    async fn validation_errors_are_not_masked_by_fallback() {
        let service = PasswordService::new(Some(client_for("http://127.0.0.1:9")));
        let options = PasswordGenerationOptions {
            length: 100,
            ..Default::default()
        };
        assert!(matches!(
            service.generate(&options).await,
            Err(ValidationError::LengthOutOfRange { length: 100, .. })
        ));

        let options = PasswordGenerationOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        assert_eq!(
            service.generate(&options).await.unwrap_err(),
            ValidationError::NoCharacterClasses
        );
    }

    #[actix_web::test]
    async fn unreachable_upstream_falls_back_to_local() {
        let service = PasswordService::new(Some(client_for("http://127.0.0.1:9")));
        let options = PasswordGenerationOptions {
            length: 24,
            ..Default::default()
        };
        let generated = service.generate(&options).await.unwrap();
        assert_eq!(generated.source, PasswordSource::Local);
        assert_eq!(generated.password.len(), 24);
        assert_eq!(service.upstream_status().await, UpstreamStatus::Offline);
    }

    #[actix_web::test]
    async fn healthy_upstream_is_used() {
        let (base_url, handle) = passforge_upstream();
        let service = PasswordService::new(Some(client_for(&base_url)));
        let options = PasswordGenerationOptions {
            length: 40,
            include_symbols: false,
            ..Default::default()
        };

        let generated = service.generate(&options).await.unwrap();
        assert_eq!(generated.source, PasswordSource::Upstream);
        assert!(is_valid_password(&generated.password, 40, options.classes()));
        assert_eq!(service.upstream_status().await, UpstreamStatus::Online);

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn mismatched_upstream_password_is_rejected() {
        let (base_url, handle) = spawn_upstream!(|| {
            App::new().route(
                "/api/generate-password",
                web::post().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({ "password": "short" }))
                }),
            )
        });
        let service = PasswordService::new(Some(client_for(&base_url)));
        let options = PasswordGenerationOptions::default();

        let generated = service.generate(&options).await.unwrap();
        assert_eq!(generated.source, PasswordSource::Local);
        assert_eq!(generated.password.len(), options.length);

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn upstream_error_status_falls_back() {
        let (base_url, handle) = spawn_upstream!(|| {
            App::new().route(
                "/api/generate-password",
                web::post().to(|| async { HttpResponse::InternalServerError().finish() }),
            )
        });
        let client = client_for(&base_url);
        let err = client
            .generate(&PasswordGenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, crate::upstream::UpstreamError::BadStatus(s) if s.as_u16() == 500));

        let service = PasswordService::new(Some(client));
        let generated = service
            .generate(&PasswordGenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(generated.source, PasswordSource::Local);
        // No /api/health route on this upstream
        assert_eq!(service.upstream_status().await, UpstreamStatus::Offline);

        handle.stop(true).await;
    }
}

// src/upstream/mod.rs
use std::time::Duration;
use serde::Deserialize;
use thiserror::Error;

use crate::generators::is_valid_password;
use crate::models::PasswordGenerationOptions;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Upstream responded with status {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("Upstream returned an empty password")]
    EmptyPassword,

    #[error("Upstream password does not match the request ({0})")]
    InvalidPassword(String),
}

pub type Result<T> = std::result::Result<T, UpstreamError>;

#[derive(Deserialize)]
struct UpstreamPasswordResponse {
    password: Option<String>,
}

/// Client for a remote generator that speaks the same
/// `/api/generate-password` protocol as this service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: String,
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Request a password and check it against the options before trusting it
    pub async fn generate(&self, options: &PasswordGenerationOptions) -> Result<String> {
        let url = format!("{}/api/generate-password", self.base_url);
        log::debug!("Requesting password from upstream {}", url);

        let response = self.client.post(&url).json(options).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::BadStatus(status));
        }

        let body: UpstreamPasswordResponse = response.json().await?;
        let password = body
            .password
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(UpstreamError::EmptyPassword)?;

        if !is_valid_password(&password, options.length, options.classes()) {
            return Err(UpstreamError::InvalidPassword(format!(
                "expected {} characters from the requested classes, got {}",
                options.length,
                password.chars().count()
            )));
        }

        Ok(password)
    }

    pub async fn check_health(&self) -> Result<()> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(UpstreamError::BadStatus(status))
        }
    }
}

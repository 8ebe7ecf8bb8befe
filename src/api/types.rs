// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::service::{PasswordSource, UpstreamStatus};
use crate::generators::StrengthBand;
use crate::models::PasswordGenerationOptions;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

// ===== Generator =====

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordGenerationRequest {
    /// Requested length; signed so out-of-range values reach validation
    /// instead of failing deserialization.
    pub length: Option<i64>,
    pub include_uppercase: Option<bool>,
    pub include_lowercase: Option<bool>,
    pub include_numbers: Option<bool>,
    pub include_symbols: Option<bool>,
}

impl PasswordGenerationRequest {
    pub fn into_options(self, default_length: usize) -> PasswordGenerationOptions {
        let length = match self.length {
            Some(length) => usize::try_from(length).unwrap_or(0),
            None => default_length,
        };

        PasswordGenerationOptions {
            length,
            include_uppercase: self.include_uppercase.unwrap_or(true),
            include_lowercase: self.include_lowercase.unwrap_or(true),
            include_numbers: self.include_numbers.unwrap_or(true),
            include_symbols: self.include_symbols.unwrap_or(true),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    pub success: bool,
    pub password: Option<String>,
    pub length: Option<usize>,
    pub strength: Option<u8>,
    pub label: Option<StrengthBand>,
    pub source: Option<PasswordSource>,
    pub parameters: Option<PasswordGenerationOptions>,
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            length: None,
            strength: None,
            label: None,
            source: None,
            parameters: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    pub success: bool,
    pub strength: u8,
    pub label: StrengthBand,
    pub feedback: Vec<String>,
    pub error: Option<String>,
}

// ===== System =====

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// "healthy", or "degraded" when the configured upstream is offline
    pub status: String,
    pub upstream: UpstreamStatus,
    pub version: String,
    /// RFC 3339
    pub timestamp: String,
}

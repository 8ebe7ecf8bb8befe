// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::core::config::Config;
use crate::core::service::PasswordService;
use crate::generators::{analyze_password_strength, strength_feedback, StrengthBand};
use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse,
    PasswordAnalysisRequest, PasswordAnalysisResponse,
};
use log::{debug, info};

/// Generate a password
///
/// Generates a random password from the requested character classes and
/// scores it. Omitted fields default to the configured length and all
/// classes enabled.
#[utoipa::path(
    post,
    path = "/api/generate-password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid length or no character classes", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    service: web::Data<PasswordService>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let options = generation_req
        .into_inner()
        .into_options(config.default_password_length);

    let generated = match service.generate(&options).await {
        Ok(generated) => generated,
        Err(e) => {
            info!("Rejected generation request: {}", e);
            return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e.to_string()));
        }
    };

    let strength = analyze_password_strength(&generated.password);
    debug!(
        "Generated {}-character password ({:?}, strength {})",
        options.length, generated.source, strength
    );

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        length: Some(generated.password.chars().count()),
        password: Some(generated.password),
        strength: Some(strength),
        label: Some(StrengthBand::from_score(strength)),
        source: Some(generated.source),
        parameters: Some(options),
        error: None,
    })
}

/// Analyze password strength
///
/// Scores a password and lists what would raise the score.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(
    analysis_req: web::Json<PasswordAnalysisRequest>,
) -> impl Responder {
    let password = &analysis_req.password;
    let strength = analyze_password_strength(password);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength,
        label: StrengthBand::from_score(strength),
        feedback: strength_feedback(password),
        error: None,
    })
}

// src/generators/strength.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

// Analyze password strength
//
// Heuristic only, not an entropy estimate. The weighting is fixed because
// clients classify the result into bands.
pub fn analyze_password_strength(password: &str) -> u8 {
    let length = password.chars().count();
    if length == 0 {
        return 0;
    }

    // Length contribution (up to 25 points)
    let mut score = (length as f64 / 4.0).min(25.0);

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15.0;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15.0;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15.0;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 20.0;
    }

    if length > 12 {
        score += 10.0;
    }

    // Truncating keeps band boundaries the same as on the raw sum
    score.clamp(0.0, 100.0).floor() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthBand {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => StrengthBand::Weak,
            30..=59 => StrengthBand::Fair,
            60..=79 => StrengthBand::Good,
            _ => StrengthBand::Strong,
        }
    }
}

impl std::fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthBand::Weak => write!(f, "Weak"),
            StrengthBand::Fair => write!(f, "Fair"),
            StrengthBand::Good => write!(f, "Good"),
            StrengthBand::Strong => write!(f, "Strong"),
        }
    }
}

/// Hints for raising the score, one per missing contribution.
pub fn strength_feedback(password: &str) -> Vec<String> {
    let mut feedback = Vec::new();

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        feedback.push("Add lowercase letters for better security".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        feedback.push("Add uppercase letters for better security".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        feedback.push("Add numbers for better security".to_string());
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        feedback.push("Add symbols for better security".to_string());
    }
    if password.chars().count() <= 12 {
        feedback.push("Use more than 12 characters".to_string());
    }
    if has_sequence(password) {
        feedback.push("Avoid runs like 'abc' or '123'".to_string());
    }

    feedback
}

// Three or more consecutive ascending letters or digits
fn has_sequence(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| {
        let same_kind = w.iter().all(|c| c.is_ascii_digit())
            || w.iter().all(|c| c.is_ascii_lowercase())
            || w.iter().all(|c| c.is_ascii_uppercase());
        same_kind && w[1] as u32 == w[0] as u32 + 1 && w[2] as u32 == w[1] as u32 + 1
    })
}

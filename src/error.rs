use crate::types::validation::ValidationIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotoscoreError {
    #[error("validation failed for {vehicle}: {}", summarize(.issues))]
    ValidationFailed {
        vehicle: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("scoring precondition violated: {0}")]
    ScoringPrecondition(String),

    #[error("no scorable vehicles in batch")]
    EmptyBatch,

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, MotoscoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failed_lists_every_issue() {
        let err = MotoscoreError::ValidationFailed {
            vehicle: "Acme Roadster".to_string(),
            issues: vec![
                ValidationIssue::new("MISSING_BRAND", "brand is required", Some("brand")),
                ValidationIssue::new("INVALID_POWER", "power must be positive", Some("power_bhp")),
            ],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Acme Roadster"));
        assert!(rendered.contains("MISSING_BRAND"));
        assert!(rendered.contains("INVALID_POWER"));
    }
}

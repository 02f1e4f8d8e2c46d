use std::path::PathBuf;

use serde::Serialize;

/// Failure raised while scoring an applicant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("model unavailable ({}): {reason}", path.display())]
    ModelUnavailable { path: PathBuf, reason: String },
    #[error("inference failed: {0}")]
    InferenceError(String),
}

/// Coarse classification so callers can tell caller mistakes from service faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringErrorKind {
    InvalidInput,
    ModelUnavailable,
    InferenceError,
}

impl ScoringError {
    pub fn kind(&self) -> ScoringErrorKind {
        match self {
            ScoringError::InvalidInput { .. } => ScoringErrorKind::InvalidInput,
            ScoringError::ModelUnavailable { .. } => ScoringErrorKind::ModelUnavailable,
            ScoringError::InferenceError(_) => ScoringErrorKind::InferenceError,
        }
    }

    /// True when the caller can fix the request and retry.
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind(), ScoringErrorKind::InvalidInput)
    }
}

impl ScoringErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            ScoringErrorKind::InvalidInput => "invalid_input",
            ScoringErrorKind::ModelUnavailable => "model_unavailable",
            ScoringErrorKind::InferenceError => "inference_error",
        }
    }
}

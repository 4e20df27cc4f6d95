use thiserror::Error;

use crate::models::Source;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{upstream} request failed: {detail}")]
    NetworkFailure { upstream: Source, detail: String },

    #[error("{upstream} returned a malformed response: {detail}")]
    MalformedResponse { upstream: Source, detail: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn network(upstream: Source, detail: impl Into<String>) -> Self {
        AppError::NetworkFailure {
            upstream,
            detail: detail.into(),
        }
    }

    pub fn malformed(upstream: Source, detail: impl Into<String>) -> Self {
        AppError::MalformedResponse {
            upstream,
            detail: detail.into(),
        }
    }
}

//! Error types for the filings pipeline
//!
//! Every failure the fetcher can produce collapses into a single message
//! string at the HTTP boundary: `{"error": "<message>"}`.

use thiserror::Error;

/// Failure while retrieving or reshaping a company's filing index
#[derive(Error, Debug)]
pub enum FilingsError {
    #[error("Failed to retrieve data. Status Code: {0}")]
    UpstreamStatus(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Malformed filing index: column '{column}' has {found} entries, expected {expected}")]
    MalformedColumns {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid CIK: {0}")]
    InvalidCik(String),
}

impl FilingsError {
    /// Upstream HTTP status, if the failure came from a non-success response
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus(code) => Some(*code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Invalid configuration value read from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(feature = "server")]
mod response {
    use super::FilingsError;
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };
    use serde::Serialize;

    #[derive(Serialize)]
    struct ErrorBody {
        error: String,
    }

    impl IntoResponse for FilingsError {
        fn into_response(self) -> Response {
            let body = ErrorBody {
                error: self.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

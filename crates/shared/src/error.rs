use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single remote lookup, reported at the collaborator boundary.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("no record for key {key}")]
    NotFound { key: String },
    #[error("upstream failure: {message}")]
    Upstream { message: String },
}

impl LookupError {
    pub fn not_found(key: impl std::fmt::Display) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageErrorCode {
    NotFound,
}

/// Page-level composition failure handed to the renderer.
///
/// Only primary-lookup failures surface here; a failed secondary lookup is
/// absorbed into the view-model's `degraded` flag and never becomes an error.
/// Upstream failures on the primary collapse to `NotFound` so the renderer
/// has exactly one error view to show.
#[derive(Debug, Clone, Error)]
#[error("{code:?}: {message}")]
pub struct PageError {
    pub code: PageErrorCode,
    pub message: String,
}

impl PageError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: PageErrorCode::NotFound,
            message: message.into(),
        }
    }
}

impl From<LookupError> for PageError {
    fn from(value: LookupError) -> Self {
        Self::not_found(value.to_string())
    }
}

// src/core/error.rs
//! Error taxonomy shared by every backend client

use thiserror::Error;

/// Message used when a service reports `success: false` without an `error` text.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unknown error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The network call itself failed (DNS, refused connection, aborted body)
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    /// Non-2xx status. The body is never read.
    #[error("API error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// 2xx response whose envelope carries `success: false`
    #[error("{message}")]
    Application { message: String },

    /// Body was not JSON, or did not fit the declared type
    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid {resource} id: {id} (ids must be positive)")]
    InvalidId { resource: &'static str, id: u64 },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err)
        }
    }
}

impl ApiError {
    /// HTTP status for `Http` failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Reject non-positive ids before any request leaves the process
pub(crate) fn require_positive_id(resource: &'static str, id: u64) -> ApiResult<u64> {
    if id == 0 {
        return Err(ApiError::InvalidId { resource, id });
    }
    Ok(id)
}

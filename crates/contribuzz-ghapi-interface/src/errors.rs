//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response from the upstream API.
    #[error("GitHub API responded with status {}: {}", status, message)]
    GitHubResponse { status: u16, message: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// Upstream HTTP status, when the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::GitHubResponse { status, .. } => Some(*status),
            Self::ImplementationError { .. } => None,
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;

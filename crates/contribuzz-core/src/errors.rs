//! Logic errors.

use contribuzz_ghapi_interface::ApiError;
use contribuzz_mailer_interface::MailerError;
use contribuzz_models::RepositoryPathError;
use contribuzz_render::RenderError;
use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`contribuzz_models::RepositoryPathError`].
    #[error(transparent)]
    InvalidRepositoryPath { source: RepositoryPathError },

    #[error("Invalid file name '{}': expected a '{}' file", file_name, expected_extension)]
    InvalidWallFileName {
        file_name: String,
        expected_extension: &'static str,
    },

    #[error("Invalid image data URL: expected a '{}...' payload", expected_prefix)]
    InvalidImageDataUrl { expected_prefix: &'static str },

    #[error("Image size exceeds {} bytes", max_size)]
    WallImageTooLarge { size: u64, max_size: u64 },

    /// The store refused the write because the version token was stale.
    #[error("Conflicting write on wall artifact {}", path)]
    WallPublishConflict { path: String },

    #[error("Wall store responded with status {}: {}", status, message)]
    WallPublishUnavailable { status: u16, message: String },

    /// Wraps [`contribuzz_render::RenderError`].
    #[error("Render error: {source}")]
    RenderError { source: RenderError },

    /// Wraps [`contribuzz_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError { source: ApiError },

    /// Wraps [`contribuzz_mailer_interface::MailerError`].
    #[error("Mailer error: {source}")]
    MailerError { source: MailerError },

    #[error("Serialization error: {source}")]
    SerdeError { source: serde_json::Error },
}

impl From<RepositoryPathError> for DomainError {
    fn from(e: RepositoryPathError) -> Self {
        Self::InvalidRepositoryPath { source: e }
    }
}

impl From<RenderError> for DomainError {
    fn from(e: RenderError) -> Self {
        Self::RenderError { source: e }
    }
}

impl From<ApiError> for DomainError {
    fn from(e: ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<MailerError> for DomainError {
    fn from(e: MailerError) -> Self {
        Self::MailerError { source: e }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerdeError { source: e }
    }
}

impl DomainError {
    /// Upstream HTTP status carried by the error, when there is one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::ApiError { source } => source.status(),
            Self::WallPublishUnavailable { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;

//! Server errors.

use actix_http::StatusCode;
use actix_web::ResponseError;
use contribuzz_core::DomainError;
use contribuzz_mailer_interface::MailerError;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Domain error,\n  caused by: {}", source)]
    DomainError { source: DomainError },

    #[error("Mailer error,\n  caused by: {}", source)]
    MailerError { source: MailerError },

    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::DomainError { source } => domain_status_code(source),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// Map a domain failure to the status surfaced to the caller: bad input
/// is a 400, a forwardable upstream status is forwarded, everything
/// else is a 500.
pub(crate) fn domain_status_code(error: &DomainError) -> StatusCode {
    match error {
        DomainError::InvalidRepositoryPath { .. }
        | DomainError::InvalidWallFileName { .. }
        | DomainError::InvalidImageDataUrl { .. } => StatusCode::BAD_REQUEST,
        error => error
            .upstream_status()
            .and_then(|status| StatusCode::from_u16(status).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;

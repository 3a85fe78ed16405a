//! Mailer errors.

use thiserror::Error;

/// Mailer error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum MailerError {
    /// Invalid mailbox address.
    #[error("Invalid mailbox address: {}", address)]
    InvalidAddress { address: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `MailerError`.
pub type Result<T, E = MailerError> = core::result::Result<T, E>;

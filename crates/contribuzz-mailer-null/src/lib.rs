//! Null driver for the mail relay.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use contribuzz_mailer_interface::{MailMessage, MailerService, Result};

/// Null mailer service.
#[derive(Clone, Default)]
pub struct NullMailerService {
    _private: (),
}

impl NullMailerService {
    /// Build a null mailer service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl MailerService for NullMailerService {
    #[tracing::instrument(skip(self, message), fields(to = message.to, subject = message.subject))]
    async fn send(&self, message: &MailMessage) -> Result<()> {
        Ok(())
    }
}

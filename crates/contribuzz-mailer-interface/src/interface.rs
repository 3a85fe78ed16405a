use async_trait::async_trait;

use crate::{MailMessage, Result};

/// Mail relay interface
#[cfg_attr(feature = "testkit", mockall::automock)]
#[async_trait]
pub trait MailerService: Send + Sync {
    /// Send a mail through the relay.
    async fn send(&self, message: &MailMessage) -> Result<()>;
}

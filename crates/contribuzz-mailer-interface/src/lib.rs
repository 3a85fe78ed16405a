//! Mailer interface.

mod errors;
mod interface;
mod message;

pub use errors::{MailerError, Result};
pub use interface::MailerService;
#[cfg(feature = "testkit")]
pub use interface::MockMailerService;
pub use message::MailMessage;

//! Mail message.

/// A mail to relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Display name of the sender.
    pub from_name: String,
    /// Reply-to address, when the mail answers a user.
    pub reply_to: Option<String>,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub text_body: String,
    /// HTML body, sent as an alternative part when present.
    pub html_body: Option<String>,
}

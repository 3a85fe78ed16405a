//! SMTP driver for the mail relay.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use contribuzz_config::Config;
use contribuzz_mailer_interface::{MailMessage, MailerError, MailerService, Result};
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// SMTP mailer service.
pub struct SmtpMailerService {
    sender_address: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailerService {
    /// Creates a new SMTP mailer service from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let smtp = &config.mailer.smtp;

        // Implicit TLS for port 465, STARTTLS otherwise.
        let builder = if smtp.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
        }
        .map_err(|e| MailerError::ImplementationError { source: e.into() })?;

        let transport = builder
            .port(smtp.port)
            .credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ))
            .build();

        Ok(Self {
            sender_address: smtp.username.clone(),
            transport,
        })
    }

    fn parse_mailbox(address: &str, display_name: Option<&str>) -> Result<Mailbox> {
        let rendered = match display_name {
            Some(name) => format!("\"{name}\" <{address}>"),
            None => address.to_string(),
        };

        rendered.parse().map_err(|_| MailerError::InvalidAddress {
            address: rendered.clone(),
        })
    }
}

#[async_trait]
impl MailerService for SmtpMailerService {
    #[tracing::instrument(skip(self, message), fields(to = message.to, subject = message.subject))]
    async fn send(&self, message: &MailMessage) -> Result<()> {
        let mut builder = Message::builder()
            .from(Self::parse_mailbox(
                &self.sender_address,
                Some(&message.from_name),
            )?)
            .to(Self::parse_mailbox(&message.to, None)?)
            .subject(&message.subject);

        if let Some(reply_to) = &message.reply_to {
            builder = builder.reply_to(Self::parse_mailbox(reply_to, None)?);
        }

        let mail = match &message.html_body {
            Some(html_body) => builder.multipart(MultiPart::alternative_plain_html(
                message.text_body.clone(),
                html_body.clone(),
            )),
            None => builder.body(message.text_body.clone()),
        }
        .map_err(|e| MailerError::ImplementationError { source: e.into() })?;

        self.transport
            .send(mail)
            .await
            .map_err(|e| MailerError::ImplementationError { source: e.into() })?;

        Ok(())
    }
}

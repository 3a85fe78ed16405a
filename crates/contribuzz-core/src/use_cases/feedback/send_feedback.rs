use async_trait::async_trait;
use contribuzz_mailer_interface::MailMessage;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

const FEEDBACK_SENDER_NAME: &str = "Contri.buzz Feedback";
const FEEDBACK_SUBJECT: &str = "New Feedback Submission";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SendFeedbackInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, email: &str, feedback: &str) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = SendFeedbackInterface)]
pub(crate) struct SendFeedback;

#[async_trait]
impl SendFeedbackInterface for SendFeedback {
    #[tracing::instrument(skip_all)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, email: &str, feedback: &str) -> Result<()> {
        let message = MailMessage {
            from_name: FEEDBACK_SENDER_NAME.into(),
            reply_to: None,
            to: ctx.config.mailer.feedback_recipient.clone(),
            subject: FEEDBACK_SUBJECT.into(),
            text_body: format!("Email: {email}\n\nFeedback: {feedback}"),
            html_body: Some(format!(
                "<p><strong>Email:</strong> {email}</p><p><strong>Feedback:</strong> {feedback}</p>"
            )),
        };

        ctx.mailer_service.send(&message).await?;
        Ok(())
    }
}

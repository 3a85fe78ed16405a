pub mod send_feedback;

pub use send_feedback::SendFeedbackInterface;
#[cfg(any(test, feature = "testkit"))]
pub use send_feedback::MockSendFeedbackInterface;

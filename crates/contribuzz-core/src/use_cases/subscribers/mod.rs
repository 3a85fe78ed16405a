pub mod add_subscriber;

pub use add_subscriber::{AddSubscriberInterface, AddSubscriberOutcome};
#[cfg(any(test, feature = "testkit"))]
pub use add_subscriber::MockAddSubscriberInterface;

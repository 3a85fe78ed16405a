use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

/// File holding the subscriber document inside the gist.
const SUBSCRIBERS_FILE: &str = "subscribers.json";

/// The subscriber list document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SubscriberDocument {
    #[serde(rename = "emailList", default)]
    email_list: Vec<String>,
}

/// Outcome of a subscription request. A duplicate is a normal rejected
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddSubscriberOutcome {
    /// The address was appended to the list.
    Added,
    /// The exact address was already present; nothing was written.
    AlreadySubscribed,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait AddSubscriberInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, email: &str) -> Result<AddSubscriberOutcome>;
}

#[derive(Component)]
#[shaku(interface = AddSubscriberInterface)]
pub(crate) struct AddSubscriber;

#[async_trait]
impl AddSubscriberInterface for AddSubscriber {
    #[tracing::instrument(skip(self, ctx, email), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, email: &str) -> Result<AddSubscriberOutcome> {
        let gist_id = &ctx.config.subscribers.gist_id;
        let gist = ctx.api_service.gist_get(gist_id).await?;

        let mut document = match gist
            .files
            .get(SUBSCRIBERS_FILE)
            .and_then(|file| file.content.as_deref())
            .filter(|content| !content.is_empty())
        {
            Some(content) => serde_json::from_str::<SubscriberDocument>(content)?,
            None => SubscriberDocument::default(),
        };

        if document.email_list.iter().any(|entry| entry == email) {
            return Ok(AddSubscriberOutcome::AlreadySubscribed);
        }

        document.email_list.push(email.to_string());

        // Read-modify-write without the gist revision token: two
        // concurrent submissions can lose one update (last write wins).
        let content = serde_json::to_string_pretty(&document)?;
        ctx.api_service
            .gist_update_file(gist_id, SUBSCRIBERS_FILE, &content)
            .await?;

        Ok(AddSubscriberOutcome::Added)
    }
}

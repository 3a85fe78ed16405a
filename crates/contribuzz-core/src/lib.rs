//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    contributors::fetch_contributors::FetchContributors,
    embed::build_embed_snippet::BuildEmbedSnippet,
    feedback::send_feedback::SendFeedback,
    repositories::get_repository_info::GetRepositoryInfo,
    subscribers::add_subscriber::AddSubscriber,
    walls::{
        generate_wall::GenerateWall, publish_wall_image::PublishWallImage,
        resolve_wall_url::ResolveWallUrl,
    },
};

module! {
    pub CoreModule {
        components = [
            FetchContributors, GetRepositoryInfo, PublishWallImage,
            ResolveWallUrl, GenerateWall, AddSubscriber, SendFeedback,
            BuildEmbedSnippet
        ],
        providers = []
    }
}

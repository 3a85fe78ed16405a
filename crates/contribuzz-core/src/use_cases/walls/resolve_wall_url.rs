use async_trait::async_trait;
use contribuzz_models::{RepositoryPath, WallKind};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolveWallUrlInterface: Interface {
    /// Resolve the public URL of the latest published wall for a
    /// repository, or `None` when no wall was ever published.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        kind: WallKind,
    ) -> Result<Option<String>>;
}

#[derive(Component)]
#[shaku(interface = ResolveWallUrlInterface)]
pub(crate) struct ResolveWallUrl;

#[async_trait]
impl ResolveWallUrlInterface for ResolveWallUrl {
    #[tracing::instrument(skip(self, ctx), fields(repository_path = %repository_path, kind = ?kind), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        kind: WallKind,
    ) -> Result<Option<String>> {
        let file_name = kind.file_name(repository_path);
        let path = format!("{}/{}", ctx.config.wall.images_dir, file_name);

        // Existence is checked against the store of record; the redirect
        // target is its CDN mirror.
        let existing = ctx
            .api_service
            .contents_get(
                &ctx.config.wall.publish_owner,
                &ctx.config.wall.publish_repo,
                &path,
            )
            .await?;

        Ok(existing.map(|_| {
            format!(
                "{}/{}/{}/{}",
                ctx.config.wall.cdn_root_url,
                ctx.config.wall.publish_owner,
                ctx.config.wall.publish_repo,
                path
            )
        }))
    }
}

use async_trait::async_trait;
use contribuzz_models::{Contributor, PublishedWall, RepositoryPath, WallKind};
use contribuzz_render::{compress_to_data_url, decode_avatar, WallImageFormat, WallRenderer, WallTile};
use futures::{stream, StreamExt};
use shaku::{Component, HasComponent, Interface};
use tracing::warn;

use crate::{
    use_cases::contributors::FetchContributorsInterface,
    use_cases::walls::PublishWallImageInterface, CoreContext, Result,
};

/// Concurrent avatar downloads, order-preserving.
const AVATAR_CONCURRENCY: usize = 8;

/// Both published artifacts of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWalls {
    /// Full wall (JPEG).
    pub full: PublishedWall,
    /// Avatar-only wall (PNG).
    pub avatars: PublishedWall,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GenerateWallInterface: Interface {
    /// Run the whole pipeline: fetch contributors, render both walls,
    /// compress them under the byte budget and publish both artifacts.
    ///
    /// Concurrent runs for the same repository are not coordinated:
    /// their publish steps interleave and the last write wins.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
    ) -> Result<GeneratedWalls>;
}

#[derive(Component)]
#[shaku(interface = GenerateWallInterface)]
pub(crate) struct GenerateWall;

#[async_trait]
impl GenerateWallInterface for GenerateWall {
    #[tracing::instrument(skip(self, ctx), fields(repository_path = %repository_path))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
    ) -> Result<GeneratedWalls> {
        let fetch_contributors: &dyn FetchContributorsInterface = ctx.core_module.resolve_ref();
        let contributors = fetch_contributors
            .run(ctx, &repository_path.full_name())
            .await?;

        let tile_futures: Vec<_> = contributors
            .iter()
            .map(|contributor| self.load_tile(ctx, contributor))
            .collect();
        let tiles = stream::iter(tile_futures)
            .buffered(AVATAR_CONCURRENCY)
            .collect::<Vec<_>>()
            .await;

        let (full_image, avatar_image) = {
            let mut renderer = WallRenderer::new();
            (
                renderer.render_full_wall(&tiles),
                renderer.render_avatar_wall(&tiles),
            )
        };

        let max_bytes = ctx.config.wall.max_image_bytes as usize;
        let full_data_url = compress_to_data_url(&full_image, WallImageFormat::Jpeg, max_bytes)?;
        let avatar_data_url =
            compress_to_data_url(&avatar_image, WallImageFormat::Png, max_bytes)?;

        let publish_wall_image: &dyn PublishWallImageInterface = ctx.core_module.resolve_ref();
        let full = publish_wall_image
            .run(
                ctx,
                WallKind::Full,
                &WallKind::Full.file_name(repository_path),
                &full_data_url,
            )
            .await?;
        let avatars = publish_wall_image
            .run(
                ctx,
                WallKind::AvatarOnly,
                &WallKind::AvatarOnly.file_name(repository_path),
                &avatar_data_url,
            )
            .await?;

        Ok(GeneratedWalls { full, avatars })
    }
}

impl GenerateWall {
    /// Download and decode one avatar. A failed download or decode
    /// degrades the cell to a placeholder, never the whole wall.
    async fn load_tile(&self, ctx: &CoreContext<'_>, contributor: &Contributor) -> WallTile {
        let avatar = match ctx.api_service.image_download(&contributor.avatar_url).await {
            Ok(bytes) => match decode_avatar(&bytes) {
                Ok(image) => Some(image),
                Err(error) => {
                    warn!(
                        login = contributor.login,
                        error = %error,
                        message = "Could not decode avatar, using placeholder",
                    );
                    None
                }
            },
            Err(error) => {
                warn!(
                    login = contributor.login,
                    error = %error,
                    message = "Could not download avatar, using placeholder",
                );
                None
            }
        };

        WallTile {
            login: contributor.login.clone(),
            contributions: contributor.contributions,
            avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use contribuzz_ghapi_interface::{
        types::{GhContentFile, GhContributor},
        ApiError, MockApiService,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_generates_and_publishes_both_walls() {
        let mut ctx = CoreContextTest::new();
        ctx.config.wall.publish_owner = "walls".into();
        ctx.config.wall.publish_repo = "storage".into();

        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_contributors_list().once().return_once(|_, _| {
                Ok(vec![GhContributor {
                    login: "alice".into(),
                    avatar_url: "https://avatars.test/alice".into(),
                    contributions: 7,
                    html_url: "https://github.test/alice".into(),
                    url: "https://api.github.test/users/alice".into(),
                }])
            });
            // Enrichment and avatar download both fail: the pipeline
            // must still produce and publish both walls.
            svc.expect_user_get().once().return_once(|_| {
                Err(ApiError::GitHubResponse {
                    status: 500,
                    message: "profile down".into(),
                })
            });
            svc.expect_image_download().once().return_once(|_| {
                Err(ApiError::GitHubResponse {
                    status: 404,
                    message: "no avatar".into(),
                })
            });
            svc.expect_contents_get()
                .times(2)
                .returning(|_, _, _| Ok(None));
            svc.expect_contents_create_or_update()
                .times(2)
                .withf(|_, _, _, message, _, sha| message.starts_with("Upload ") && sha.is_none())
                .returning(|_, _, path, _, _, _| {
                    Ok(GhContentFile {
                        name: path.rsplit('/').next().unwrap_or(path).into(),
                        path: path.into(),
                        sha: "fresh".into(),
                        html_url: Some(format!("https://github.test/walls/storage/{path}")),
                        download_url: None,
                    })
                });
            svc
        };

        let walls = GenerateWall
            .run(&ctx.as_context(), &("Foo", "Bar").into())
            .await
            .unwrap();

        assert_eq!(walls.full.file_name, "foo-bar.jpg");
        assert_eq!(walls.full.path, "public/walls/foo-bar.jpg");
        assert_eq!(walls.avatars.file_name, "foo-bar(avatars).png");
        assert_eq!(walls.avatars.path, "public/walls/foo-bar(avatars).png");
    }

    #[tokio::test]
    async fn run_fails_when_contributors_are_unavailable() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_contributors_list().once().return_once(|_, _| {
                Err(ApiError::GitHubResponse {
                    status: 502,
                    message: "bad gateway".into(),
                })
            });
            svc
        };

        let result = GenerateWall.run(&ctx.as_context(), &("Foo", "Bar").into()).await;
        assert_eq!(result.unwrap_err().upstream_status(), Some(502));
    }
}

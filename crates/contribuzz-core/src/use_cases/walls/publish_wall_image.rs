use async_trait::async_trait;
use contribuzz_ghapi_interface::ApiError;
use contribuzz_models::{base64_payload_size, split_data_url, PublishedWall, WallKind};
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PublishWallImageInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        kind: WallKind,
        file_name: &str,
        image_data_url: &str,
    ) -> Result<PublishedWall>;
}

#[derive(Component)]
#[shaku(interface = PublishWallImageInterface)]
pub(crate) struct PublishWallImage;

#[async_trait]
impl PublishWallImageInterface for PublishWallImage {
    #[tracing::instrument(skip(self, ctx, image_data_url), fields(kind = ?kind, file_name))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        kind: WallKind,
        file_name: &str,
        image_data_url: &str,
    ) -> Result<PublishedWall> {
        if !file_name.ends_with(kind.extension()) {
            return Err(DomainError::InvalidWallFileName {
                file_name: file_name.into(),
                expected_extension: kind.extension(),
            });
        }

        let payload = split_data_url(image_data_url)
            .filter(|_| image_data_url.starts_with(kind.data_url_prefix()))
            .map(|(_, payload)| payload)
            .ok_or(DomainError::InvalidImageDataUrl {
                expected_prefix: kind.data_url_prefix(),
            })?;

        let size = base64_payload_size(image_data_url);
        if size > ctx.config.wall.max_image_bytes {
            return Err(DomainError::WallImageTooLarge {
                size,
                max_size: ctx.config.wall.max_image_bytes,
            });
        }

        let owner = &ctx.config.wall.publish_owner;
        let repo = &ctx.config.wall.publish_repo;
        let path = format!("{}/{}", ctx.config.wall.images_dir, file_name);

        // The current blob sha is the version token; the write API
        // rejects an update without it.
        let sha = ctx
            .api_service
            .contents_get(owner, repo, &path)
            .await
            .map_err(|e| publish_error(e, &path))?
            .map(|file| file.sha);

        let message = if sha.is_some() {
            format!("Update {file_name}")
        } else {
            format!("Upload {file_name}")
        };

        let written = ctx
            .api_service
            .contents_create_or_update(owner, repo, &path, &message, payload, sha.as_deref())
            .await
            .map_err(|e| publish_error(e, &path))?;

        Ok(PublishedWall {
            file_name: file_name.into(),
            path: written.path,
            html_url: written.html_url,
        })
    }
}

/// Map store failures: a 409 means the version token went stale under
/// a concurrent writer, other statuses mean the store is unavailable.
fn publish_error(error: ApiError, path: &str) -> DomainError {
    match error {
        ApiError::GitHubResponse { status: 409, .. } => DomainError::WallPublishConflict {
            path: path.to_string(),
        },
        ApiError::GitHubResponse { status, message } => {
            DomainError::WallPublishUnavailable { status, message }
        }
        error => DomainError::ApiError { source: error },
    }
}

use async_trait::async_trait;
use contribuzz_ghapi_interface::types::GhRepositoryInfo;
use contribuzz_models::RepositoryPath;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetRepositoryInfoInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
    ) -> Result<GhRepositoryInfo>;
}

#[derive(Component)]
#[shaku(interface = GetRepositoryInfoInterface)]
pub(crate) struct GetRepositoryInfo;

#[async_trait]
impl GetRepositoryInfoInterface for GetRepositoryInfo {
    #[tracing::instrument(skip(self, ctx), fields(repository_path = %repository_path))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
    ) -> Result<GhRepositoryInfo> {
        let (owner, name) = repository_path.components();
        Ok(ctx.api_service.repository_get(owner, name).await?)
    }
}

#[cfg(test)]
mod tests {
    use contribuzz_ghapi_interface::{types::GhRepositoryInfo, ApiError, MockApiService};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_repository_get()
                .once()
                .withf(|owner, name| owner == "foo" && name == "bar")
                .return_once(|_, _| {
                    Ok(GhRepositoryInfo {
                        name: "bar".into(),
                        full_name: "foo/bar".into(),
                        stargazers_count: 12,
                        ..GhRepositoryInfo::default()
                    })
                });
            svc
        };

        let info = GetRepositoryInfo
            .run(&ctx.as_context(), &("foo", "bar").into())
            .await
            .unwrap();
        assert_eq!(info.full_name, "foo/bar");
        assert_eq!(info.stargazers_count, 12);
    }

    #[tokio::test]
    async fn run_propagates_upstream_status() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_repository_get().once().return_once(|_, _| {
                Err(ApiError::GitHubResponse {
                    status: 404,
                    message: "Not Found".into(),
                })
            });
            svc
        };

        let result = GetRepositoryInfo
            .run(&ctx.as_context(), &("foo", "bar").into())
            .await;
        assert_eq!(result.unwrap_err().upstream_status(), Some(404));
    }
}

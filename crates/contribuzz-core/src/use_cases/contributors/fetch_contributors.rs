use std::str::FromStr;

use async_trait::async_trait;
use contribuzz_ghapi_interface::types::GhContributor;
use contribuzz_models::{Contributor, RepositoryPath};
use futures::{stream, StreamExt};
use shaku::{Component, Interface};
use tracing::warn;

use crate::{CoreContext, Result};

/// Concurrent profile lookups. Order-preserving, so the output keeps
/// the upstream contribution ordering.
const ENRICHMENT_CONCURRENCY: usize = 8;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FetchContributorsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_url: &str,
    ) -> Result<Vec<Contributor>>;
}

#[derive(Component)]
#[shaku(interface = FetchContributorsInterface)]
pub(crate) struct FetchContributors;

#[async_trait]
impl FetchContributorsInterface for FetchContributors {
    #[tracing::instrument(skip(self, ctx), fields(repository_url))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_url: &str,
    ) -> Result<Vec<Contributor>> {
        let repository_path = RepositoryPath::from_str(repository_url)?;
        let (owner, name) = repository_path.components();

        let contributors = ctx.api_service.contributors_list(owner, name).await?;

        let enriched = stream::iter(
            contributors
                .into_iter()
                .take(ctx.config.wall.max_contributors)
                .map(|contributor| self.enrich(ctx, contributor)),
        )
        .buffered(ENRICHMENT_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

        Ok(enriched)
    }
}

impl FetchContributors {
    /// Complete a contributor with profile fields. A failed lookup keeps
    /// the contributor with its primary fields only; it never aborts the
    /// whole batch.
    async fn enrich(&self, ctx: &CoreContext<'_>, contributor: GhContributor) -> Contributor {
        match ctx.api_service.user_get(&contributor.login).await {
            Ok(profile) => Contributor {
                login: contributor.login,
                avatar_url: profile.avatar_url,
                contributions: contributor.contributions,
                html_url: contributor.html_url,
                name: profile.name,
                bio: profile.bio,
                location: profile.location,
            },
            Err(error) => {
                warn!(
                    login = contributor.login,
                    error = %error,
                    message = "Could not fetch contributor profile, keeping primary fields",
                );
                Contributor {
                    login: contributor.login,
                    avatar_url: contributor.avatar_url,
                    contributions: contributor.contributions,
                    html_url: contributor.html_url,
                    name: None,
                    bio: None,
                    location: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use contribuzz_ghapi_interface::{
        types::{GhContributor, GhUserProfile},
        ApiError, MockApiService,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{context::tests::CoreContextTest, DomainError};

    fn gh_contributor(login: &str, contributions: u64) -> GhContributor {
        GhContributor {
            login: login.into(),
            avatar_url: format!("https://avatars.test/{login}"),
            contributions,
            html_url: format!("https://github.test/{login}"),
            url: format!("https://api.github.test/users/{login}"),
        }
    }

    #[tokio::test]
    async fn run_enriches_contributors() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_contributors_list()
                .once()
                .withf(|owner, name| owner == "foo" && name == "bar")
                .return_once(|_, _| Ok(vec![gh_contributor("alice", 10)]));
            svc.expect_user_get()
                .once()
                .withf(|login| login == "alice")
                .return_once(|_| {
                    Ok(GhUserProfile {
                        login: "alice".into(),
                        avatar_url: "https://avatars.test/alice?fresh".into(),
                        name: Some("Alice".into()),
                        bio: Some("Rustacean".into()),
                        location: Some("Somewhere".into()),
                    })
                });
            svc
        };

        let contributors = FetchContributors
            .run(&ctx.as_context(), "foo/bar")
            .await
            .unwrap();

        assert_eq!(contributors.len(), 1);
        assert_eq!(contributors[0].login, "alice");
        assert_eq!(contributors[0].avatar_url, "https://avatars.test/alice?fresh");
        assert_eq!(contributors[0].name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn run_keeps_contributor_on_profile_failure() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_contributors_list()
                .once()
                .return_once(|_, _| Ok(vec![gh_contributor("alice", 10), gh_contributor("bob", 5)]));
            svc.expect_user_get()
                .withf(|login| login == "alice")
                .return_once(|_| {
                    Err(ApiError::GitHubResponse {
                        status: 403,
                        message: "rate limited".into(),
                    })
                });
            svc.expect_user_get()
                .withf(|login| login == "bob")
                .return_once(|_| {
                    Ok(GhUserProfile {
                        login: "bob".into(),
                        avatar_url: "https://avatars.test/bob".into(),
                        name: Some("Bob".into()),
                        ..GhUserProfile::default()
                    })
                });
            svc
        };

        let contributors = FetchContributors
            .run(&ctx.as_context(), "foo/bar")
            .await
            .unwrap();

        // Order follows the upstream list, failure keeps primary fields.
        assert_eq!(contributors.len(), 2);
        assert_eq!(contributors[0].login, "alice");
        assert_eq!(contributors[0].name, None);
        assert_eq!(contributors[1].login, "bob");
        assert_eq!(contributors[1].name.as_deref(), Some("Bob"));
    }

    #[tokio::test]
    async fn run_truncates_to_configured_maximum() {
        let mut ctx = CoreContextTest::new();
        ctx.config.wall.max_contributors = 2;

        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_contributors_list().once().return_once(|_, _| {
                Ok((0..5)
                    .map(|i| gh_contributor(&format!("user{i}"), 5 - i))
                    .collect())
            });
            svc.expect_user_get()
                .times(2)
                .returning(|login| Err(ApiError::GitHubResponse {
                    status: 500,
                    message: format!("no profile for {login}"),
                }));
            svc
        };

        let contributors = FetchContributors
            .run(&ctx.as_context(), "foo/bar")
            .await
            .unwrap();
        assert_eq!(contributors.len(), 2);
    }

    #[tokio::test]
    async fn run_rejects_invalid_repository_url() {
        let ctx = CoreContextTest::new();

        let result = FetchContributors.run(&ctx.as_context(), "not-a-repo").await;
        assert!(matches!(
            result,
            Err(DomainError::InvalidRepositoryPath { .. })
        ));
    }

    #[tokio::test]
    async fn run_surfaces_upstream_failure() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_contributors_list().once().return_once(|_, _| {
                Err(ApiError::GitHubResponse {
                    status: 404,
                    message: "Not Found".into(),
                })
            });
            svc
        };

        let result = FetchContributors.run(&ctx.as_context(), "foo/bar").await;
        assert_eq!(result.unwrap_err().upstream_status(), Some(404));
    }
}

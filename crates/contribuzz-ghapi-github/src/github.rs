//! GitHub adapter.

use async_trait::async_trait;
use contribuzz_config::Config;
use contribuzz_ghapi_interface::{
    types::{GhContentFile, GhContributor, GhGist, GhRepositoryInfo, GhUserProfile},
    ApiService, Result,
};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    auth::{build_github_url, get_client_builder, TokenScope},
    errors::GitHubError,
};

const CONTRIBUTORS_PER_PAGE: usize = 100;

/// GitHub API service implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    client: Client,
}

impl GithubApiService {
    /// Creates a new GitHub API service.
    pub fn new(config: Config) -> Self {
        let client = get_client_builder(&config)
            .build()
            .expect("GitHub client configuration should be valid");

        Self { config, client }
    }

    fn get(&self, path: &str, scope: TokenScope) -> reqwest::RequestBuilder {
        self.client
            .get(build_github_url(&self.config, path))
            .bearer_auth(scope.token(&self.config))
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, GitHubError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(error_from_response(status, response).await)
        }
    }
}

/// Extract the upstream `message` field from an error response,
/// falling back to the canonical status reason.
async fn error_from_response(status: StatusCode, response: Response) -> GitHubError {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error from GitHub API")
            .to_string(),
    };

    GitHubError::GitHubResponse {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn contributors_list(&self, owner: &str, name: &str) -> Result<Vec<GhContributor>> {
        let response = self
            .get(
                &format!("/repos/{owner}/{name}/contributors?per_page={CONTRIBUTORS_PER_PAGE}"),
                TokenScope::Read,
            )
            .send()
            .await
            .map_err(GitHubError::from)?;

        Ok(Self::parse_json(response).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn user_get(&self, login: &str) -> Result<GhUserProfile> {
        let response = self
            .get(&format!("/users/{login}"), TokenScope::Read)
            .send()
            .await
            .map_err(GitHubError::from)?;

        Ok(Self::parse_json(response).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn repository_get(&self, owner: &str, name: &str) -> Result<GhRepositoryInfo> {
        let response = self
            .get(&format!("/repos/{owner}/{name}"), TokenScope::Read)
            .send()
            .await
            .map_err(GitHubError::from)?;

        Ok(Self::parse_json(response).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn contents_get(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<Option<GhContentFile>> {
        let response = self
            .get(
                &format!("/repos/{owner}/{name}/contents/{path}"),
                TokenScope::Publish,
            )
            .send()
            .await
            .map_err(GitHubError::from)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        // A directory listing comes back as an array; only a plain file
        // carries a usable version token.
        let value: serde_json::Value = Self::parse_json(response).await?;
        if value.is_object() {
            let file: GhContentFile = serde_json::from_value(value)
                .map_err(|e| GitHubError::ImplementationError { source: e.into() })?;
            Ok(Some(file))
        } else {
            Ok(None)
        }
    }

    #[tracing::instrument(skip(self, content_b64))]
    async fn contents_create_or_update<'a>(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        message: &str,
        content_b64: &str,
        sha: Option<&'a str>,
    ) -> Result<GhContentFile> {
        #[derive(Deserialize)]
        struct ContentsResponse {
            content: GhContentFile,
        }

        let mut body = serde_json::json!({
            "message": message,
            "content": content_b64,
        });
        if let Some(sha) = sha {
            body["sha"] = serde_json::Value::String(sha.into());
        }

        let response = self
            .client
            .put(build_github_url(
                &self.config,
                format!("/repos/{owner}/{name}/contents/{path}"),
            ))
            .bearer_auth(TokenScope::Publish.token(&self.config))
            .json(&body)
            .send()
            .await
            .map_err(GitHubError::from)?;

        let response: ContentsResponse = Self::parse_json(response).await?;
        Ok(response.content)
    }

    #[tracing::instrument(skip(self))]
    async fn gist_get(&self, gist_id: &str) -> Result<GhGist> {
        let response = self
            .get(&format!("/gists/{gist_id}"), TokenScope::Gist)
            .send()
            .await
            .map_err(GitHubError::from)?;

        Ok(Self::parse_json(response).await?)
    }

    #[tracing::instrument(skip(self, content))]
    async fn gist_update_file(&self, gist_id: &str, file_name: &str, content: &str) -> Result<()> {
        let mut files = serde_json::Map::new();
        files.insert(
            file_name.to_string(),
            serde_json::json!({ "content": content }),
        );
        let body = serde_json::json!({ "files": files });

        let response = self
            .client
            .patch(build_github_url(&self.config, format!("/gists/{gist_id}")))
            .bearer_auth(TokenScope::Gist.token(&self.config))
            .json(&body)
            .send()
            .await
            .map_err(GitHubError::from)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(error_from_response(status, response).await.into())
        }
    }

    #[tracing::instrument(skip(self))]
    async fn image_download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await.map_err(GitHubError::from)?;

        let status = response.status();
        if status.is_success() {
            Ok(response
                .bytes()
                .await
                .map_err(GitHubError::from)?
                .to_vec())
        } else {
            Err(error_from_response(status, response).await.into())
        }
    }
}

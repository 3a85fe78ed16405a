use async_trait::async_trait;

use crate::{
    types::{GhContentFile, GhContributor, GhGist, GhRepositoryInfo, GhUserProfile},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(feature = "testkit", mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List contributors of a repository, most contributions first,
    /// first page only (up to 100 entries).
    async fn contributors_list(&self, owner: &str, name: &str) -> Result<Vec<GhContributor>>;
    /// Get a user profile.
    async fn user_get(&self, login: &str) -> Result<GhUserProfile>;
    /// Get repository metadata.
    async fn repository_get(&self, owner: &str, name: &str) -> Result<GhRepositoryInfo>;
    /// Get a file from a repository, or `None` when absent.
    async fn contents_get(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<Option<GhContentFile>>;
    /// Create or update a file in a repository.
    ///
    /// `sha` is the current blob version token and is required when the
    /// file already exists; the write fails on a stale token.
    async fn contents_create_or_update<'a>(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        message: &str,
        content_b64: &str,
        sha: Option<&'a str>,
    ) -> Result<GhContentFile>;
    /// Get a gist.
    async fn gist_get(&self, gist_id: &str) -> Result<GhGist>;
    /// Replace the content of a single file inside a gist.
    async fn gist_update_file(&self, gist_id: &str, file_name: &str, content: &str) -> Result<()>;
    /// Download an image from an arbitrary URL.
    async fn image_download(&self, url: &str) -> Result<Vec<u8>>;
}

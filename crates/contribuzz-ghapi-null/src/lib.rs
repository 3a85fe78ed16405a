//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use contribuzz_ghapi_interface::{
    types::{GhContentFile, GhContributor, GhGist, GhRepositoryInfo, GhUserProfile},
    ApiService, Result,
};

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn contributors_list(&self, owner: &str, name: &str) -> Result<Vec<GhContributor>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn user_get(&self, login: &str) -> Result<GhUserProfile> {
        Ok(GhUserProfile {
            login: login.into(),
            ..GhUserProfile::default()
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn repository_get(&self, owner: &str, name: &str) -> Result<GhRepositoryInfo> {
        Ok(GhRepositoryInfo {
            name: name.into(),
            full_name: format!("{owner}/{name}"),
            ..GhRepositoryInfo::default()
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn contents_get(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<Option<GhContentFile>> {
        Ok(None)
    }

    #[tracing::instrument(skip(self, content_b64), ret)]
    async fn contents_create_or_update<'a>(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        message: &str,
        content_b64: &str,
        sha: Option<&'a str>,
    ) -> Result<GhContentFile> {
        Ok(GhContentFile {
            name: path.rsplit('/').next().unwrap_or(path).into(),
            path: path.into(),
            ..GhContentFile::default()
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn gist_get(&self, gist_id: &str) -> Result<GhGist> {
        Ok(GhGist::default())
    }

    #[tracing::instrument(skip(self, content))]
    async fn gist_update_file(&self, gist_id: &str, file_name: &str, content: &str) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn image_download(&self, url: &str) -> Result<Vec<u8>> {
        Ok(vec![])
    }
}

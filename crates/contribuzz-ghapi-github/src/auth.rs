//! Auth.

use std::time::Duration;

use contribuzz_config::Config;
use reqwest::{
    header::{self, HeaderMap},
    ClientBuilder,
};

use crate::errors::GitHubError;

/// Token families used against the GitHub API.
///
/// The read token covers contributors/users/repositories, the publish
/// token covers contents writes on the wall repository, and the gist
/// token covers the subscriber store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenScope {
    Read,
    Publish,
    Gist,
}

impl TokenScope {
    pub(crate) fn token<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Self::Read => &config.api.github.token,
            Self::Publish => &config.wall.publish_token,
            Self::Gist => &config.subscribers.gist_token,
        }
    }
}

/// Get a GitHub client builder.
pub(crate) fn get_client_builder(config: &Config) -> ClientBuilder {
    const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("contribuzz/{APP_VERSION}"))
        .default_headers(headers)
}

/// Build a GitHub URL.
pub(crate) fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.api.github.root_url, path.into())
}

#[cfg(test)]
mod tests {
    use contribuzz_config::Config;

    use super::{build_github_url, get_client_builder, TokenScope};

    fn arrange_config() -> Config {
        let mut config = Config::from_env_no_version();
        config.api.github.token = "read-token".into();
        config.wall.publish_token = "publish-token".into();
        config.subscribers.gist_token = "gist-token".into();
        config
    }

    #[test]
    fn token_scopes() {
        let config = arrange_config();
        assert_eq!(TokenScope::Read.token(&config), "read-token");
        assert_eq!(TokenScope::Publish.token(&config), "publish-token");
        assert_eq!(TokenScope::Gist.token(&config), "gist-token");
    }

    #[test]
    fn github_url() {
        let config = arrange_config();
        assert_eq!(
            build_github_url(&config, "/repos/foo/bar"),
            "https://api.github.com/repos/foo/bar"
        );
    }

    #[test]
    fn client_builder_builds() {
        let config = arrange_config();
        get_client_builder(&config).build().unwrap();
    }
}

use contribuzz_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("GitHub API responded with status {}: {}", status, message)]
    GitHubResponse { status: u16, message: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::GitHubResponse { status, message } => {
                ApiError::GitHubResponse { status, message }
            }
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}

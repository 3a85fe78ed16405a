use contribuzz_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ConfigValidationError {
    #[error("Missing GitHub API token (BUZZ_API_GITHUB_TOKEN)")]
    MissingApiToken,
    #[error("Missing wall publish repository (BUZZ_WALL_PUBLISH_OWNER / BUZZ_WALL_PUBLISH_REPO)")]
    MissingPublishRepository,
    #[error("Missing wall publish token (BUZZ_WALL_PUBLISH_TOKEN)")]
    MissingPublishToken,
}

/// Validate the pieces of configuration the GitHub driver cannot run
/// without. The null driver needs none of them.
pub(crate) fn validate_configuration(config: &Config) -> Result<(), ConfigValidationError> {
    if config.api.driver == ApiDriver::GitHub {
        if config.api.github.token.is_empty() {
            return Err(ConfigValidationError::MissingApiToken);
        }
        if config.wall.publish_owner.is_empty() || config.wall.publish_repo.is_empty() {
            return Err(ConfigValidationError::MissingPublishRepository);
        }
        if config.wall.publish_token.is_empty() {
            return Err(ConfigValidationError::MissingPublishToken);
        }
    }

    Ok(())
}

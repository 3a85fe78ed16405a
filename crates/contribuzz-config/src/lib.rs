//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError, MailerDriver};

/// Default wall image size budget: 4.5 MiB, under typical
/// serverless request body limits.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 4_718_592;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout.
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API read token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct WallConfig {
    /// Owner of the repository holding published wall images.
    pub publish_owner: String,
    /// Name of the repository holding published wall images.
    pub publish_repo: String,
    /// Token used for contents writes on the publish repository.
    pub publish_token: String,
    /// Directory inside the publish repository where walls are stored.
    pub images_dir: String,
    /// Root URL of the public CDN mirror of the publish repository.
    pub cdn_root_url: String,
    /// Public site URL, referenced by embed snippets.
    pub site_url: String,
    /// Maximum encoded wall image size in bytes.
    pub max_image_bytes: u64,
    /// Maximum number of contributors rendered on a wall.
    pub max_contributors: usize,
}

#[derive(Debug, Clone)]
pub struct SubscribersConfig {
    /// Gist holding the subscriber list document.
    pub gist_id: String,
    /// Token used for gist reads and writes.
    pub gist_token: String,
}

#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Mailer driver.
    pub driver: MailerDriver,
    /// SMTP options.
    pub smtp: MailerSmtpConfig,
    /// Address receiving feedback mails.
    pub feedback_recipient: String,
}

#[derive(Debug, Clone)]
pub struct MailerSmtpConfig {
    /// SMTP host.
    pub host: String,
    /// SMTP port.
    pub port: u16,
    /// Use implicit TLS (true for 465, false for 587).
    pub secure: bool,
    /// SMTP username.
    pub username: String,
    /// SMTP password.
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name.
    pub name: String,
    /// API options.
    pub api: ApiConfig,
    /// Wall publication options.
    pub wall: WallConfig,
    /// Subscriber store options.
    pub subscribers: SubscribersConfig,
    /// Mailer options.
    pub mailer: MailerConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// Test debug mode
    pub test_debug_mode: bool,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            name: env_to_str("BUZZ_NAME", "contribuzz"),
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("BUZZ_API_DRIVER", "github")).unwrap(),
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("BUZZ_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("BUZZ_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("BUZZ_API_GITHUB_TOKEN", ""),
                },
            },
            wall: WallConfig {
                publish_owner: env_to_str("BUZZ_WALL_PUBLISH_OWNER", ""),
                publish_repo: env_to_str("BUZZ_WALL_PUBLISH_REPO", ""),
                publish_token: env_to_str("BUZZ_WALL_PUBLISH_TOKEN", ""),
                images_dir: env_to_str("BUZZ_WALL_IMAGES_DIR", "public/walls"),
                cdn_root_url: env_to_str("BUZZ_WALL_CDN_ROOT_URL", "https://cdn.jsdelivr.net/gh"),
                site_url: env_to_str("BUZZ_WALL_SITE_URL", "https://contri.buzz"),
                max_image_bytes: env_to_u64("BUZZ_WALL_MAX_IMAGE_BYTES", DEFAULT_MAX_IMAGE_BYTES),
                max_contributors: env_to_u64("BUZZ_WALL_MAX_CONTRIBUTORS", 100) as usize,
            },
            subscribers: SubscribersConfig {
                gist_id: env_to_str("BUZZ_SUBSCRIBERS_GIST_ID", ""),
                gist_token: env_to_str("BUZZ_SUBSCRIBERS_GIST_TOKEN", ""),
            },
            mailer: MailerConfig {
                driver: MailerDriver::from_str(&env_to_str("BUZZ_MAILER_DRIVER", "smtp")).unwrap(),
                smtp: MailerSmtpConfig {
                    host: env_to_str("BUZZ_MAILER_SMTP_HOST", ""),
                    port: env_to_u16("BUZZ_MAILER_SMTP_PORT", 587),
                    secure: env_to_bool("BUZZ_MAILER_SMTP_SECURE", false),
                    username: env_to_str("BUZZ_MAILER_SMTP_USERNAME", ""),
                    password: env_to_str("BUZZ_MAILER_SMTP_PASSWORD", ""),
                },
                feedback_recipient: env_to_str("BUZZ_MAILER_FEEDBACK_RECIPIENT", "mail@contri.buzz"),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BUZZ_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("BUZZ_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("BUZZ_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BUZZ_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("BUZZ_SERVER_BIND_PORT", 8008),
                workers_count: env_to_optional_u16("BUZZ_SERVER_WORKERS_COUNT", None),
            },
            test_debug_mode: env_to_bool("BUZZ_TEST_DEBUG_MODE", false),
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

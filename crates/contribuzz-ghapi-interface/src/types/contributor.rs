use serde::{Deserialize, Serialize};

/// GitHub repository contributor entry.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhContributor {
    /// Username.
    pub login: String,
    /// Avatar URL.
    pub avatar_url: String,
    /// Contribution count.
    pub contributions: u64,
    /// Profile URL.
    pub html_url: String,
    /// API URL of the user resource.
    pub url: String,
}

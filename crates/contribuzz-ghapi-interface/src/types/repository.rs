use serde::{Deserialize, Serialize};

/// GitHub repository metadata.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepositoryInfo {
    /// Repository name.
    pub name: String,
    /// Full name (`owner/name`).
    pub full_name: String,
    /// Description.
    pub description: Option<String>,
    /// Repository URL.
    pub html_url: String,
    /// Star count.
    pub stargazers_count: u64,
    /// Fork count.
    pub forks_count: u64,
    /// Open issue count.
    pub open_issues_count: u64,
    /// Main language.
    pub language: Option<String>,
}

use serde::{Deserialize, Serialize};

/// File entry from the GitHub Contents API.
/// `GET /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhContentFile {
    /// File name.
    pub name: String,
    /// Path inside the repository.
    pub path: String,
    /// Blob version token.
    pub sha: String,
    /// Public URL of the file.
    pub html_url: Option<String>,
    /// Raw download URL of the file.
    pub download_url: Option<String>,
}

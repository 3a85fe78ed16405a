//! Contributor model.

use serde::{Deserialize, Serialize};

/// A repository contributor, as rendered on a wall.
///
/// `name`, `bio` and `location` come from the secondary profile lookup
/// and stay empty when that lookup fails.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Contributor {
    /// Username.
    pub login: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Contribution count.
    pub contributions: u64,
    /// Profile URL.
    pub html_url: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Profile bio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Profile location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

use serde::{Deserialize, Serialize};

/// GitHub user profile.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUserProfile {
    /// Username.
    pub login: String,
    /// Avatar URL.
    pub avatar_url: String,
    /// Display name.
    pub name: Option<String>,
    /// Bio.
    pub bio: Option<String>,
    /// Location.
    pub location: Option<String>,
}

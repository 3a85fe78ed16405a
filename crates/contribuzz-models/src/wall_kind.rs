//! Wall kinds.

use crate::RepositoryPath;

/// Wall variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    /// Avatars, usernames and contribution counts on an opaque background.
    Full,
    /// Avatars only, transparent background.
    AvatarOnly,
}

impl WallKind {
    /// Build a wall kind from the `onlyAvatars` flag.
    pub fn from_only_avatars(only_avatars: bool) -> Self {
        if only_avatars {
            Self::AvatarOnly
        } else {
            Self::Full
        }
    }

    /// Deterministic published file name for a repository.
    pub fn file_name(&self, repository_path: &RepositoryPath) -> String {
        let sanitized = repository_path.sanitized_name();
        match self {
            Self::Full => format!("{sanitized}.jpg"),
            Self::AvatarOnly => format!("{sanitized}(avatars).png"),
        }
    }

    /// Expected file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Full => ".jpg",
            Self::AvatarOnly => ".png",
        }
    }

    /// MIME type of the encoded wall.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Full => "image/jpeg",
            Self::AvatarOnly => "image/png",
        }
    }

    /// Expected data URL prefix.
    pub fn data_url_prefix(&self) -> &'static str {
        match self {
            Self::Full => "data:image/jpeg;base64,",
            Self::AvatarOnly => "data:image/png;base64,",
        }
    }
}

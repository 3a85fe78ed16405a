//! Published wall artifact.

use serde::{Deserialize, Serialize};

/// A wall image persisted in the publish repository.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublishedWall {
    /// File name of the artifact.
    pub file_name: String,
    /// Path of the artifact inside the publish repository.
    pub path: String,
    /// Public URL of the artifact, when the store returned one.
    pub html_url: Option<String>,
}

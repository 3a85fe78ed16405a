use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// GitHub gist.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhGist {
    /// Files keyed by file name.
    pub files: HashMap<String, GhGistFile>,
}

/// Single file inside a gist.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhGistFile {
    /// File content; absent for truncated large files.
    pub content: Option<String>,
}

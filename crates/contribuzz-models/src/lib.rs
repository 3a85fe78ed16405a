//! Domain models.

#![warn(clippy::all)]

mod contributor;
mod data_url;
mod published_wall;
mod repository_path;
mod wall_kind;

pub use contributor::Contributor;
pub use data_url::{base64_payload_size, split_data_url};
pub use published_wall::PublishedWall;
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use wall_kind::WallKind;

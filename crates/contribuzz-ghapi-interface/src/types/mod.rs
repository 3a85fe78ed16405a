mod content_file;
mod contributor;
mod gist;
mod repository;
mod user_profile;

pub use content_file::*;
pub use contributor::*;
pub use gist::*;
pub use repository::*;
pub use user_profile::*;

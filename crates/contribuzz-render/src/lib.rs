//! Wall rendering.
//!
//! Renders contributor walls to raster images and compresses them into
//! base64 data URLs that fit a byte budget.

#![warn(clippy::all)]

mod avatar;
mod compress;
mod errors;
mod layout;
mod raster;
mod text;
mod wall;

pub use avatar::decode_avatar;
pub use compress::{compress_to_data_url, WallImageFormat};
pub use errors::RenderError;
pub use layout::{AvatarWallLayout, FullWallLayout};
pub use wall::{WallRenderer, WallTile};

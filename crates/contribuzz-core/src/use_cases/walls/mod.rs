pub mod generate_wall;
pub mod publish_wall_image;
pub mod resolve_wall_url;

pub use generate_wall::{GenerateWallInterface, GeneratedWalls};
pub use publish_wall_image::PublishWallImageInterface;
pub use resolve_wall_url::ResolveWallUrlInterface;
#[cfg(any(test, feature = "testkit"))]
pub use {
    generate_wall::MockGenerateWallInterface, publish_wall_image::MockPublishWallImageInterface,
    resolve_wall_url::MockResolveWallUrlInterface,
};

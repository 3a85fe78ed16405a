//! Wall renderer.

use cosmic_text::Weight;
use image::{imageops, imageops::FilterType, RgbaImage};

use crate::{
    layout::{AvatarWallLayout, FullWallLayout},
    raster::{blend_pixel, disc_coverage, opaque, ring_coverage},
    text::{TextAlign, TextPainter},
};

/// GitHub dark default background.
const BACKGROUND: [u8; 3] = [0x0d, 0x11, 0x17];
/// Accent color for rings and the avatar wall footer.
const ACCENT: [u8; 3] = [0x58, 0xa6, 0xff];
const TEXT_WHITE: [u8; 3] = [0xff, 0xff, 0xff];
const CONTRIBUTION_GRAY: [u8; 3] = [0xb0, 0xb0, 0xb0];
/// Disc drawn in place of an avatar that failed to load.
const PLACEHOLDER: [u8; 3] = [0x30, 0x36, 0x3d];

const FULL_WALL_FOOTER: &str = "Made with ❤️ by Contri.Buzz";
const AVATAR_WALL_FOOTER: &str = "Made with 💙 by Contri.Buzz";

/// Username line length, in characters.
const NAME_CHUNK: usize = 10;

/// Full wall ring stroke width.
const FULL_RING_WIDTH: f32 = 6.0;
/// Avatar wall ring stroke width.
const AVATAR_RING_WIDTH: f32 = 3.0;

/// One contributor cell on a wall.
#[derive(Debug, Clone)]
pub struct WallTile {
    /// Username.
    pub login: String,
    /// Contribution count.
    pub contributions: u64,
    /// Decoded avatar; `None` draws a placeholder disc instead of
    /// aborting the render.
    pub avatar: Option<RgbaImage>,
}

/// Renders contributor walls.
///
/// Holds the text rasterizer; reuse one renderer for both walls of a
/// generation.
pub struct WallRenderer {
    text: TextPainter,
}

impl WallRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self {
            text: TextPainter::new(),
        }
    }

    /// Render the full wall: opaque dark background, avatars with rings,
    /// usernames, contribution counts and the footer line.
    #[tracing::instrument(skip_all, fields(tiles = tiles.len()))]
    pub fn render_full_wall(&mut self, tiles: &[WallTile]) -> RgbaImage {
        let layout = FullWallLayout::new(tiles.len());
        let mut canvas =
            RgbaImage::from_pixel(layout.width(), layout.height(), opaque(BACKGROUND));

        let radius = FullWallLayout::AVATAR_SIZE as f32 / 2.0;
        for (index, tile) in tiles.iter().enumerate() {
            let (cx, top) = layout.cell(index);
            let cy = top + radius;

            draw_avatar_disc(&mut canvas, cx, cy, radius, tile.avatar.as_ref());
            stroke_circle(&mut canvas, cx, cy, radius, FULL_RING_WIDTH, ACCENT);

            for (line_index, line) in chunk_name(&tile.login, NAME_CHUNK).iter().enumerate() {
                let line_y = top
                    + FullWallLayout::AVATAR_SIZE as f32
                    + FullWallLayout::NAME_GAP as f32
                    + line_index as f32 * FullWallLayout::NAME_FONT_SIZE;
                self.text.draw(
                    &mut canvas,
                    line,
                    cx,
                    line_y,
                    FullWallLayout::NAME_FONT_SIZE,
                    Weight::NORMAL,
                    TEXT_WHITE,
                    TextAlign::Center,
                );
            }

            // Superscript-style contribution count at the avatar's
            // top-right shoulder.
            self.text.draw(
                &mut canvas,
                &format!("{}+", tile.contributions),
                cx + radius - 30.0,
                top,
                FullWallLayout::CONTRIBUTION_FONT_SIZE * 0.6,
                Weight::BOLD,
                CONTRIBUTION_GRAY,
                TextAlign::Left,
            );
        }

        self.text.draw(
            &mut canvas,
            FULL_WALL_FOOTER,
            layout.width() as f32 / 2.0 - 225.0,
            layout.height() as f32 - 60.0,
            FullWallLayout::FOOTER_FONT_SIZE,
            Weight::NORMAL,
            TEXT_WHITE,
            TextAlign::Left,
        );

        canvas
    }

    /// Render the avatar wall: transparent background, avatars with
    /// rings and the centered footer line.
    #[tracing::instrument(skip_all, fields(tiles = tiles.len()))]
    pub fn render_avatar_wall(&mut self, tiles: &[WallTile]) -> RgbaImage {
        let layout = AvatarWallLayout::new(tiles.len());
        let mut canvas = RgbaImage::new(layout.width(), layout.height());

        let size = AvatarWallLayout::AVATAR_SIZE as f32;
        let radius = size / 2.0;
        for (index, tile) in tiles.iter().enumerate() {
            let (left, top) = layout.cell(index);
            let cx = left + radius;
            let cy = top + radius;

            draw_avatar_disc(&mut canvas, cx, cy, radius, tile.avatar.as_ref());
            stroke_circle(&mut canvas, cx, cy, radius, AVATAR_RING_WIDTH, ACCENT);
        }

        self.text.draw(
            &mut canvas,
            AVATAR_WALL_FOOTER,
            layout.width() as f32 / 2.0,
            layout.height() as f32 - 44.0,
            AvatarWallLayout::FOOTER_FONT_SIZE,
            Weight::NORMAL,
            ACCENT,
            TextAlign::Center,
        );

        canvas
    }
}

impl Default for WallRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a username into fixed-width lines, on character boundaries.
fn chunk_name(name: &str, chunk: usize) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    chars
        .chunks(chunk)
        .map(|line| line.iter().collect())
        .collect()
}

/// Composite an avatar clipped to a disc, or the placeholder disc when
/// the avatar is missing.
fn draw_avatar_disc(
    canvas: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    avatar: Option<&RgbaImage>,
) {
    let diameter = (radius * 2.0).round() as u32;
    let resized = avatar.map(|img| imageops::resize(img, diameter, diameter, FilterType::Lanczos3));

    let left = (cx - radius).floor() as i64;
    let top = (cy - radius).floor() as i64;

    for dy in 0..diameter as i64 + 1 {
        for dx in 0..diameter as i64 + 1 {
            let x = left + dx;
            let y = top + dy;
            let center_x = x as f32 + 0.5;
            let center_y = y as f32 + 0.5;
            let distance = ((center_x - cx).powi(2) + (center_y - cy).powi(2)).sqrt();
            let coverage = disc_coverage(distance, radius);
            if coverage <= 0.0 {
                continue;
            }

            match &resized {
                Some(src) => {
                    let sx = (x - left).clamp(0, diameter as i64 - 1) as u32;
                    let sy = (y - top).clamp(0, diameter as i64 - 1) as u32;
                    let pixel = src.get_pixel(sx, sy);
                    let alpha = coverage * pixel[3] as f32 / 255.0;
                    blend_pixel(canvas, x, y, [pixel[0], pixel[1], pixel[2]], alpha);
                }
                None => blend_pixel(canvas, x, y, PLACEHOLDER, coverage),
            }
        }
    }
}

/// Stroke a circle outline of the given line width.
fn stroke_circle(
    canvas: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    line_width: f32,
    color: [u8; 3],
) {
    let reach = radius + line_width;
    let left = (cx - reach).floor() as i64;
    let top = (cy - reach).floor() as i64;
    let span = (reach * 2.0).ceil() as i64 + 1;

    for dy in 0..span {
        for dx in 0..span {
            let x = left + dx;
            let y = top + dy;
            let center_x = x as f32 + 0.5;
            let center_y = y as f32 + 0.5;
            let distance = ((center_x - cx).powi(2) + (center_y - cy).powi(2)).sqrt();
            let coverage = ring_coverage(distance, radius, line_width);
            if coverage > 0.0 {
                blend_pixel(canvas, x, y, color, coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;

    use super::{chunk_name, WallRenderer, WallTile};
    use crate::layout::{AvatarWallLayout, FullWallLayout};

    fn tile(login: &str, avatar: Option<RgbaImage>) -> WallTile {
        WallTile {
            login: login.into(),
            contributions: 42,
            avatar,
        }
    }

    fn red_avatar() -> RgbaImage {
        RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 255]))
    }

    #[test]
    fn chunk_name_wraps_every_ten_chars() {
        assert_eq!(chunk_name("short", 10), vec!["short"]);
        assert_eq!(
            chunk_name("a-very-long-username", 10),
            vec!["a-very-lon", "g-username"]
        );
        assert!(chunk_name("", 10).is_empty());
    }

    #[test]
    fn full_wall_dimensions_follow_layout() {
        let mut renderer = WallRenderer::new();
        for count in [0, 1, 7] {
            let tiles: Vec<_> = (0..count).map(|i| tile(&format!("user{i}"), None)).collect();
            let canvas = renderer.render_full_wall(&tiles);
            let layout = FullWallLayout::new(count);
            assert_eq!((canvas.width(), canvas.height()), (layout.width(), layout.height()));
        }
    }

    #[test]
    fn full_wall_background_is_opaque_dark() {
        let mut renderer = WallRenderer::new();
        let canvas = renderer.render_full_wall(&[tile("octocat", Some(red_avatar()))]);
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([0x0d, 0x11, 0x17, 255]));
        assert_eq!(
            canvas.get_pixel(canvas.width() - 1, canvas.height() - 1),
            &Rgba([0x0d, 0x11, 0x17, 255])
        );
    }

    #[test]
    fn full_wall_draws_avatar_and_ring() {
        let mut renderer = WallRenderer::new();
        let canvas = renderer.render_full_wall(&[tile("octocat", Some(red_avatar()))]);

        let layout = FullWallLayout::new(1);
        let (cx, top) = layout.cell(0);
        let cy = top + 112.5;

        // Disc center keeps the avatar color.
        assert_eq!(canvas.get_pixel(cx as u32, cy as u32), &Rgba([255, 0, 0, 255]));
        // A pixel on the circle edge is covered by the accent ring.
        let edge = canvas.get_pixel((cx + 112.0) as u32, cy as u32);
        assert_eq!(&Rgba([0x58, 0xa6, 0xff, 255]), edge);
    }

    #[test]
    fn missing_avatar_falls_back_to_placeholder_disc() {
        let mut renderer = WallRenderer::new();
        let canvas = renderer.render_full_wall(&[tile("octocat", None)]);

        let layout = FullWallLayout::new(1);
        let (cx, top) = layout.cell(0);
        let cy = top + 112.5;
        assert_eq!(
            canvas.get_pixel(cx as u32, cy as u32),
            &Rgba([0x30, 0x36, 0x3d, 255])
        );
    }

    #[test]
    fn avatar_wall_dimensions_follow_layout() {
        let mut renderer = WallRenderer::new();
        for count in [0, 8, 9] {
            let tiles: Vec<_> = (0..count).map(|i| tile(&format!("user{i}"), None)).collect();
            let canvas = renderer.render_avatar_wall(&tiles);
            let layout = AvatarWallLayout::new(count);
            assert_eq!((canvas.width(), canvas.height()), (layout.width(), layout.height()));
        }
    }

    #[test]
    fn avatar_wall_background_is_transparent() {
        let mut renderer = WallRenderer::new();
        let canvas = renderer.render_avatar_wall(&[tile("octocat", Some(red_avatar()))]);
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);

        // Avatar disc is drawn at the first cell.
        let layout = AvatarWallLayout::new(1);
        let (left, top) = layout.cell(0);
        let pixel = canvas.get_pixel((left + 75.0) as u32, (top + 75.0) as u32);
        assert_eq!(pixel, &Rgba([255, 0, 0, 255]));
    }
}

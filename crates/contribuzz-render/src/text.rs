//! Text rasterization through cosmic-text.

use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use image::RgbaImage;

use crate::raster::blend_pixel;

/// Horizontal anchoring of a drawn string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextAlign {
    /// `x` is the left edge.
    Left,
    /// `x` is the center.
    Center,
}

/// Rasterizes single-line strings onto an RGBA canvas.
///
/// Owns the font database and glyph cache; building a `FontSystem` scans
/// system fonts, so one painter is reused for a whole wall render.
pub(crate) struct TextPainter {
    font_system: FontSystem,
    cache: SwashCache,
}

impl TextPainter {
    pub(crate) fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            cache: SwashCache::new(),
        }
    }

    /// Draw `text` with its top edge at `y`. Returns nothing; glyphs
    /// falling outside the canvas are clipped.
    pub(crate) fn draw(
        &mut self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        weight: Weight,
        color: [u8; 3],
        align: TextAlign,
    ) {
        let metrics = Metrics::new(font_size, font_size);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(
            &mut self.font_system,
            text,
            Attrs::new().family(Family::SansSerif).weight(weight),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let line_width = buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0_f32, f32::max);
        let origin_x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - line_width / 2.0,
        };

        let text_color = Color::rgb(color[0], color[1], color[2]);
        buffer.draw(
            &mut self.font_system,
            &mut self.cache,
            text_color,
            |gx, gy, w, h, pixel_color| {
                let alpha = pixel_color.a() as f32 / 255.0;
                if alpha <= 0.0 {
                    return;
                }
                let rgb = [pixel_color.r(), pixel_color.g(), pixel_color.b()];
                for dy in 0..h {
                    for dx in 0..w {
                        let px = (origin_x + gx as f32) as i64 + dx as i64;
                        let py = (y + gy as f32) as i64 + dy as i64;
                        blend_pixel(canvas, px, py, rgb, alpha);
                    }
                }
            },
        );
    }
}

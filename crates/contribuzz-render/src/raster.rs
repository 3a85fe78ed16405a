//! Pixel compositing helpers.

use image::{Rgba, RgbaImage};

/// Source-over blend of an RGB color with coverage `alpha` onto a canvas
/// pixel. Out-of-bounds coordinates are ignored.
pub(crate) fn blend_pixel(canvas: &mut RgbaImage, x: i64, y: i64, color: [u8; 3], alpha: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }

    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    if out_alpha <= 0.0 {
        return;
    }

    for channel in 0..3 {
        let src = color[channel] as f32;
        let bg = dst[channel] as f32;
        let out = (src * alpha + bg * dst_alpha * (1.0 - alpha)) / out_alpha;
        dst[channel] = out.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Antialiased coverage of a pixel center at `distance` from the edge of
/// a filled disc of the given radius.
pub(crate) fn disc_coverage(distance: f32, radius: f32) -> f32 {
    (radius - distance + 0.5).clamp(0.0, 1.0)
}

/// Antialiased coverage of a pixel center inside a circular stroke band.
pub(crate) fn ring_coverage(distance: f32, radius: f32, line_width: f32) -> f32 {
    (line_width / 2.0 - (distance - radius).abs() + 0.5).clamp(0.0, 1.0)
}

/// Pixel helper for tests and solid fills.
pub(crate) fn opaque(color: [u8; 3]) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

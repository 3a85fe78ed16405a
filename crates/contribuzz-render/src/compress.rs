//! Wall image compression.
//!
//! Fits an encoded wall under a byte budget by degrading quality first,
//! then resolution. The quality ladder is fixed (100, 90, .. 10) so the
//! attempted encodings are fully deterministic for a given input.

use std::io::BufWriter;

use base64::prelude::*;
use image::{
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    imageops::{self, FilterType},
    DynamicImage, RgbImage, RgbaImage,
};

use crate::errors::RenderError;

/// Output encoding of a wall image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallImageFormat {
    /// JPEG, used by the full wall.
    Jpeg,
    /// PNG, used by the avatar wall (keeps transparency).
    Png,
}

impl WallImageFormat {
    /// MIME type of the format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// Quality used for the final re-encode after a downscale.
const RESIZE_FALLBACK_QUALITY: u8 = 70;

/// Encode an image as a base64 data URL no longer than `max_bytes`.
///
/// The budget is compared against the data URL string length. An input
/// that already fits at full quality is returned as-is, without any
/// downscaling.
#[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn compress_to_data_url(
    image: &RgbaImage,
    format: WallImageFormat,
    max_bytes: usize,
) -> Result<String, RenderError> {
    let mut data_url = match format {
        WallImageFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            let mut data_url = encode_jpeg(&rgb, 100)?;

            let mut quality: u8 = 100;
            while data_url.len() > max_bytes && quality > 10 {
                quality -= 10;
                data_url = encode_jpeg(&rgb, quality)?;
            }

            if data_url.len() > max_bytes {
                let (width, height) = scaled_dimensions(
                    rgb.width(),
                    rgb.height(),
                    max_bytes,
                    data_url.len(),
                );
                let resized = imageops::resize(&rgb, width, height, FilterType::Lanczos3);
                data_url = encode_jpeg(&resized, RESIZE_FALLBACK_QUALITY)?;
            }

            data_url
        }
        WallImageFormat::Png => {
            // PNG has no quality knob; go straight to the downscale
            // fallback when the full-size export is over budget.
            let mut data_url = encode_png(image)?;

            if data_url.len() > max_bytes {
                let (width, height) = scaled_dimensions(
                    image.width(),
                    image.height(),
                    max_bytes,
                    data_url.len(),
                );
                let resized = imageops::resize(image, width, height, FilterType::Lanczos3);
                data_url = encode_png(&resized)?;
            }

            data_url
        }
    };

    if data_url.len() > max_bytes {
        return Err(RenderError::ImageTooLarge {
            size: data_url.len(),
            max_size: max_bytes,
        });
    }

    data_url.shrink_to_fit();
    Ok(data_url)
}

/// Linear downscale factor targeting the byte budget.
fn scaled_dimensions(
    width: u32,
    height: u32,
    max_bytes: usize,
    current_bytes: usize,
) -> (u32, u32) {
    let factor = (max_bytes as f64 / current_bytes as f64).sqrt();
    let scaled_width = ((width as f64 * factor) as u32).max(1);
    let scaled_height = ((height as f64 * factor) as u32).max(1);
    (scaled_width, scaled_height)
}

fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    image.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, quality))?;
    Ok(to_data_url(WallImageFormat::Jpeg, &buf))
}

fn encode_png(image: &RgbaImage) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    image.write_with_encoder(PngEncoder::new(BufWriter::new(&mut buf)))?;
    Ok(to_data_url(WallImageFormat::Png, &buf))
}

fn to_data_url(format: WallImageFormat, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        format.mime_type(),
        BASE64_STANDARD.encode(bytes)
    )
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;

    use super::{compress_to_data_url, encode_png, WallImageFormat};
    use crate::errors::RenderError;

    /// Deterministic high-entropy image: poor JPEG/PNG compressibility.
    fn noise_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let seed = x
                .wrapping_mul(2_654_435_761)
                .wrapping_add(y.wrapping_mul(40_503))
                .wrapping_add(97);
            Rgba([
                (seed >> 3) as u8,
                (seed >> 11) as u8,
                (seed >> 19) as u8,
                255,
            ])
        })
    }

    #[test]
    fn png_under_budget_is_returned_unchanged() {
        let image = RgbaImage::from_pixel(32, 32, Rgba([10, 20, 30, 255]));
        let untouched = encode_png(&image).unwrap();

        let data_url =
            compress_to_data_url(&image, WallImageFormat::Png, 10 * 1024 * 1024).unwrap();
        assert_eq!(data_url, untouched);
        assert!(data_url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn jpeg_under_budget_keeps_full_quality() {
        let image = RgbaImage::from_pixel(32, 32, Rgba([10, 20, 30, 255]));
        let first = compress_to_data_url(&image, WallImageFormat::Jpeg, 10 * 1024 * 1024).unwrap();
        let second = compress_to_data_url(&image, WallImageFormat::Jpeg, 10 * 1024 * 1024).unwrap();

        assert!(first.starts_with("data:image/jpeg;base64,"));
        // Deterministic for identical pixel content.
        assert_eq!(first, second);
    }

    #[test]
    fn jpeg_degrades_quality_to_fit_budget() {
        let image = noise_image(256, 256);
        let full_size =
            compress_to_data_url(&image, WallImageFormat::Jpeg, 10 * 1024 * 1024).unwrap().len();

        // A budget below the full-quality export forces the ladder down.
        let budget = full_size - 1;
        let data_url = compress_to_data_url(&image, WallImageFormat::Jpeg, budget).unwrap();
        assert!(data_url.len() <= budget);
    }

    #[test]
    fn png_downscales_to_fit_budget() {
        let image = noise_image(256, 256);
        let full_size =
            compress_to_data_url(&image, WallImageFormat::Png, 10 * 1024 * 1024).unwrap().len();

        let budget = full_size * 3 / 4;
        let data_url = compress_to_data_url(&image, WallImageFormat::Png, budget).unwrap();
        assert!(data_url.len() <= budget);
    }

    #[test]
    fn impossible_budget_fails() {
        let image = noise_image(256, 256);
        let result = compress_to_data_url(&image, WallImageFormat::Jpeg, 64);
        assert!(matches!(
            result,
            Err(RenderError::ImageTooLarge { max_size: 64, .. })
        ));
    }
}

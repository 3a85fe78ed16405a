//! Render errors.

use thiserror::Error;

/// Render error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum RenderError {
    /// The image could not be compressed under the byte budget.
    #[error("Unable to compress image below {} bytes (smallest was {})", max_size, size)]
    ImageTooLarge { size: usize, max_size: usize },

    #[error("Could not encode or decode image: {source}")]
    ImageCodec {
        #[from]
        source: image::ImageError,
    },

    /// The image bytes are not in a recognized format.
    #[error("Unsupported image format")]
    UnsupportedImageFormat,
}

//! Decoded bitmap content for the tip's image slot.
//!
//! The card never talks to a GPU or a windowing system; it carries decoded
//! RGBA pixels plus the intrinsic pixel dimensions the layout needs for
//! aspect-ratio scaling. Hosts upload the pixel data however they like.

use thiserror::Error;

/// Errors produced while constructing a [`TipImage`].
#[derive(Debug, Error)]
pub enum ImageError {
    /// The encoded bytes could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The bitmap has a zero pixel dimension, which would make the layout's
    /// aspect-ratio scale undefined.
    #[error("image has a zero pixel dimension")]
    Empty,

    /// Raw pixel data length does not match the stated dimensions.
    #[error("RGBA data size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// A decoded RGBA bitmap with nonzero intrinsic pixel dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct TipImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl TipImage {
    /// Decode an encoded image (PNG, JPEG, ...) into RGBA pixels.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_raw())
    }

    /// Wrap raw RGBA pixel data.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::Empty);
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self { width, height, rgba })
    }

    /// Intrinsic pixel width.
    pub fn pixel_width(&self) -> u32 {
        self.width
    }

    /// Intrinsic pixel height.
    pub fn pixel_height(&self) -> u32 {
        self.height
    }

    /// Width divided by height. Never zero or infinite: both dimensions are
    /// nonzero by construction.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// The decoded RGBA pixel data, row-major, 4 bytes per pixel.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

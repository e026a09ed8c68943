//! Immutable bitmap images.
//!
//! An [`Image`] is an RGBA8 pixel buffer shared behind an `Arc`, so cloning is
//! cheap and many option entries or cells may refer to the same pixels. Each
//! image carries a process-unique [`ImageId`]; two images are equal when they
//! are clones of the same original, never by comparing pixels.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use image::RgbaImage;

use crate::error::{RenderError, RenderResult};
use crate::types::{Color, Size};

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    fn next() -> Self {
        Self(NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A shared, immutable RGBA image.
#[derive(Clone)]
pub struct Image {
    id: ImageId,
    pixels: Arc<RgbaImage>,
}

impl Image {
    /// Wrap an already decoded RGBA buffer.
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            id: ImageId::next(),
            pixels: Arc::new(pixels),
        }
    }

    /// Create an image from raw RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::BufferSize`] if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> RenderResult<Self> {
        let len = data.len();
        RgbaImage::from_raw(width, height, data)
            .filter(|img| img.as_raw().len() == len)
            .map(Self::new)
            .ok_or(RenderError::BufferSize { width, height, len })
    }

    /// Create an image filled with a single color.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, color.to_rgba()))
    }

    /// Decode an image from encoded bytes (PNG, BMP, ICO, ...).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Decode`] if the bytes are not a supported
    /// image format.
    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::new(decoded.into_rgba8()))
    }

    /// The identity of this image.
    #[inline]
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Natural size in pixels.
    #[inline]
    pub fn size(&self) -> Size {
        Size::from((self.width(), self.height()))
    }

    /// Check if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Access the underlying pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Image {}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("id", &self.id.0)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_image() {
        let img = Image::solid(4, 3, Color::RED);
        assert_eq!(img.size(), Size::new(4, 3));
        assert!(!img.is_empty());
        assert_eq!(img.pixels().get_pixel(2, 1), &Color::RED.to_rgba());
    }

    #[test]
    fn test_clone_shares_identity() {
        let a = Image::solid(2, 2, Color::BLUE);
        let b = a.clone();
        let c = Image::solid(2, 2, Color::BLUE);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Image::from_rgba(2, 2, vec![0; 16]).is_ok());
        let err = Image::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, RenderError::BufferSize { len: 15, .. }));
    }

    #[test]
    fn test_empty_image() {
        let img = Image::solid(0, 5, Color::BLACK);
        assert!(img.is_empty());
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = Image::from_bytes(b"not an image").unwrap_err();
        assert!(matches!(err, RenderError::Decode(_)));
    }
}

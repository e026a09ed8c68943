//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while creating images or configuring rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Image bytes could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Invalid image dimensions (zero width or height).
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data does not match the declared dimensions.
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    BufferSize { width: u32, height: u32, len: usize },

    /// The fallback image was already created or installed.
    #[error("fallback image already initialized")]
    FallbackAlreadyInitialized,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

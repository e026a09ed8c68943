//! The process-wide fallback image.
//!
//! Cells paint the fallback image whenever a value has no valid image: an
//! unset value, a key missing from the option set, an out-of-range index or an
//! empty image. It is created once on first use and shared by every column,
//! cell and editor in the process.
//!
//! An application may replace the generated glyph with its own artwork by
//! calling [`install_fallback_image`] before the first paint.

use std::sync::OnceLock;

use horizon_gridcell_core::logging::targets;
use image::RgbaImage;
use tracing::debug;

use crate::bitmap::Image;
use crate::error::{RenderError, RenderResult};
use crate::types::Color;

/// Global fallback image instance.
static FALLBACK: OnceLock<Image> = OnceLock::new();

/// Edge length of the generated fallback glyph.
const FALLBACK_SIZE: u32 = 16;

/// Get the shared fallback image, creating it on first use.
///
/// Every call returns a clone of the same image, so results compare equal.
pub fn fallback_image() -> Image {
    FALLBACK
        .get_or_init(|| {
            debug!(
                target: targets::FALLBACK,
                size = FALLBACK_SIZE,
                "created default fallback image"
            );
            Image::new(missing_image_glyph(FALLBACK_SIZE))
        })
        .clone()
}

/// Install an application-provided fallback image.
///
/// # Errors
///
/// Returns an error if:
/// - The image has no pixels
/// - The fallback image has already been created or installed
pub fn install_fallback_image(image: Image) -> RenderResult<()> {
    if image.is_empty() {
        return Err(RenderError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }

    FALLBACK
        .set(image)
        .map_err(|_| RenderError::FallbackAlreadyInitialized)?;

    debug!(
        target: targets::FALLBACK,
        "installed application fallback image"
    );
    Ok(())
}

/// A white square with a gray frame and a red cross.
fn missing_image_glyph(size: u32) -> RgbaImage {
    let last = size - 1;
    RgbaImage::from_fn(size, size, |x, y| {
        if x == 0 || y == 0 || x == last || y == last {
            Color::GRAY.to_rgba()
        } else if (x >= 3 && x <= last - 3) && (x == y || x == last - y) {
            Color::RED.to_rgba()
        } else {
            Color::WHITE.to_rgba()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_shared() {
        let a = fallback_image();
        let b = fallback_image();
        assert_eq!(a, b);
        assert_eq!(a.width(), FALLBACK_SIZE);
        assert_eq!(a.height(), FALLBACK_SIZE);
    }

    #[test]
    fn test_install_after_first_use_fails() {
        let _ = fallback_image();
        let err = install_fallback_image(Image::solid(8, 8, Color::BLUE)).unwrap_err();
        assert!(matches!(err, RenderError::FallbackAlreadyInitialized));
    }

    #[test]
    fn test_install_rejects_empty_image() {
        let err = install_fallback_image(Image::solid(0, 0, Color::BLUE)).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_glyph_pixels() {
        let glyph = missing_image_glyph(16);
        assert_eq!(glyph.get_pixel(0, 0), &Color::GRAY.to_rgba());
        assert_eq!(glyph.get_pixel(5, 5), &Color::RED.to_rgba());
        assert_eq!(glyph.get_pixel(5, 10), &Color::RED.to_rgba());
        assert_eq!(glyph.get_pixel(7, 3), &Color::WHITE.to_rgba());
    }
}

//! Decoding uploaded image bytes into a scoreable [`Image`].
//!
//! Gray color types (with or without alpha, 8 or 16 bit) become a
//! single-channel image. Everything else is converted to RGB8 and any alpha
//! channel is dropped.
//!
//! # Example
//!
//! ```ignore
//! use water_quality::{decode::decode_image, score};
//!
//! let bytes = std::fs::read("lake.jpg")?;
//! let image = decode_image(&bytes)?;
//! println!("{:?}", score(&image));
//! ```

use ::image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::pixels::Image;

/// Decode PNG, JPEG, BMP, GIF, TIFF or WebP bytes.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the format is unrecognized or the data is
/// corrupt, and [`Error::EmptyImage`] if it decodes to zero pixels.
pub fn decode_image(data: &[u8]) -> Result<Image> {
    let decoded = ::image::load_from_memory(data).map_err(|e| Error::Decode(e.to_string()))?;

    debug!(
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "decoded image"
    );
    from_dynamic(decoded)
}

/// Convert an already decoded [`DynamicImage`].
pub fn from_dynamic(decoded: DynamicImage) -> Result<Image> {
    let width = decoded.width() as usize;
    let height = decoded.height() as usize;

    if decoded.color().has_color() {
        Image::from_raw(decoded.into_rgb8().into_raw(), width, height, 3)
    } else {
        Image::from_raw(decoded.into_luma8().into_raw(), width, height, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use ::image::{GrayImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_rgb_png() {
        let img = RgbImage::from_pixel(5, 3, Rgb([43, 69, 200]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Png);
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.width(), 5);
        assert_eq!(decoded.height(), 3);
        assert_eq!(decoded.channels(), 3);
    }

    #[test]
    fn test_decode_gray_png() {
        let img = GrayImage::from_pixel(4, 4, ::image::Luma([100]));
        let bytes = encode(DynamicImage::ImageLuma8(img), ImageFormat::Png);
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.channels(), 1);
    }

    #[test]
    fn test_alpha_is_dropped() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([100, 71, 41, 0]));
        let decoded = from_dynamic(DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(decoded.channels(), 3);
        assert_eq!(decoded.rgb().unwrap().pixels().next(), Some(rgb::RGB8::new(100, 71, 41)));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_empty_input_is_decode_error() {
        assert!(matches!(decode_image(&[]).unwrap_err(), Error::Decode(_)));
    }
}

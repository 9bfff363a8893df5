//! Validated pixel container accepted by the scorer.
//!
//! [`Image`] can only be built through constructors that reject zero-area
//! buffers and unsupported channel layouts, so the scoring arithmetic never
//! sees an input it would divide by zero on.

use imgref::{Img, ImgVec};
use rgb::RGB8;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
enum Buffer {
    Rgb(ImgVec<RGB8>),
    Gray(ImgVec<u8>),
}

/// A non-empty 8-bit image, either RGB (display order) or single-channel gray.
#[derive(Debug, Clone)]
pub struct Image {
    pixels: Buffer,
    count: usize,
}

impl Image {
    /// Wrap an RGB8 image.
    pub fn from_rgb8(img: ImgVec<RGB8>) -> Result<Self> {
        let count = checked_area(img.width(), img.height(), 1)?;
        Ok(Self {
            pixels: Buffer::Rgb(img),
            count,
        })
    }

    /// Wrap a single-channel gray image.
    pub fn from_gray8(img: ImgVec<u8>) -> Result<Self> {
        let count = checked_area(img.width(), img.height(), 1)?;
        Ok(Self {
            pixels: Buffer::Gray(img),
            count,
        })
    }

    /// Build from a tightly packed row-major buffer.
    ///
    /// `channels` must be 3 (interleaved RGB) or 1 (gray).
    pub fn from_raw(data: Vec<u8>, width: usize, height: usize, channels: usize) -> Result<Self> {
        if channels != 1 && channels != 3 {
            return Err(Error::UnsupportedChannels(channels));
        }
        let expected = checked_area(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        let pixels = if channels == 3 {
            let rgb: Vec<RGB8> = data
                .chunks_exact(3)
                .map(|c| RGB8::new(c[0], c[1], c[2]))
                .collect();
            Buffer::Rgb(Img::new(rgb, width, height))
        } else {
            Buffer::Gray(Img::new(data, width, height))
        };
        Ok(Self {
            pixels,
            count: expected / channels,
        })
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        match &self.pixels {
            Buffer::Rgb(img) => img.width(),
            Buffer::Gray(img) => img.width(),
        }
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        match &self.pixels {
            Buffer::Rgb(img) => img.height(),
            Buffer::Gray(img) => img.height(),
        }
    }

    /// Number of channels: 3 for RGB, 1 for gray.
    #[must_use]
    pub fn channels(&self) -> usize {
        match &self.pixels {
            Buffer::Rgb(_) => 3,
            Buffer::Gray(_) => 1,
        }
    }

    /// Total pixel count (always > 0).
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.count
    }

    /// RGB pixels, or `None` for a gray image.
    pub(crate) fn rgb(&self) -> Option<&ImgVec<RGB8>> {
        match &self.pixels {
            Buffer::Rgb(img) => Some(img),
            Buffer::Gray(_) => None,
        }
    }

    /// Gray pixels, or `None` for an RGB image.
    pub(crate) fn gray(&self) -> Option<&ImgVec<u8>> {
        match &self.pixels {
            Buffer::Rgb(_) => None,
            Buffer::Gray(img) => Some(img),
        }
    }
}

/// Byte length of a packed `width x height x channels` buffer.
fn checked_area(width: usize, height: usize, channels: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(Error::DimensionOverflow {
            width,
            height,
            channels,
        })
}

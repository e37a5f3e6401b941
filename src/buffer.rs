//! Minimal in-memory pixel container the engines operate on.
use crate::{Error, Result};

/// Channel layout of an [`Image`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// One byte per pixel.
    Grayscale,
    /// Gray followed by alpha.
    GrayscaleAlpha,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    #[default]
    Rgba,
}

impl PixelFormat {
    /// Maps a numeric format code (`0` gray, `1` gray+alpha, `2` RGB, `3`
    /// RGBA). Unknown codes fall back to [`PixelFormat::Rgba`].
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Grayscale,
            1 => Self::GrayscaleAlpha,
            2 => Self::Rgb,
            _ => Self::Rgba,
        }
    }

    /// Bytes per pixel, i.e. the channel stride.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Grayscale => 1,
            Self::GrayscaleAlpha => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Number of leading channels that carry color. Remaining channels
    /// (alpha) are never touched by the engines.
    #[inline]
    pub fn color_channels(self) -> usize {
        match self {
            Self::Grayscale | Self::GrayscaleAlpha => 1,
            Self::Rgb | Self::Rgba => 3,
        }
    }

    #[inline]
    pub fn is_gray(self) -> bool {
        self.color_channels() == 1
    }
}

/// A rectangular pixel buffer, row-major, no padding between rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl Image {
    /// Creates a zero-filled image.
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            pixels: vec![0; width * height * format.bytes_per_pixel()],
        }
    }

    /// Wraps an existing buffer. Fails with [`Error::BufferSizeMismatch`] if
    /// its length is not `width * height * bytes_per_pixel`.
    pub fn from_raw(
        width: usize,
        height: usize,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        let expected = width * height * format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * self.format.bytes_per_pixel()
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Channels of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let offset = self.offset(x, y)?;
        Some(&self.pixels[offset..offset + self.format.bytes_per_pixel()])
    }

    /// Overwrites the pixel at `(x, y)`. `channels` longer than the pixel
    /// stride are truncated. Returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, channels: &[u8]) -> bool {
        let Some(offset) = self.offset(x, y) else {
            return false;
        };
        let bpp = self.format.bytes_per_pixel();
        let n = channels.len().min(bpp);
        self.pixels[offset..offset + n].copy_from_slice(&channels[..n]);
        true
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y * self.width + x) * self.format.bytes_per_pixel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_default_to_four_bytes() {
        assert_eq!(PixelFormat::from_code(0).bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::from_code(1).bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::from_code(2).bytes_per_pixel(), 3);
        assert_eq!(PixelFormat::from_code(3).bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::from_code(42).bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::from_code(-1), PixelFormat::Rgba);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(Image::from_raw(2, 2, PixelFormat::Rgb, vec![0; 12]).is_ok());
        match Image::from_raw(2, 2, PixelFormat::Rgb, vec![0; 11]) {
            Err(Error::BufferSizeMismatch { expected, actual }) => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn pixel_access() {
        let mut image = Image::new(3, 2, PixelFormat::Rgba);
        assert!(image.set_pixel(2, 1, &[1, 2, 3, 4]));
        assert_eq!(image.pixel(2, 1), Some(&[1, 2, 3, 4][..]));
        assert_eq!(image.pixel(3, 1), None);
        assert!(!image.set_pixel(0, 2, &[9]));
        assert_eq!(image.stride(), 12);
    }
}

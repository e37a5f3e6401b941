//! Ordered (Bayer) dithering.
//!
//! Every pixel is offset by a periodic threshold taken from a fixed index
//! matrix and then snapped to the quantization grid. Pixels are independent
//! of each other, so rows are processed in parallel.
use crate::{
    DitherConfig, Error, Image, Result, parallel::for_each_band,
    step::StepQuantizer,
};

/// 2×2 Bayer index matrix.
pub const BAYER_2X2: [[u8; 2]; 2] = [[0, 2], [3, 1]];

/// 4×4 Bayer index matrix.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// 8×8 Bayer index matrix.
pub const BAYER_8X8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Threshold offset `M[y mod n][x mod n] / n² - 0.5`, in `-0.5..0.5`.
///
/// Returns `None` for sizes other than 2, 4 and 8.
#[inline]
pub fn bayer_threshold(size: usize, x: usize, y: usize) -> Option<f32> {
    let index = match size {
        2 => BAYER_2X2[y % 2][x % 2],
        4 => BAYER_4X4[y % 4][x % 4],
        8 => BAYER_8X8[y % 8][x % 8],
        _ => return None,
    };
    Some(index as f32 / (size * size) as f32 - 0.5)
}

/// Dithers `image` with the `size`×`size` Bayer matrix.
pub fn ordered(
    image: &mut Image,
    size: usize,
    config: &DitherConfig,
) -> Result<()> {
    if bayer_threshold(size, 0, 0).is_none() {
        return Err(Error::InvalidConfiguration(format!(
            "no {size}x{size} ordered dither matrix"
        )));
    }
    let quantizer = StepQuantizer::new(config)?;

    let format = image.format();
    let bpp = format.bytes_per_pixel();
    let stride = image.stride();
    let step = quantizer.step();

    for_each_band(image.pixels_mut(), stride, 1, |y, row| {
        for (x, pixel) in row.chunks_exact_mut(bpp).enumerate() {
            let offset = bayer_threshold(size, x, y).unwrap_or(0.0) * step;
            quantizer.apply(pixel, format, [offset; 3]);
        }
    });

    Ok(())
}

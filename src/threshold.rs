//! Hard per-channel binarization.
use crate::{Image, parallel::for_each_band};

/// Sets every color channel to 255 if it is at least `threshold`, else to 0.
pub fn threshold(image: &mut Image, threshold: u8) {
    let format = image.format();
    let bpp = format.bytes_per_pixel();
    let channels = format.color_channels();
    let stride = image.stride();

    for_each_band(image.pixels_mut(), stride, 1, |_, row| {
        for pixel in row.chunks_exact_mut(bpp) {
            for value in &mut pixel[..channels] {
                *value = if *value >= threshold { 255 } else { 0 };
            }
        }
    });
}

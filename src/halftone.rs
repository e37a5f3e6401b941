//! Circular-dot halftone on a fixed grid.
use crate::{
    Image,
    color::{luma, read_rgb},
    parallel::for_each_band,
};

/// Edge length of a halftone cell in pixels.
pub const CELL_SIZE: usize = 4;

/// Dot radius for a cell of average luma `avg_luma`: black cells get a dot
/// that covers the whole cell, white cells none.
#[inline]
pub fn dot_radius(avg_luma: f32) -> f32 {
    let half_cell = CELL_SIZE as f32 / 2.0;
    (1.0 - avg_luma / 255.0) * half_cell * 1.5
}

/// Replaces every 4×4 cell by a black dot on white whose radius follows the
/// cell's average luma.
///
/// Partial cells at the right and bottom edges average only their in-bounds
/// pixels and keep the full-cell center.
pub fn halftone(image: &mut Image) {
    let format = image.format();
    let bpp = format.bytes_per_pixel();
    let channels = format.color_channels();
    let width = image.width();
    let stride = image.stride();
    let center = CELL_SIZE as f32 / 2.0;

    for_each_band(image.pixels_mut(), stride, CELL_SIZE, |_, band| {
        let rows = band.len() / stride;

        for cell_x in (0..width).step_by(CELL_SIZE) {
            let cols = CELL_SIZE.min(width - cell_x);

            let mut sum = 0.0;
            for row in 0..rows {
                for col in 0..cols {
                    let offset = row * stride + (cell_x + col) * bpp;
                    let [r, g, b] =
                        read_rgb(&band[offset..offset + bpp], format);
                    sum += luma(r, g, b);
                }
            }
            let radius = dot_radius(sum / (rows * cols) as f32);

            for row in 0..rows {
                for col in 0..cols {
                    let dx = col as f32 + 0.5 - center;
                    let dy = row as f32 + 0.5 - center;
                    let inside = (dx * dx + dy * dy).sqrt() < radius;
                    let ink = if inside { 0 } else { 255 };

                    let offset = row * stride + (cell_x + col) * bpp;
                    band[offset..offset + channels].fill(ink);
                }
            }
        }
    });
}

//! Error diffusion engine.
//!
//! Pixels are visited in strict scan order, so this engine is inherently
//! serial: every pixel depends on the error pushed forward by the pixels
//! before it.
use crate::{
    DitherConfig, Image, Palette, Result,
    color::{read_rgb, write_color},
    kernel::DiffusionKernel,
};

/// Accumulated quantization error, one `f32` per color channel per pixel.
struct ErrorBuffer {
    width: usize,
    height: usize,
    data: Vec<[f32; 3]>,
}

impl ErrorBuffer {
    fn new(width: usize, height: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(width * height)?;
        data.resize(width * height, [0.0; 3]);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline(always)]
    fn get(&self, x: usize, y: usize) -> [f32; 3] {
        self.data[y * self.width + x]
    }

    /// Adds `residual * weight` at `(x, y)`. Positions outside the image
    /// are dropped.
    #[inline(always)]
    fn spread(&mut self, x: isize, y: usize, residual: [f32; 3], weight: f32) {
        if x < 0 || x as usize >= self.width || y >= self.height {
            return;
        }
        let slot = &mut self.data[y * self.width + x as usize];
        for (e, r) in slot.iter_mut().zip(residual) {
            *e += r * weight;
        }
    }
}

/// Quantizes `image` against the configured palette, spreading every
/// pixel's residual over `kernel`.
///
/// On rows scanned right-to-left (odd rows when `serpentine` is set) the
/// kernel is mirrored horizontally. Taps that fall outside the image are
/// discarded without renormalizing the remaining weights.
pub fn error_diffusion(
    image: &mut Image,
    kernel: &DiffusionKernel,
    config: &DitherConfig,
) -> Result<()> {
    config.validate_strength()?;

    let generated;
    let palette = match config.explicit_palette()? {
        Some(palette) => palette,
        None => {
            generated = Palette::uniform_ramp(config.num_colors)?;
            &generated
        }
    };

    let (width, height) = (image.width(), image.height());
    let format = image.format();
    let bpp = format.bytes_per_pixel();
    let strength = config.strength;

    let mut errors = ErrorBuffer::new(width, height)?;
    let pixels = image.pixels_mut();

    for y in 0..height {
        let reverse = config.serpentine && y % 2 == 1;

        for i in 0..width {
            let x = if reverse { width - 1 - i } else { i };
            let offset = (y * width + x) * bpp;
            let pixel = &mut pixels[offset..offset + bpp];

            let raw = read_rgb(pixel, format);
            let error = errors.get(x, y);
            let value = [
                (raw[0] + error[0]).clamp(0.0, 255.0),
                (raw[1] + error[1]).clamp(0.0, 255.0),
                (raw[2] + error[2]).clamp(0.0, 255.0),
            ];

            let matched = palette.closest_unchecked(value);
            write_color(pixel, format, matched);

            let residual = [
                (value[0] - matched.r as f32) * strength,
                (value[1] - matched.g as f32) * strength,
                (value[2] - matched.b as f32) * strength,
            ];

            for &(dx, dy, weight) in kernel.entries {
                let dx = if reverse { -dx } else { dx };
                errors.spread(
                    x as isize + dx as isize,
                    y + dy as usize,
                    residual,
                    kernel.weight(weight),
                );
            }
        }
    }

    Ok(())
}

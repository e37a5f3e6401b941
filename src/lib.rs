//! In-place color reduction and dithering for raw pixel buffers.
//!
//! [`dither()`] rewrites an [`Image`] so that every pixel uses one of a small
//! set of colors: an explicit [`Palette`] or an evenly spaced gray ramp.
//! Available methods:
//!
//! - Error diffusion with eight classic kernels (Floyd-Steinberg,
//!   Jarvis-Judice-Ninke, Stucki, Atkinson, Burkes, Sierra, Sierra Two-Row,
//!   Sierra Lite), serpentine or raster scan.
//! - Ordered dithering with 2×2, 4×4 and 8×8 Bayer matrices.
//! - Seeded white noise and interleaved gradient ("blue") noise.
//! - Hard threshold and circular-dot halftone.
//!
//! [`quantize()`] builds a palette from an image's most frequent colors.
//!
//! ## Examples
//!
//! ```
//! use rasterdither::{Algorithm, DitherConfig, Image, PixelFormat, dither};
//!
//! let mut image =
//!     Image::from_raw(2, 2, PixelFormat::Grayscale, vec![0, 128, 255, 64])?;
//!
//! dither(&mut image, DitherConfig::new(Algorithm::Threshold))?;
//!
//! assert_eq!(image.pixels(), &[0, 255, 255, 0]);
//! # Ok::<(), rasterdither::Error>(())
//! ```
//!
//! ## Parallelism
//!
//! With the default `rayon` feature the ordered, noise, threshold and
//! halftone engines process rows in parallel. Output does not depend on the
//! feature. Error diffusion is always sequential.
//!
//! ## Features
//!
//! - `rayon` (default) -- row-parallel per-pixel engines.
//! - `serde` -- `Serialize`/`Deserialize` for [`DitherConfig`],
//!   [`Algorithm`], [`Palette`], [`Color`] and [`PixelFormat`].
mod buffer;
mod color;
mod config;
mod diffusion;
mod error;
mod halftone;
pub mod kernel;
mod noise;
pub mod ordered;
pub mod palette;
mod parallel;
mod step;
mod threshold;

pub use buffer::{Image, PixelFormat};
pub use color::{Color, find_closest_color, luma};
pub use config::{Algorithm, DEFAULT_SEED, DitherConfig};
pub use error::{Error, Result};
pub use halftone::CELL_SIZE as HALFTONE_CELL_SIZE;
pub use kernel::DiffusionKernel;
pub use noise::interleaved_gradient;
pub use palette::Palette;

use noise::Noise;

/// Dithers `image` in place as described by `config`.
///
/// Configuration problems ([`Error::InvalidConfiguration`],
/// [`Error::EmptyPalette`]) are reported before any pixel is written.
///
/// ## Examples
///
/// ```
/// use rasterdither::{Algorithm, DitherConfig, Image, PixelFormat, dither};
///
/// let mut image =
///     Image::from_raw(1, 1, PixelFormat::Rgb, vec![200, 200, 200])?;
///
/// dither(&mut image, DitherConfig::new(Algorithm::FloydSteinberg))?;
///
/// assert_eq!(image.pixels(), &[255, 255, 255]);
/// # Ok::<(), rasterdither::Error>(())
/// ```
pub fn dither(image: &mut Image, config: DitherConfig) -> Result<()> {
    tracing::debug!(
        algorithm = ?config.algorithm,
        width = image.width(),
        height = image.height(),
        format = ?image.format(),
        "Dithering image"
    );

    match config.algorithm {
        Algorithm::Random => {
            noise::noise(image, Noise::White { seed: config.seed }, &config)
        }
        Algorithm::BlueNoise => {
            noise::noise(image, Noise::InterleavedGradient, &config)
        }
        Algorithm::Threshold => {
            threshold::threshold(image, config.threshold);
            Ok(())
        }
        Algorithm::Halftone => {
            halftone::halftone(image);
            Ok(())
        }
        algorithm => match (algorithm.kernel(), algorithm.matrix_size()) {
            (Some(kernel), _) => {
                diffusion::error_diffusion(image, kernel, &config)
            }
            (None, Some(size)) => ordered::ordered(image, size, &config),
            (None, None) => Err(Error::InvalidConfiguration(format!(
                "{algorithm:?} has no engine"
            ))),
        },
    }
}

/// Reduces `image` to a palette of its `num_colors` most frequent colors.
///
/// See [`Palette::quantize_histogram()`].
pub fn quantize(image: &Image, num_colors: usize) -> Result<Palette> {
    Palette::quantize_histogram(image, num_colors)
}

//! Algorithm selection and per-call configuration.
use crate::{
    Error, Palette, Result,
    kernel::{self, DiffusionKernel},
};

/// Seed used by [`Algorithm::Random`] unless overridden.
pub const DEFAULT_SEED: u64 = 0;

/// Dithering algorithm selector.
///
/// `Ordered*` and `Bayer*` are aliases that run the same engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    FloydSteinberg,
    JarvisJudiceNinke,
    Stucki,
    Atkinson,
    Burkes,
    Sierra,
    SierraTwoRow,
    SierraLite,
    Ordered2x2,
    Ordered4x4,
    Ordered8x8,
    Bayer2x2,
    Bayer4x4,
    Bayer8x8,
    /// Uniform white noise from a seeded generator.
    Random,
    /// Interleaved gradient noise standing in for a blue noise mask.
    BlueNoise,
    /// Hard per-channel cutoff.
    Threshold,
    /// Circular dots on a 4×4 grid.
    Halftone,
}

impl Algorithm {
    pub const ALL: [Self; 18] = [
        Self::FloydSteinberg,
        Self::JarvisJudiceNinke,
        Self::Stucki,
        Self::Atkinson,
        Self::Burkes,
        Self::Sierra,
        Self::SierraTwoRow,
        Self::SierraLite,
        Self::Ordered2x2,
        Self::Ordered4x4,
        Self::Ordered8x8,
        Self::Bayer2x2,
        Self::Bayer4x4,
        Self::Bayer8x8,
        Self::Random,
        Self::BlueNoise,
        Self::Threshold,
        Self::Halftone,
    ];

    /// The diffusion kernel for error diffusion variants.
    pub fn kernel(self) -> Option<&'static DiffusionKernel> {
        Some(match self {
            Self::FloydSteinberg => &kernel::FLOYD_STEINBERG,
            Self::JarvisJudiceNinke => &kernel::JARVIS_JUDICE_NINKE,
            Self::Stucki => &kernel::STUCKI,
            Self::Atkinson => &kernel::ATKINSON,
            Self::Burkes => &kernel::BURKES,
            Self::Sierra => &kernel::SIERRA,
            Self::SierraTwoRow => &kernel::SIERRA_TWO_ROW,
            Self::SierraLite => &kernel::SIERRA_LITE,
            _ => return None,
        })
    }

    /// The threshold matrix size for ordered variants.
    pub fn matrix_size(self) -> Option<usize> {
        match self {
            Self::Ordered2x2 | Self::Bayer2x2 => Some(2),
            Self::Ordered4x4 | Self::Bayer4x4 => Some(4),
            Self::Ordered8x8 | Self::Bayer8x8 => Some(8),
            _ => None,
        }
    }
}

/// Parameters of a single [`dither()`](crate::dither) call.
///
/// ## Examples
///
/// ```
/// # use rasterdither::{Algorithm, DitherConfig, palette};
/// let config = DitherConfig::new(Algorithm::Atkinson)
///     .with_palette(palette::GAME_BOY)
///     .with_serpentine(false);
///
/// assert_eq!(config.threshold, 128);
/// assert!(config.palette.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DitherConfig {
    pub algorithm: Algorithm,
    /// Explicit output colors. `None` uses a gray ramp of `num_colors`.
    pub palette: Option<Palette>,
    /// Gray levels of the generated ramp and the quantization step of the
    /// ordered and noise engines.
    pub num_colors: usize,
    /// Cutoff for [`Algorithm::Threshold`].
    pub threshold: u8,
    /// Scales diffused error and injected noise, in `0.0..=1.0`.
    pub strength: f32,
    /// Alternate scan direction on odd rows during error diffusion.
    pub serpentine: bool,
    /// Seed for [`Algorithm::Random`].
    pub seed: u64,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            palette: None,
            num_colors: 2,
            threshold: 128,
            strength: 1.0,
            serpentine: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl DitherConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_palette(mut self, palette: impl Into<Palette>) -> Self {
        self.palette = Some(palette.into());
        self
    }

    pub fn with_num_colors(mut self, num_colors: usize) -> Self {
        self.num_colors = num_colors;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_serpentine(mut self, serpentine: bool) -> Self {
        self.serpentine = serpentine;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub(crate) fn validate_strength(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(Error::InvalidConfiguration(format!(
                "strength must be within 0..=1, got {}",
                self.strength
            )));
        }
        Ok(())
    }

    /// Checks an explicit palette, if any, before it is used for lookups.
    pub(crate) fn explicit_palette(&self) -> Result<Option<&Palette>> {
        match &self.palette {
            Some(palette) if palette.is_empty() => Err(Error::EmptyPalette),
            other => Ok(other.as_ref()),
        }
    }

    /// Number of output levels per channel for the step based engines:
    /// the explicit palette's length, or `num_colors`.
    pub(crate) fn levels(&self) -> Result<usize> {
        let levels = match self.explicit_palette()? {
            Some(palette) => palette.len(),
            None => self.num_colors,
        };
        crate::error::require_two_colors(levels)?;
        Ok(levels)
    }
}

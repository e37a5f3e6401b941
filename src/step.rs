//! Snapping of offset channel values to a fixed set of levels.
//!
//! Shared by the ordered and noise engines: each adds a per-pixel offset,
//! then rounds to the nearest of `levels` evenly spaced values, or, with an
//! explicit palette, to the nearest palette color.
use crate::{
    DitherConfig, Palette, PixelFormat, Result,
    color::{read_rgb, write_color},
    palette::ramp_entry,
};

pub(crate) struct StepQuantizer<'a> {
    levels: usize,
    step: f32,
    palette: Option<&'a Palette>,
}

impl<'a> StepQuantizer<'a> {
    /// Fails with `InvalidConfiguration` when fewer than two levels are
    /// configured and with `EmptyPalette` for an empty explicit palette.
    pub(crate) fn new(config: &'a DitherConfig) -> Result<Self> {
        let levels = config.levels()?;
        Ok(Self {
            levels,
            step: 255.0 / (levels - 1) as f32,
            palette: config.explicit_palette()?,
        })
    }

    /// Distance between adjacent output levels.
    #[inline(always)]
    pub(crate) fn step(&self) -> f32 {
        self.step
    }

    /// Quantizes the color channels of `pixel` after adding `offsets`.
    #[inline]
    pub(crate) fn apply(
        &self,
        pixel: &mut [u8],
        format: PixelFormat,
        offsets: [f32; 3],
    ) {
        match self.palette {
            Some(palette) => {
                let rgb = read_rgb(pixel, format);
                let shifted = [
                    (rgb[0] + offsets[0]).clamp(0.0, 255.0),
                    (rgb[1] + offsets[1]).clamp(0.0, 255.0),
                    (rgb[2] + offsets[2]).clamp(0.0, 255.0),
                ];
                write_color(pixel, format, palette.closest_unchecked(shifted));
            }
            None => {
                for (channel, offset) in pixel
                    .iter_mut()
                    .take(format.color_channels())
                    .zip(offsets)
                {
                    *channel = self.snap(*channel as f32 + offset);
                }
            }
        }
    }

    /// Nearest grid level to `value`, as the matching uniform ramp entry.
    #[inline(always)]
    fn snap(&self, value: f32) -> u8 {
        let last = (self.levels - 1) as f32;
        let index = (value / self.step).round().clamp(0.0, last) as usize;
        ramp_entry(index, self.levels).r
    }
}

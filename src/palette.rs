//! Preset palettes and palette generators.
//!
//! The presets reproduce well known hardware palettes byte for byte. The
//! generators build a uniform gray ramp or reduce an image to its most
//! frequent colors.
use crate::{
    Color, Image, Result,
    color::{closest_unchecked, read_rgb},
    error::require_two_colors,
};
use std::collections::HashMap;

/// Pure black and white.
pub const BLACK_WHITE: [Color; 2] = [Color::BLACK, Color::WHITE];

/// CGA mode 4, palette 1 (high intensity): black, cyan, magenta, white.
pub const CGA: [Color; 4] = [
    Color::new(0x00, 0x00, 0x00),
    Color::new(0x55, 0xff, 0xff),
    Color::new(0xff, 0x55, 0xff),
    Color::new(0xff, 0xff, 0xff),
];

/// The 16 default EGA colors in attribute order.
pub const EGA: [Color; 16] = [
    Color::new(0x00, 0x00, 0x00),
    Color::new(0x00, 0x00, 0xaa),
    Color::new(0x00, 0xaa, 0x00),
    Color::new(0x00, 0xaa, 0xaa),
    Color::new(0xaa, 0x00, 0x00),
    Color::new(0xaa, 0x00, 0xaa),
    Color::new(0xaa, 0x55, 0x00),
    Color::new(0xaa, 0xaa, 0xaa),
    Color::new(0x55, 0x55, 0x55),
    Color::new(0x55, 0x55, 0xff),
    Color::new(0x55, 0xff, 0x55),
    Color::new(0x55, 0xff, 0xff),
    Color::new(0xff, 0x55, 0x55),
    Color::new(0xff, 0x55, 0xff),
    Color::new(0xff, 0xff, 0x55),
    Color::new(0xff, 0xff, 0xff),
];

/// Original Game Boy (DMG) green scale, darkest first.
pub const GAME_BOY: [Color; 4] = [
    Color::new(0x0f, 0x38, 0x0f),
    Color::new(0x30, 0x62, 0x30),
    Color::new(0x8b, 0xac, 0x0f),
    Color::new(0x9b, 0xbc, 0x0f),
];

/// Commodore 64 VIC-II colors in register order.
pub const C64: [Color; 16] = [
    Color::new(0x00, 0x00, 0x00), // black
    Color::new(0xff, 0xff, 0xff), // white
    Color::new(0x88, 0x00, 0x00), // red
    Color::new(0xaa, 0xff, 0xee), // cyan
    Color::new(0xcc, 0x44, 0xcc), // purple
    Color::new(0x00, 0xcc, 0x55), // green
    Color::new(0x00, 0x00, 0xaa), // blue
    Color::new(0xee, 0xee, 0x77), // yellow
    Color::new(0xdd, 0x88, 0x55), // orange
    Color::new(0x66, 0x44, 0x00), // brown
    Color::new(0xff, 0x77, 0x77), // light red
    Color::new(0x33, 0x33, 0x33), // dark gray
    Color::new(0x77, 0x77, 0x77), // gray
    Color::new(0xaa, 0xff, 0x66), // light green
    Color::new(0x00, 0x88, 0xff), // light blue
    Color::new(0xbb, 0xbb, 0xbb), // light gray
];

/// Channel levels of the web-safe cube.
const WEB_SAFE_LEVELS: [u8; 6] = [0, 51, 102, 153, 204, 255];

/// Histogram buckets keep the top four bits of every channel.
const BUCKET_MASK: u8 = !0x0f;

/// An ordered list of permitted output colors.
///
/// The list may be empty; engines reject an empty palette with
/// [`Error::EmptyPalette`](crate::Error::EmptyPalette) before the first
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// The 216 entry web-safe grid, `{0, 51, 102, 153, 204, 255}³`, with
    /// red varying slowest.
    pub fn web_safe() -> Self {
        let colors = WEB_SAFE_LEVELS
            .iter()
            .flat_map(|&r| {
                WEB_SAFE_LEVELS.iter().flat_map(move |&g| {
                    WEB_SAFE_LEVELS.iter().map(move |&b| Color::new(r, g, b))
                })
            })
            .collect();
        Self { colors }
    }

    /// `num_colors` grays evenly spaced from 0 to 255 inclusive.
    ///
    /// Entry `i` is `round(i * 255 / (num_colors - 1))`. Fails with
    /// [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// for fewer than two colors.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use rasterdither::{Color, Palette};
    /// let ramp = Palette::uniform_ramp(3).unwrap();
    ///
    /// assert_eq!(
    ///     ramp.colors(),
    ///     &[Color::gray(0), Color::gray(128), Color::gray(255)]
    /// );
    /// ```
    pub fn uniform_ramp(num_colors: usize) -> Result<Self> {
        require_two_colors(num_colors)?;
        let mut colors = Vec::new();
        colors.try_reserve_exact(num_colors)?;
        colors.extend((0..num_colors).map(|i| ramp_entry(i, num_colors)));
        Ok(Self { colors })
    }

    /// Reduces `image` to its `num_colors` most frequent colors.
    ///
    /// Every channel is truncated to 16 levels (`channel & 0xf0`) and the
    /// resulting buckets are counted. Buckets are ranked by count,
    /// descending, with ties broken by the packed bucket value, ascending.
    /// If the image has fewer distinct buckets than requested, the
    /// remaining entries are taken from [`Palette::uniform_ramp()`] at the
    /// same indices.
    pub fn quantize_histogram(
        image: &Image,
        num_colors: usize,
    ) -> Result<Self> {
        require_two_colors(num_colors)?;

        let format = image.format();
        let bpp = format.bytes_per_pixel();
        let mut histogram: HashMap<u32, u32> = HashMap::new();
        // At most 16³ buckets can exist.
        histogram.try_reserve((image.width() * image.height()).min(4096))?;

        for pixel in image.pixels().chunks_exact(bpp) {
            let [r, g, b] = read_rgb(pixel, format);
            let bucket = Color::new(
                r as u8 & BUCKET_MASK,
                g as u8 & BUCKET_MASK,
                b as u8 & BUCKET_MASK,
            );
            *histogram.entry(bucket.to_u32()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(u32, u32)> = Vec::new();
        ranked.try_reserve_exact(histogram.len())?;
        ranked.extend(histogram);
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        tracing::trace!(
            buckets = ranked.len(),
            num_colors,
            "Ranked color histogram"
        );

        let mut colors = Vec::new();
        colors.try_reserve_exact(num_colors)?;
        colors.extend(
            ranked
                .iter()
                .take(num_colors)
                .map(|&(packed, _)| Color::from_u32(packed)),
        );
        let found = colors.len();
        colors.extend((found..num_colors).map(|i| ramp_entry(i, num_colors)));

        Ok(Self { colors })
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// See [`find_closest_color()`](crate::find_closest_color).
    pub fn closest(&self, r: f32, g: f32, b: f32) -> Result<Color> {
        crate::find_closest_color(&self.colors, r, g, b)
    }

    /// Same as [`Palette::closest()`] for callers that already checked
    /// [`Palette::is_empty()`].
    #[inline]
    pub(crate) fn closest_unchecked(&self, rgb: [f32; 3]) -> Color {
        closest_unchecked(&self.colors, rgb[0], rgb[1], rgb[2])
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl From<&[Color]> for Palette {
    fn from(colors: &[Color]) -> Self {
        Self::new(colors.to_vec())
    }
}

impl<const N: usize> From<[Color; N]> for Palette {
    fn from(colors: [Color; N]) -> Self {
        Self::new(colors.to_vec())
    }
}

impl AsRef<[Color]> for Palette {
    fn as_ref(&self) -> &[Color] {
        &self.colors
    }
}

/// Entry `i` of the `num_colors`-level gray ramp.
#[inline]
pub(crate) fn ramp_entry(i: usize, num_colors: usize) -> Color {
    let value = (i as f64 * 255.0 / (num_colors - 1) as f64).round();
    Color::gray(value as u8)
}

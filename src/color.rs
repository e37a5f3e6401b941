//! Colors and the perceptually weighted nearest-color search.
use crate::{Error, PixelFormat, Result};

/// An 8-bit RGB triple. Alpha never takes part in color matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Packs the color as `0xRRGGBB`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Inverse of [`Color::to_u32()`]; the top byte is ignored.
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Rec. 601 luma, rounded to the nearest byte.
    #[inline]
    pub fn luma(self) -> u8 {
        luma(self.r as f32, self.g as f32, self.b as f32)
            .round()
            .clamp(0.0, 255.0) as u8
    }

    #[inline]
    fn channels(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

/// `0.299 R + 0.587 G + 0.114 B`.
#[inline(always)]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Weighted squared distance `2 dr² + 4 dg² + 3 db²`.
#[inline(always)]
fn distance(color: Color, r: f32, g: f32, b: f32) -> f32 {
    let [cr, cg, cb] = color.channels();
    let (dr, dg, db) = (r - cr, g - cg, b - cb);
    2.0 * dr * dr + 4.0 * dg * dg + 3.0 * db * db
}

/// Returns the palette entry closest to `(r, g, b)`.
///
/// Green is weighted highest, approximating luma sensitivity. Ties go to
/// the entry that comes first in `palette`.
///
/// ## Examples
///
/// ```
/// # use rasterdither::{Color, find_closest_color};
/// let palette = [Color::BLACK, Color::WHITE];
/// let closest = find_closest_color(&palette, 200.0, 200.0, 200.0).unwrap();
///
/// assert_eq!(closest, Color::WHITE);
/// ```
pub fn find_closest_color(
    palette: &[Color],
    r: f32,
    g: f32,
    b: f32,
) -> Result<Color> {
    if palette.is_empty() {
        return Err(Error::EmptyPalette);
    }
    Ok(closest_unchecked(palette, r, g, b))
}

/// Linear scan without the emptiness check. Callers validate once per
/// image instead of once per pixel.
#[inline]
pub(crate) fn closest_unchecked(
    palette: &[Color],
    r: f32,
    g: f32,
    b: f32,
) -> Color {
    let mut best = palette[0];
    let mut best_distance = distance(best, r, g, b);
    for &candidate in &palette[1..] {
        let d = distance(candidate, r, g, b);
        if d < best_distance {
            best = candidate;
            best_distance = d;
        }
    }
    best
}

/// Reads the color channels of one pixel as `[r, g, b]`. Gray formats
/// replicate their single channel.
#[inline]
pub(crate) fn read_rgb(pixel: &[u8], format: PixelFormat) -> [f32; 3] {
    if format.is_gray() {
        let v = pixel[0] as f32;
        [v, v, v]
    } else {
        [pixel[0] as f32, pixel[1] as f32, pixel[2] as f32]
    }
}

/// Writes `color` into one pixel. Gray formats receive its luma; alpha is
/// left alone.
#[inline]
pub(crate) fn write_color(pixel: &mut [u8], format: PixelFormat, color: Color) {
    if format.is_gray() {
        pixel[0] = color.luma();
    } else {
        pixel[0] = color.r;
        pixel[1] = color.g;
        pixel[2] = color.b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_distance_prefers_white_for_light_gray() {
        // 9 * 55² = 27225 against 9 * 200² = 360000.
        assert_eq!(distance(Color::WHITE, 200.0, 200.0, 200.0), 27225.0);
        assert_eq!(distance(Color::BLACK, 200.0, 200.0, 200.0), 360000.0);
        let palette = [Color::BLACK, Color::WHITE];
        assert_eq!(
            find_closest_color(&palette, 200.0, 200.0, 200.0).unwrap(),
            Color::WHITE
        );
    }

    #[test]
    fn green_dominates_distance() {
        // Same absolute error, but the green-off candidate is further away.
        let palette = [Color::new(0, 10, 0), Color::new(10, 0, 0)];
        assert_eq!(
            find_closest_color(&palette, 0.0, 0.0, 0.0).unwrap(),
            Color::new(10, 0, 0)
        );
    }

    #[test]
    fn ties_resolve_to_first_entry() {
        let palette = [Color::gray(100), Color::gray(50), Color::gray(100)];
        assert_eq!(
            find_closest_color(&palette, 75.0, 75.0, 75.0).unwrap(),
            Color::gray(100)
        );
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(
            find_closest_color(&[], 0.0, 0.0, 0.0),
            Err(Error::EmptyPalette)
        ));
    }

    #[test]
    fn luma_of_primaries() {
        assert_eq!(Color::WHITE.luma(), 255);
        assert_eq!(Color::BLACK.luma(), 0);
        assert_eq!(Color::new(255, 0, 0).luma(), 76);
        assert_eq!(Color::new(0, 255, 0).luma(), 150);
        assert_eq!(Color::new(0, 0, 255).luma(), 29);
    }

    #[test]
    fn packing() {
        let c = Color::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_u32(), 0x123456);
        assert_eq!(Color::from_u32(0xff123456), c);
    }
}

//! Row scheduling for the per-pixel engines.
//!
//! With the `rayon` feature, bands of rows are processed in parallel.
//! Otherwise the same closure runs sequentially. Engines must not depend on
//! the order in which bands are visited.

/// Calls `f(band_index, band)` for every band of `rows_per_band` rows of
/// `stride` bytes. The last band may be shorter.
pub(crate) fn for_each_band<F>(
    pixels: &mut [u8],
    stride: usize,
    rows_per_band: usize,
    f: F,
) where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    let band = stride * rows_per_band;
    if band == 0 || pixels.is_empty() {
        return;
    }

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        pixels
            .par_chunks_mut(band)
            .enumerate()
            .for_each(|(index, rows)| f(index, rows));
    }

    #[cfg(not(feature = "rayon"))]
    pixels
        .chunks_mut(band)
        .enumerate()
        .for_each(|(index, rows)| f(index, rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_buffer() {
        let mut pixels = vec![0u8; 3 * 10];
        for_each_band(&mut pixels, 3, 4, |index, rows| {
            for value in rows.iter_mut() {
                *value = index as u8 + 1;
            }
        });
        assert_eq!(&pixels[..12], &[1; 12]);
        assert_eq!(&pixels[12..24], &[2; 12]);
        assert_eq!(&pixels[24..], &[3; 6]);
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut pixels: Vec<u8> = Vec::new();
        for_each_band(&mut pixels, 0, 1, |_, _| panic!("no bands expected"));
    }
}

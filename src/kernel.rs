//! Error diffusion kernels.
//!
//! Each kernel lists the not-yet-visited neighbors that receive a share of
//! a pixel's quantization error. Offsets are given for a left-to-right scan;
//! the engine mirrors `dx` on right-to-left rows.

/// A weighted set of forward offsets.
///
/// Neighbor `(dx, dy)` receives `error * weight / divisor`. Every kernel
/// propagates the full error except [`ATKINSON`], which passes on 6/8 and
/// drops the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffusionKernel {
    /// Human readable name.
    pub name: &'static str,
    /// `(dx, dy, weight)` entries.
    ///
    /// - `dx`: horizontal offset, positive is the scan direction.
    /// - `dy`: rows below the current one.
    /// - `weight`: numerator over [`DiffusionKernel::divisor`].
    pub entries: &'static [(i32, i32, u8)],
    pub divisor: u8,
}

impl DiffusionKernel {
    /// Weight of entry `(.., .., weight)` as a fraction.
    #[inline(always)]
    pub fn weight(&self, weight: u8) -> f32 {
        weight as f32 / self.divisor as f32
    }

    /// Fraction of the error that is propagated in total.
    pub fn total_weight(&self) -> f32 {
        self.entries
            .iter()
            .map(|&(_, _, w)| w as u32)
            .sum::<u32>() as f32
            / self.divisor as f32
    }

    /// Every offset points at a pixel later in scan order: a row below, or
    /// further along the current row.
    pub fn is_causal(&self) -> bool {
        self.entries
            .iter()
            .all(|&(dx, dy, _)| dy > 0 || (dy == 0 && dx > 0))
    }
}

/// Floyd-Steinberg (1976).
///
/// ```text
///        X   7
///    3   5   1      / 16
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    name: "Floyd-Steinberg",
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
};

/// Jarvis, Judice and Ninke.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1      / 48
/// ```
pub const JARVIS_JUDICE_NINKE: DiffusionKernel = DiffusionKernel {
    name: "Jarvis-Judice-Ninke",
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};

/// Stucki.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1      / 42
/// ```
pub const STUCKI: DiffusionKernel = DiffusionKernel {
    name: "Stucki",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};

/// Atkinson, as used on the original Macintosh. Propagates 75% of the
/// error.
///
/// ```text
///        X   1   1
///    1   1   1
///        1              / 8
/// ```
pub const ATKINSON: DiffusionKernel = DiffusionKernel {
    name: "Atkinson",
    entries: &[
        (1, 0, 1),
        (2, 0, 1),
        (-1, 1, 1),
        (0, 1, 1),
        (1, 1, 1),
        (0, 2, 1),
    ],
    divisor: 8,
};

/// Burkes.
///
/// ```text
///            X   8   4
///    2   4   8   4   2      / 32
/// ```
pub const BURKES: DiffusionKernel = DiffusionKernel {
    name: "Burkes",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
};

/// Sierra (Sierra-3).
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2          / 32
/// ```
pub const SIERRA: DiffusionKernel = DiffusionKernel {
    name: "Sierra",
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
};

/// Two-row Sierra.
///
/// ```text
///            X   4   3
///    1   2   3   2   1      / 16
/// ```
pub const SIERRA_TWO_ROW: DiffusionKernel = DiffusionKernel {
    name: "Sierra Two-Row",
    entries: &[
        (1, 0, 4),
        (2, 0, 3),
        (-2, 1, 1),
        (-1, 1, 2),
        (0, 1, 3),
        (1, 1, 2),
        (2, 1, 1),
    ],
    divisor: 16,
};

/// Sierra Lite.
///
/// ```text
///        X   2
///    1   1          / 4
/// ```
pub const SIERRA_LITE: DiffusionKernel = DiffusionKernel {
    name: "Sierra Lite",
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
};

/// All kernels, in [`Algorithm`](crate::Algorithm) order.
pub const ALL_KERNELS: [DiffusionKernel; 8] = [
    FLOYD_STEINBERG,
    JARVIS_JUDICE_NINKE,
    STUCKI,
    ATKINSON,
    BURKES,
    SIERRA,
    SIERRA_TWO_ROW,
    SIERRA_LITE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernels_are_causal() {
        for kernel in ALL_KERNELS {
            assert!(kernel.is_causal(), "{} is not causal", kernel.name);
        }
    }

    #[test]
    fn only_atkinson_drops_error() {
        for kernel in ALL_KERNELS {
            let expected = if kernel == ATKINSON { 0.75 } else { 1.0 };
            assert!(
                (kernel.total_weight() - expected).abs() < 1e-6,
                "{} sums to {}",
                kernel.name,
                kernel.total_weight()
            );
        }
    }

    #[test]
    fn acausal_kernel_detected() {
        let kernel = DiffusionKernel {
            name: "backwards",
            entries: &[(-1, 0, 1)],
            divisor: 1,
        };
        assert!(!kernel.is_causal());
    }
}

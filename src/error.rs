//! Error type shared by every engine.
use std::collections::TryReserveError;

/// Errors returned by [`dither()`](crate::dither) and
/// [`quantize()`](crate::quantize).
///
/// Configuration errors are always detected before the pixel buffer is
/// touched. An [`Error::AllocationFailure`] during error diffusion may leave
/// the rows processed so far already quantized.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Scratch memory (error buffer, generated palette or histogram) could
    /// not be obtained.
    #[error("failed to allocate scratch memory: {0}")]
    AllocationFailure(#[from] TryReserveError),
    /// The configuration cannot be applied, e.g. fewer than two colors in a
    /// mode that computes `step = 255 / (num_colors - 1)`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// An explicit palette without any entries was supplied.
    #[error("palette has no colors")]
    EmptyPalette,
    /// A raw pixel buffer does not match `width * height * bytes_per_pixel`.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Rejects color counts that would divide by zero when computing the
/// quantization step.
pub(crate) fn require_two_colors(num_colors: usize) -> Result<()> {
    if num_colors < 2 {
        return Err(Error::InvalidConfiguration(format!(
            "at least 2 colors are required, got {num_colors}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_color_guard() {
        assert!(require_two_colors(2).is_ok());
        assert!(matches!(
            require_two_colors(1),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            require_two_colors(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn allocation_failure_from_try_reserve() {
        let mut v: Vec<u8> = Vec::new();
        let err: Error = v.try_reserve(usize::MAX).unwrap_err().into();
        assert!(matches!(err, Error::AllocationFailure(_)));
    }
}

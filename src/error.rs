//! Errors returned by the waveform generators.

use std::fmt;

/// Broad class of a [`SineMixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter is outside its contract (lengths, signs, finiteness).
    InvalidArgument,
    /// Normalization would divide by a zero weight sum.
    DivideByZero,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SineMixError {
    /// Weights were supplied but do not pair one-to-one with the frequencies.
    WeightCountMismatch { frequencies: usize, weights: usize },
    /// The frequency set is empty.
    NoFrequencies,
    /// Frequency is non-finite or not positive.
    InvalidFrequency { index: usize, value: f64 },
    /// Weight is non-finite or negative.
    InvalidWeight { index: usize, value: f64 },
    /// All weights are zero.
    ZeroWeightSum,
    /// Sample rate is zero.
    InvalidSampleRate,
    /// A scalar parameter (phase, gain, frequency) is non-finite.
    InvalidParameter { name: &'static str, value: f64 },
}

impl SineMixError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SineMixError::ZeroWeightSum => ErrorKind::DivideByZero,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for SineMixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SineMixError::WeightCountMismatch { frequencies, weights } => write!(
                f,
                "{} weights supplied for {} frequencies",
                weights, frequencies
            ),
            SineMixError::NoFrequencies => write!(f, "at least one frequency is required"),
            SineMixError::InvalidFrequency { index, value } => {
                write!(f, "frequency #{} must be finite and positive, got {}", index, value)
            }
            SineMixError::InvalidWeight { index, value } => {
                write!(f, "weight #{} must be finite and non-negative, got {}", index, value)
            }
            SineMixError::ZeroWeightSum => write!(f, "weights sum to zero, cannot normalize"),
            SineMixError::InvalidSampleRate => write!(f, "sample rate must be positive"),
            SineMixError::InvalidParameter { name, value } => {
                write!(f, "{} must be finite, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for SineMixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(SineMixError::ZeroWeightSum.kind(), ErrorKind::DivideByZero);
        let e = SineMixError::WeightCountMismatch { frequencies: 4, weights: 3 };
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        assert_eq!(SineMixError::InvalidSampleRate.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_display_mentions_counts() {
        let e = SineMixError::WeightCountMismatch { frequencies: 4, weights: 3 };
        assert_eq!(e.to_string(), "3 weights supplied for 4 frequencies");
    }
}

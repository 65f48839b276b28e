use thiserror::Error;

/// Rejected codec configurations. Encoding and decoding never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Range minimum {0} must be <= 0")]
    MinAboveZero(f32),
    #[error("Epsilon {0} must be > 0")]
    EpsilonNotPositive(f32),
    #[error("Epsilon {epsilon} must be below range maximum {max}")]
    EpsilonNotBelowMax { epsilon: f32, max: f32 },
    #[error("Precision {0} outside 0..=23 significand bits")]
    PrecisionOutOfRange(u8),
}

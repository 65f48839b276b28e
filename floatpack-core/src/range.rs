use crate::codec::FloatCodec;
use crate::error::CodecError;
use floatpack_math::bits::{f32_from_bits, f32_to_bits, MAGNITUDE_MASK, SIGNIFICAND_BITS, SIGN_MASK};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sign bit as a signed integer
const SIGN_I32: i32 = i32::MIN;
const MAGNITUDE_I32: i32 = MAGNITUDE_MASK as i32;

/// Bits an encoded word needs beyond the retained significand: 1 sign + 8 exponent.
const HEADER_BITS: u32 = 9;

/// Range quantizer settings.
///
/// Legal values: `min <= 0 < epsilon < max` and `precision <= 23`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Lower clamp bound. A negative value (or -0.0) makes negatives representable.
    pub min: f32,
    /// Magnitudes below this collapse to +0.0
    pub epsilon: f32,
    /// Upper clamp bound
    pub max: f32,
    /// Significand bits retained; 23 is lossless
    pub precision: u8,
}

impl RangeConfig {
    pub fn new(min: f32, epsilon: f32, max: f32, precision: u8) -> Self {
        Self {
            min,
            epsilon,
            max,
            precision,
        }
    }

    /// Check `min <= 0 < epsilon < max` and `precision <= 23`. NaN fails every comparison.
    pub fn validate(&self) -> Result<(), CodecError> {
        if !(self.min <= 0.0) {
            return Err(CodecError::MinAboveZero(self.min));
        }
        if !(self.epsilon > 0.0) {
            return Err(CodecError::EpsilonNotPositive(self.epsilon));
        }
        if !(self.epsilon < self.max) {
            return Err(CodecError::EpsilonNotBelowMax {
                epsilon: self.epsilon,
                max: self.max,
            });
        }
        if self.precision as u32 > SIGNIFICAND_BITS {
            return Err(CodecError::PrecisionOutOfRange(self.precision));
        }
        Ok(())
    }

    pub fn build(self) -> Result<RangeQuantizer, CodecError> {
        RangeQuantizer::from_config(self)
    }
}

/// Clamping, dead-zone collapsing quantizer with a configurable word width.
///
/// Code layout: 0 is zero, positive magnitudes in `[epsilon, max]` follow in
/// ascending order, then negative magnitudes in `[epsilon, |min|]`, again
/// ascending. Within one sign the mapping is monotonic in magnitude and has no gaps
/// between the dead zone and `epsilon`.
///
/// All derived values are computed once here; `encode`/`decode` only compare,
/// shift and add.
#[derive(Debug, Clone)]
pub struct RangeQuantizer {
    config: RangeConfig,
    /// min < 0 (sign bit set, so -0.0 counts)
    negatives: bool,
    /// precision == 23: reorder by sign instead of shifting
    lossless: bool,
    shift: u32,
    // Bounds as raw bit patterns viewed signed
    f_min: i32,
    f_eps: i32,
    f_max: i32,
    /// Highest pre-delta code of the positive half
    c_max: i32,
    /// Pre-delta code of exact zero
    c_zero: i32,
    /// Shifted epsilon, rounded up to the retained precision: the smallest
    /// positive pre-delta code
    pos_eps: i32,
    /// Same for the negative half
    neg_eps: i32,
    /// Removed from codes above `c_zero`: closes the positive dead zone
    p_delta: i32,
    /// Removed from codes above `c_max`: closes the negative dead zone and
    /// packs negatives right after the positives
    n_delta: i32,
}

impl RangeQuantizer {
    /// Build a quantizer, rejecting settings that violate
    /// `min <= 0 < epsilon < max` or `precision <= 23`.
    pub fn new(min: f32, epsilon: f32, max: f32, precision: u8) -> Result<Self, CodecError> {
        Self::from_config(RangeConfig::new(min, epsilon, max, precision))
    }

    pub fn from_config(config: RangeConfig) -> Result<Self, CodecError> {
        config.validate()?;

        let shift = SIGNIFICAND_BITS - config.precision as u32;
        let f_min = f32_to_bits(config.min) as i32;
        let f_eps = f32_to_bits(config.epsilon) as i32;
        let f_max = f32_to_bits(config.max) as i32;
        let negatives = f_min < 0;
        let lossless = shift == 0;

        let (neg_eps, pos_eps, c_max, c_zero) = if lossless {
            (f_eps, f_eps ^ SIGN_I32, f_max ^ SIGN_I32, SIGN_I32)
        } else {
            // An off-grid epsilon truncates into the bucket below it; base the
            // codes on the next bucket so code 1 decodes to at least epsilon.
            let eps_up = snap_up(f_eps as u32, shift);
            let pos_eps = (eps_up >> shift) as i32;
            (
                ((eps_up ^ SIGN_MASK) >> shift) as i32,
                pos_eps,
                // max and epsilon may share a bucket
                ((f_max as u32 >> shift) as i32).max(pos_eps),
                0,
            )
        };
        let p_delta = pos_eps.wrapping_sub(c_zero).wrapping_sub(1);
        let n_delta = neg_eps.wrapping_sub(c_max).wrapping_sub(1);

        debug!(
            "RangeQuantizer: min={} eps={} max={} precision={} shift={} lossless={} negatives={} p_delta={:#x} n_delta={:#x}",
            config.min, config.epsilon, config.max, config.precision, shift, lossless, negatives, p_delta, n_delta
        );

        Ok(Self {
            config,
            negatives,
            lossless,
            shift,
            f_min,
            f_eps,
            f_max,
            c_max,
            c_zero,
            pos_eps,
            neg_eps,
            p_delta,
            n_delta,
        })
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn precision(&self) -> u8 {
        self.config.precision
    }

    pub fn is_lossless(&self) -> bool {
        self.lossless
    }

    pub fn has_negatives(&self) -> bool {
        self.negatives
    }

    /// Largest code `encode` can return
    pub fn max_code(&self) -> u32 {
        self.encode(self.config.max).max(self.encode(self.config.min))
    }

    /// Pull `value` into `[min, max]` (`[0, max]` without negatives) and force
    /// magnitudes below epsilon to +0.0. NaN clamps to the bound on its sign's side.
    pub fn clamp(&self, value: f32) -> f32 {
        let mut v = f32_to_bits(value) as i32;
        if v < 0 && !self.negatives {
            v = 0;
        }
        // Signed compare of raw bits orders same-sign floats by magnitude
        let bound = if v < 0 { self.f_min } else { self.f_max };
        if v > bound {
            v = bound;
        }
        if (v & MAGNITUDE_I32) < self.f_eps {
            v = 0;
        }
        f32_from_bits(v as u32)
    }

    /// Clamp, then map to a code of `9 + precision` bits.
    pub fn encode(&self, value: f32) -> u32 {
        let mut v = f32_to_bits(self.clamp(value)) as i32;
        if self.lossless {
            v ^= SIGN_I32;
        } else {
            v = (v as u32 >> self.shift) as i32;
            // Values in [epsilon, next grid point) sit one bucket low
            if v > self.c_zero && v < self.pos_eps {
                v = self.pos_eps;
            } else if self.negatives && v > self.c_max && v < self.neg_eps {
                v = self.neg_eps;
            }
        }
        if self.negatives && v > self.c_max {
            v = v.wrapping_sub(self.n_delta);
        }
        if v > self.c_zero {
            v = v.wrapping_sub(self.p_delta);
        }
        if self.lossless {
            v ^= SIGN_I32;
        }
        v as u32
    }

    /// Inverse of [`encode`](Self::encode). Dropped significand bits come back as zeros.
    pub fn decode(&self, code: u32) -> f32 {
        let mut v = code as i32;
        if self.lossless {
            v ^= SIGN_I32;
        }
        if v > self.c_zero {
            v = v.wrapping_add(self.p_delta);
        }
        if self.negatives && v > self.c_max {
            v = v.wrapping_add(self.n_delta);
        }
        let bits = if self.lossless {
            (v ^ SIGN_I32) as u32
        } else {
            (v as u32) << self.shift
        };
        f32_from_bits(bits)
    }
}

/// Round a non-negative float's bits up to the next multiple of `1 << shift`.
fn snap_up(bits: u32, shift: u32) -> u32 {
    let low = (1u32 << shift) - 1;
    if bits & low == 0 {
        bits
    } else {
        (bits | low) + 1
    }
}

impl FloatCodec for RangeQuantizer {
    fn bits(&self) -> u32 {
        HEADER_BITS + self.config.precision as u32
    }

    fn encode(&self, value: f32) -> u32 {
        RangeQuantizer::encode(self, value)
    }

    fn decode(&self, code: u32) -> f32 {
        RangeQuantizer::decode(self, code)
    }
}

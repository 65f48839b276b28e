use crate::codec::FloatCodec;
use floatpack_math::bits::{f32_from_bits, f32_to_bits, INFINITY_BITS, SIGN_MASK};
use floatpack_math::FloatLayout;

/// Single-precision significand bits dropped on the way to half precision
const SHIFT: u32 = FloatLayout::HALF.significand_shift();
/// Distance between the single and half sign bits
const SHIFT_SIGN: u32 = 16;

/// 65504, the largest finite half, as single-precision bits
const F32_HALF_MAX: u32 = 0x477F_E000;
/// 2^-14, the smallest normal half, as single-precision bits
const F32_HALF_MIN_NORMAL: u32 = 0x3880_0000;
/// Smallest half NaN (0x7C01) widened to single precision
const F32_HALF_NAN: u32 = ((INFINITY_BITS >> SHIFT) + 1) << SHIFT;

// Single-precision magnitudes shifted down by SHIFT, before re-biasing
const SHIFTED_INF: u32 = INFINITY_BITS >> SHIFT;
const SHIFTED_MAX: u32 = F32_HALF_MAX >> SHIFT;
const SHIFTED_MIN_NORMAL: u32 = F32_HALF_MIN_NORMAL >> SHIFT;

const HALF_SIGN: u32 = 0x8000;
const HALF_MAX_SUBNORMAL: u32 = 0x03FF;
const HALF_MIN_NORMAL: u32 = 0x0400;

/// Re-bias that moves shifted infinity/NaN patterns onto 0x7C00 and up
const DELTA_MAX: u32 = SHIFTED_INF - SHIFTED_MAX - 1;
/// Re-bias from the single-precision exponent (127) to the half one (15)
const DELTA_MIN: u32 = SHIFTED_MIN_NORMAL - HALF_MAX_SUBNORMAL - 1;

/// 2^37 (2^23 / 2^-14): maps a half-subnormal magnitude to its count of 2^-24
/// units, pre-shifted left by SHIFT.
const SUBNORMAL_SCALE: f32 = 137_438_953_472.0;
/// 2^-24, value of the lowest half subnormal
const SUBNORMAL_UNIT: f32 = 1.0 / 16_777_216.0;

/// Encode to IEEE-754 binary16. Finite values truncate toward zero;
/// magnitudes above 65504 become infinity and every NaN becomes the
/// canonical 0x7C01 with the sign kept.
pub fn half16_encode(value: f32) -> u16 {
    let bits = f32_to_bits(value);
    let sign = bits & SIGN_MASK;
    let mut v = bits ^ sign;

    if v < F32_HALF_MIN_NORMAL {
        // A plain shift would drop the implicit bit of the result; go through
        // the multiply instead. The product is below 2^23, the cast truncates.
        v = (SUBNORMAL_SCALE * f32_from_bits(v)) as u32;
    } else if v > F32_HALF_MAX && v < INFINITY_BITS {
        v = INFINITY_BITS;
    } else if v > INFINITY_BITS {
        v = F32_HALF_NAN;
    }

    v >>= SHIFT;
    if v > SHIFTED_MAX {
        v -= DELTA_MAX;
    }
    if v > HALF_MAX_SUBNORMAL {
        v -= DELTA_MIN;
    }
    (v | (sign >> SHIFT_SIGN)) as u16
}

/// Decode IEEE-754 binary16. Exact for every non-NaN pattern.
pub fn half16_decode(code: u16) -> f32 {
    let code = code as u32;
    let sign = code & HALF_SIGN;
    let mut v = code ^ sign;

    if v > HALF_MAX_SUBNORMAL {
        v += DELTA_MIN;
    }
    if v > SHIFTED_MAX {
        v += DELTA_MAX;
    }

    let magnitude = if v < HALF_MIN_NORMAL {
        f32_to_bits(SUBNORMAL_UNIT * v as f32)
    } else {
        v << SHIFT
    };
    f32_from_bits(magnitude | (sign << SHIFT_SIGN))
}

/// [`FloatCodec`] wrapper around [`half16_encode`] / [`half16_decode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Half16Codec;

impl FloatCodec for Half16Codec {
    fn bits(&self) -> u32 {
        FloatLayout::HALF.total_bits()
    }

    fn encode(&self, value: f32) -> u32 {
        half16_encode(value) as u32
    }

    fn decode(&self, code: u32) -> f32 {
        half16_decode(code as u16)
    }
}

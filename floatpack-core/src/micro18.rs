use crate::codec::FloatCodec;
use floatpack_math::{F32Fields, FloatLayout};

// [sign] [exponent] [significand]
// [1]    [5]        [12]
const LAYOUT: FloatLayout = FloatLayout::MICRO18;

/// Encode to the 18-bit micro-float layout.
///
/// Keeps the top 12 significand bits and re-biases the exponent by 0x70.
/// No rounding and no special values: an exponent outside
/// `0x70..=0x8F` (see [`FloatLayout::f32_exponent_window`]) wraps within its
/// 5-bit field, so zero, subnormals, infinities and NaN come back as ordinary
/// (wrong) numbers. Unlike a plain shift of the wrapped exponent, the sign bit
/// is never overwritten and the result always fits in 18 bits.
pub fn microfloat18_encode(value: f32) -> u32 {
    let fields = F32Fields::split(value);
    let significand = fields.significand >> LAYOUT.significand_shift();
    let exponent = fields.exponent.wrapping_sub(LAYOUT.exponent_offset()) & LAYOUT.exponent_mask();
    (fields.sign << LAYOUT.sign_shift()) | (exponent << LAYOUT.significand_bits) | significand
}

/// Decode the low 18 bits of `code`; higher bits are ignored.
pub fn microfloat18_decode(code: u32) -> f32 {
    F32Fields {
        sign: (code >> LAYOUT.sign_shift()) & 1,
        exponent: ((code >> LAYOUT.significand_bits) & LAYOUT.exponent_mask())
            + LAYOUT.exponent_offset(),
        significand: (code & LAYOUT.significand_mask()) << LAYOUT.significand_shift(),
    }
    .join()
}

/// [`FloatCodec`] wrapper around [`microfloat18_encode`] / [`microfloat18_decode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MicroFloat18Codec;

impl FloatCodec for MicroFloat18Codec {
    fn bits(&self) -> u32 {
        LAYOUT.total_bits()
    }

    fn encode(&self, value: f32) -> u32 {
        microfloat18_encode(value)
    }

    fn decode(&self, code: u32) -> f32 {
        microfloat18_decode(code)
    }
}

/// IEEE-754 single precision: sign (1) / exponent (8, bias 127) / significand (23).
/// Exponent 0 encodes zero and subnormals, exponent 255 infinity (significand 0)
/// or NaN (significand != 0).
pub const SIGN_MASK: u32 = 0x8000_0000;
pub const EXPONENT_MASK: u32 = 0x7F80_0000;
pub const SIGNIFICAND_MASK: u32 = 0x007F_FFFF;
/// Everything but the sign bit.
pub const MAGNITUDE_MASK: u32 = !SIGN_MASK;
pub const SIGNIFICAND_BITS: u32 = 23;
pub const EXPONENT_BIAS: u32 = 127;
pub const INFINITY_BITS: u32 = EXPONENT_MASK;

/// Reinterpret the 32 bits of `value` as an unsigned integer. No numeric conversion.
#[inline]
pub fn f32_to_bits(value: f32) -> u32 {
    value.to_bits()
}

/// Reinterpret 32 bits as an `f32`. Every pattern is accepted, NaN payloads included.
#[inline]
pub fn f32_from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// The three fields of a single-precision float, each right-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct F32Fields {
    /// 0 or 1
    pub sign: u32,
    /// Biased exponent, 0..=255
    pub exponent: u32,
    /// Low 23 bits, no implicit leading one
    pub significand: u32,
}

impl F32Fields {
    /// Split a float into its fields
    #[inline]
    pub fn split(value: f32) -> Self {
        let bits = f32_to_bits(value);
        Self {
            sign: bits >> 31,
            exponent: (bits & EXPONENT_MASK) >> SIGNIFICAND_BITS,
            significand: bits & SIGNIFICAND_MASK,
        }
    }

    /// Reassemble. Out-of-range field values are masked to their width.
    #[inline]
    pub fn join(self) -> f32 {
        let bits = ((self.sign & 1) << 31)
            | ((self.exponent << SIGNIFICAND_BITS) & EXPONENT_MASK)
            | (self.significand & SIGNIFICAND_MASK);
        f32_from_bits(bits)
    }
}

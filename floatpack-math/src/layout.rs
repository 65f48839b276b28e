use crate::bits::{EXPONENT_BIAS, SIGNIFICAND_BITS};

/// Sign/exponent/significand packing of a small float format.
///
/// The sign always sits directly above the exponent, which sits directly above
/// the significand; bit 0 is the lowest significand bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatLayout {
    pub exponent_bits: u32,
    pub significand_bits: u32,
    pub exponent_bias: u32,
}

impl FloatLayout {
    /// IEEE-754 single precision
    pub const F32: Self = Self {
        exponent_bits: 8,
        significand_bits: SIGNIFICAND_BITS,
        exponent_bias: EXPONENT_BIAS,
    };

    /// IEEE-754 binary16
    pub const HALF: Self = Self {
        exponent_bits: 5,
        significand_bits: 10,
        exponent_bias: 15,
    };

    /// 18-bit micro-float: half's exponent with two extra significand bits
    pub const MICRO18: Self = Self {
        exponent_bits: 5,
        significand_bits: 12,
        exponent_bias: 15,
    };

    pub const fn total_bits(&self) -> u32 {
        1 + self.exponent_bits + self.significand_bits
    }

    pub const fn sign_shift(&self) -> u32 {
        self.exponent_bits + self.significand_bits
    }

    /// Right-aligned mask of the exponent field
    pub const fn exponent_mask(&self) -> u32 {
        (1 << self.exponent_bits) - 1
    }

    pub const fn significand_mask(&self) -> u32 {
        (1 << self.significand_bits) - 1
    }

    /// Low-order single-precision significand bits this layout drops.
    pub const fn significand_shift(&self) -> u32 {
        SIGNIFICAND_BITS - self.significand_bits
    }

    /// Subtracted from a single-precision biased exponent to get this layout's
    /// biased exponent.
    pub const fn exponent_offset(&self) -> u32 {
        EXPONENT_BIAS - self.exponent_bias
    }

    /// Range of single-precision biased exponents whose values land in a
    /// representable exponent field without wrapping.
    pub const fn f32_exponent_window(&self) -> (u32, u32) {
        let lo = self.exponent_offset();
        (lo, lo + self.exponent_mask())
    }
}

//! # floatpack-math
//!
//! Bit-level foundation for the floatpack codecs.
//!
//! This crate provides the bit-cast primitive ([`f32_to_bits`] / [`f32_from_bits`]),
//! a field view of IEEE-754 single precision ([`F32Fields`]) and [`FloatLayout`],
//! a description of the sign/exponent/significand packings the codecs target.
//!
//! **Zero external dependencies**, auditable in isolation.

pub mod bits;
pub mod layout;

pub use bits::{f32_from_bits, f32_to_bits, F32Fields};
pub use layout::FloatLayout;

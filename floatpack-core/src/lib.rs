//! # floatpack-core
//!
//! Value-by-value codecs that shrink IEEE-754 single-precision floats.
//!
//! This crate defines the [`FloatCodec`] trait and three implementations:
//! - [`Half16Codec`]: binary16 (1/5/10), with subnormals, overflow-to-infinity and NaN
//! - [`RangeQuantizer`]: clamp + dead zone + significand truncation to `9 + precision` bits
//! - [`MicroFloat18Codec`]: fixed 18-bit layout (1/5/12), no special values
//!
//! Also provides [`UnifiedCodec`] (configuration-driven dispatcher) and
//! [`CodecSpec`] (serde-friendly codec selection).

pub mod codec;
pub mod error;
pub mod half16;
pub mod micro18;
pub mod range;
pub mod unified;

pub use codec::FloatCodec;
pub use error::CodecError;
pub use half16::{half16_decode, half16_encode, Half16Codec};
pub use micro18::{microfloat18_decode, microfloat18_encode, MicroFloat18Codec};
pub use range::{RangeConfig, RangeQuantizer};
pub use unified::{CodecSpec, UnifiedCodec};

//! # floatpack
//!
//! Re-encodes `f32` values into 16, 18 or `9 + precision` bits.
//!
//! - [`floatpack_math`]: bit-cast primitive and float field layouts
//! - [`floatpack_core`]: the codecs ([`Half16Codec`], [`RangeQuantizer`], [`MicroFloat18Codec`])
//!   and [`UnifiedCodec`], which builds one of them from a serde [`CodecSpec`]
//!
//! Codecs work one value at a time; framing and packing are left to the caller.

pub use floatpack_core;
pub use floatpack_math;

pub use floatpack_core::{
    half16_decode, half16_encode, microfloat18_decode, microfloat18_encode, CodecError,
    CodecSpec, FloatCodec, Half16Codec, MicroFloat18Codec, RangeConfig, RangeQuantizer,
    UnifiedCodec,
};

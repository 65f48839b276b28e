use crate::codec::FloatCodec;
use crate::error::CodecError;
use crate::half16::Half16Codec;
use crate::micro18::MicroFloat18Codec;
use crate::range::{RangeConfig, RangeQuantizer};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Codec selector for the unified interface
///
/// - **Half16**: IEEE binary16, fixed format
/// - **Range**: configurable clamp / dead zone / precision quantizer
/// - **MicroFloat18**: fixed 1/5/12 layout
///
/// Serialized externally tagged in snake_case, e.g. `"half16"` or
/// `{"range": {"min": -1.0, "epsilon": 0.001, "max": 1.0, "precision": 8}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecSpec {
    /// 16-bit half precision
    Half16,
    /// `9 + precision` bit range quantizer
    Range(RangeConfig),
    /// 18-bit micro-float
    MicroFloat18,
}

enum Inner {
    Half16(Half16Codec),
    Range(RangeQuantizer),
    MicroFloat18(MicroFloat18Codec),
}

/// Codec built from a [`CodecSpec`], dispatching to the selected implementation.
///
/// # Example
/// ```
/// use floatpack_core::{CodecSpec, FloatCodec, RangeConfig, UnifiedCodec};
///
/// let half = UnifiedCodec::new(CodecSpec::Half16).unwrap();
/// assert_eq!(half.encode(1.0), 0x3C00);
///
/// let range = UnifiedCodec::new(CodecSpec::Range(RangeConfig::new(-65504.0, 6.103515625e-05, 65504.0, 12))).unwrap();
/// assert_eq!(range.bits(), 21);
/// assert_eq!(range.roundtrip(-724.99), -724.875);
/// ```
pub struct UnifiedCodec {
    spec: CodecSpec,
    inner: Inner,
}

impl UnifiedCodec {
    /// Build the codec; fails only for an invalid range configuration.
    pub fn new(spec: CodecSpec) -> Result<Self, CodecError> {
        let inner = Self::build(&spec)?;
        debug!("UnifiedCodec: {}", describe(&spec));
        Ok(Self { spec, inner })
    }

    fn build(spec: &CodecSpec) -> Result<Inner, CodecError> {
        Ok(match spec {
            CodecSpec::Half16 => Inner::Half16(Half16Codec),
            CodecSpec::Range(config) => Inner::Range(config.build()?),
            CodecSpec::MicroFloat18 => Inner::MicroFloat18(MicroFloat18Codec),
        })
    }

    pub fn spec(&self) -> &CodecSpec {
        &self.spec
    }

    /// Switch to a different codec. On error the current codec is kept.
    pub fn set_spec(&mut self, spec: CodecSpec) -> Result<(), CodecError> {
        self.inner = Self::build(&spec)?;
        debug!("UnifiedCodec switched to {}", describe(&spec));
        self.spec = spec;
        Ok(())
    }

    /// Human-readable summary of the current codec
    pub fn describe(&self) -> String {
        describe(&self.spec)
    }

    fn codec(&self) -> &dyn FloatCodec {
        match &self.inner {
            Inner::Half16(c) => c,
            Inner::Range(c) => c,
            Inner::MicroFloat18(c) => c,
        }
    }
}

fn describe(spec: &CodecSpec) -> String {
    match spec {
        CodecSpec::Half16 => "Half16 (1/5/10)".to_string(),
        CodecSpec::Range(c) => format!(
            "Range (min={}, eps={:.2e}, max={}, precision={})",
            c.min, c.epsilon, c.max, c.precision
        ),
        CodecSpec::MicroFloat18 => "MicroFloat18 (1/5/12)".to_string(),
    }
}

impl FloatCodec for UnifiedCodec {
    fn bits(&self) -> u32 {
        self.codec().bits()
    }

    fn encode(&self, value: f32) -> u32 {
        self.codec().encode(value)
    }

    fn decode(&self, code: u32) -> f32 {
        self.codec().decode(code)
    }
}

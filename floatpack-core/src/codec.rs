/// Per-value float codec.
///
/// Encoded words are returned right-aligned in a `u32`; only the low [`bits`](FloatCodec::bits)
/// bits are produced by `encode`. Packing them tighter is up to the caller.
///
/// Implementations hold no mutable state, so one instance can be shared across threads.
pub trait FloatCodec: Send + Sync {
    /// Width of an encoded word in bits
    fn bits(&self) -> u32;

    fn encode(&self, value: f32) -> u32;

    fn decode(&self, code: u32) -> f32;

    /// `decode(encode(value))`: the value as the receiving side will see it.
    fn roundtrip(&self, value: f32) -> f32 {
        self.decode(self.encode(value))
    }
}

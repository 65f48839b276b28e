use proptest::prelude::*;
use std::ops::RangeInclusive;

use floatpack_math::FloatLayout;
use floatpack_core::{
    half16_decode, half16_encode, microfloat18_decode, microfloat18_encode, FloatCodec,
    RangeQuantizer,
};

const HALF_MAX: f32 = 65504.0;
const HALF_MIN_NORMAL: f32 = 6.103515625e-05;

fn same_value(a: f32, b: f32) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

fn quantizer_strategy() -> impl Strategy<Value = RangeQuantizer> {
    (
        prop_oneof![Just(0.0f32), Just(-0.0f32), -1.0e6f32..-1.0e-3],
        1.0e-6f32..1.0e-2,
        1.0f32..1.0e6,
        0u8..=23,
    )
        .prop_map(|(min, epsilon, max, precision)| {
            RangeQuantizer::new(min, epsilon, max, precision).unwrap()
        })
}

/// Single-precision exponents the 18-bit layout stores without wrapping
fn micro18_exponents() -> RangeInclusive<u32> {
    let (lo, hi) = FloatLayout::MICRO18.f32_exponent_window();
    lo..=hi
}

fn negative_quantizer_strategy() -> impl Strategy<Value = RangeQuantizer> {
    (-1.0e6f32..-1.0, 1.0e-6f32..1.0e-2, 1.0f32..1.0e6, 0u8..=23).prop_map(
        |(min, epsilon, max, precision)| RangeQuantizer::new(min, epsilon, max, precision).unwrap(),
    )
}

// Property 1: a second round trip changes nothing, for every input bit pattern
proptest! {
    #[test]
    fn prop_half16_idempotent(bits in any::<u32>()) {
        let once = half16_decode(half16_encode(f32::from_bits(bits)));
        let twice = half16_decode(half16_encode(once));
        prop_assert!(same_value(once, twice), "{} vs {}", once, twice);
    }

    #[test]
    fn prop_microfloat18_idempotent(bits in any::<u32>()) {
        let once = microfloat18_decode(microfloat18_encode(f32::from_bits(bits)));
        let twice = microfloat18_decode(microfloat18_encode(once));
        prop_assert_eq!(once.to_bits(), twice.to_bits());
    }

    #[test]
    fn prop_range_idempotent(q in quantizer_strategy(), bits in any::<u32>()) {
        let once = q.decode(q.encode(f32::from_bits(bits)));
        let twice = q.decode(q.encode(once));
        prop_assert_eq!(once.to_bits(), twice.to_bits());
    }
}

// Property 2: half16 truncates toward zero with relative error below 2^-10
proptest! {
    #[test]
    fn prop_half16_error_bound(x in -HALF_MAX..HALF_MAX) {
        prop_assume!(x.abs() >= HALF_MIN_NORMAL);
        let y = half16_decode(half16_encode(x));
        prop_assert!(y.abs() <= x.abs());
        prop_assert_eq!(y.is_sign_negative(), x.is_sign_negative());
        prop_assert!((x - y).abs() <= x.abs() * 2.0f32.powi(-10), "{} -> {}", x, y);
    }

    #[test]
    fn prop_half16_nan_stays_nan(payload in 1u32..0x0080_0000, negative in any::<bool>()) {
        let sign = if negative { 0x8000_0000 } else { 0 };
        let nan = f32::from_bits(sign | 0x7F80_0000 | payload);
        let code = half16_encode(nan);
        prop_assert_eq!(code & 0x7FFF, 0x7C01);
        prop_assert!(half16_decode(code).is_nan());
    }

    #[test]
    fn prop_half16_overflow_is_infinity(x in 65520.0f32..f32::MAX) {
        prop_assert_eq!(half16_encode(x), half16_encode(f32::INFINITY));
        prop_assert_eq!(half16_encode(-x), half16_encode(f32::NEG_INFINITY));
    }
}

// Property 3: clamp is idempotent and dead-zone values encode like zero
proptest! {
    #[test]
    fn prop_clamp_idempotent(q in quantizer_strategy(), bits in any::<u32>()) {
        let once = q.clamp(f32::from_bits(bits));
        prop_assert_eq!(q.clamp(once).to_bits(), once.to_bits());
    }

    #[test]
    fn prop_dead_zone_is_zero(q in quantizer_strategy(), fraction in 0.0f32..1.0, negative in any::<bool>()) {
        let mut x = q.config().epsilon * fraction;
        if x >= q.config().epsilon {
            x = 0.0;
        }
        if negative {
            x = -x;
        }
        prop_assert_eq!(q.encode(x), q.encode(0.0));
        prop_assert_eq!(q.encode(0.0), 0);
    }

    #[test]
    fn prop_codes_fit_width(q in quantizer_strategy(), bits in any::<u32>()) {
        let code = q.encode(f32::from_bits(bits));
        prop_assert!(code <= q.max_code());
        if q.bits() < 32 {
            prop_assert!(code < 1 << q.bits());
        }
    }
}

// Property 4: order is preserved in magnitude within each sign
proptest! {
    #[test]
    fn prop_range_monotonic_positive(q in quantizer_strategy(), a in 0.0f32..1.0e6, b in 0.0f32..1.0e6) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(q.encode(lo) <= q.encode(hi));
        if q.is_lossless() && q.clamp(lo) < q.clamp(hi) {
            prop_assert!(q.encode(lo) < q.encode(hi));
        }
    }

    #[test]
    fn prop_range_monotonic_negative(q in negative_quantizer_strategy(), a in 5.0e-2f32..1.0e6, b in 5.0e-2f32..1.0e6) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(q.encode(-lo) <= q.encode(-hi));
        // Every representable negative lands above every positive
        prop_assert!(q.encode(-lo) > q.encode(q.config().max));
    }
}

// Property 5: lossy error stays within one step of the retained precision
proptest! {
    #[test]
    fn prop_range_error_bound(q in quantizer_strategy(), x in -1.0e6f32..1.0e6) {
        let clamped = q.clamp(x);
        let y = q.decode(q.encode(x));
        let step = clamped.abs() * 2.0f32.powi(-(q.precision() as i32));
        prop_assert!((clamped - y).abs() <= step, "{} -> {} (step {})", clamped, y, step);
        prop_assert_eq!(y.is_sign_negative(), clamped.is_sign_negative());
    }
}

// Property 6: micro-floats inside the exponent window with 12-bit significands are exact
proptest! {
    #[test]
    fn prop_microfloat18_exact_window(
        negative in any::<bool>(),
        exponent in micro18_exponents(),
        significand in 0u32..0x1000,
    ) {
        let bits = ((negative as u32) << 31) | (exponent << 23) | (significand << 11);
        let x = f32::from_bits(bits);
        prop_assert_eq!(microfloat18_decode(microfloat18_encode(x)).to_bits(), bits);
        prop_assert!(microfloat18_encode(x) < 1 << 18);
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};

use hex_literal::hex;
use modbus_value::{
    Bool16, Decode, Float32, Float64, Int16, Mask, NanDecoder, RegisterWidth,
    Scaled, Sentinel, Uint16, Uint32,
};

/// Records how often it is invoked and echoes the leading 16-bit word.
#[derive(Default)]
struct Counting(AtomicUsize);

impl Decode for Counting {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits16 }

    fn decode(&self, bytes: &[u8]) -> f64 {
        self.0.fetch_add(1, Ordering::SeqCst);
        Uint16.decode(bytes)
    }
}

#[test]
fn nan16_substitutes_zero() {
    let d = NanDecoder::nan16(0x8000, Int16);
    assert_eq!(d.decode(&hex!("8000")), 0.0);
    assert_eq!(d.decode(&hex!("0001")), Int16.decode(&hex!("0001")));
    assert_eq!(d.decode(&hex!("8001")), -32767.0);
}

#[test]
fn sentinel_short_circuits_inner() {
    let d = NanDecoder::nan16(0x8000, Counting::default());
    assert_eq!(d.decode(&hex!("8000")), 0.0);
    assert_eq!(d.inner().0.load(Ordering::SeqCst), 0);
    assert_eq!(d.decode(&hex!("0001")), 1.0);
    assert_eq!(d.inner().0.load(Ordering::SeqCst), 1);
}

#[test]
fn nan32_compares_leading_four_bytes() {
    let d = NanDecoder::nan32(0x7FC0_0000, Float32);
    assert_eq!(d.decode(&hex!("7FC0 0000")), 0.0);
    assert_eq!(d.decode(&hex!("4366 4000")), 230.25);

    let d = NanDecoder::nan32(0xFFFF_FFFF, Uint32);
    assert_eq!(d.decode(&hex!("FFFF FFFF")), 0.0);
    assert_eq!(d.decode(&hex!("FFFF FFFE")), 4294967294.0);
}

#[test]
fn nan64_guards_float64() {
    let nan = 0x7FF8_0000_0000_0000u64;
    let d = NanDecoder::nan64(nan, Float64);
    assert_eq!(d.decode(&nan.to_be_bytes()), 0.0);
    // a different NaN payload is not the sentinel and passes through
    assert!(d.decode(&hex!("7FF8 0000 0000 0001")).is_nan());
    assert_eq!(d.decode(&1.5f64.to_be_bytes()), 1.5);
}

#[test]
fn narrow_sentinel_on_wide_register() {
    // the sentinel covers the leading word, the inner decoder sees all 8 bytes
    let d = NanDecoder::nan16(0xFFFF, Float64);
    assert_eq!(d.decode(&hex!("FFFF 0000 0000 0000")), 0.0);
    assert_eq!(d.decode(&2.0f64.to_be_bytes()), 2.0);
}

#[test]
fn decorators_nest() {
    let d = NanDecoder::nan16(
        0xFFFF,
        NanDecoder::nan16(0x8000, Bool16::new(Mask::new(0x0001))),
    );
    assert_eq!(d.decode(&hex!("FFFF")), 0.0);
    assert_eq!(d.decode(&hex!("8000")), 0.0);
    assert_eq!(d.decode(&hex!("8001")), 1.0);
    assert_eq!(d.decode(&hex!("0002")), 0.0);
}

#[test]
fn boxed_inner_decoder() {
    let inner: Box<dyn Decode> = Box::new(Uint16);
    let d = NanDecoder::new(Sentinel::Bits16(0xFFFF), inner);
    assert_eq!(d.decode(&hex!("FFFF")), 0.0);
    assert_eq!(d.decode(&hex!("0010")), 16.0);
    assert_eq!(d.sentinel().value(), 0xFFFF);
}

#[test]
fn scaled_sentinel_stays_zero() {
    let d = Scaled::new(0.1, NanDecoder::nan16(0x8000, Int16)).unwrap();
    assert_eq!(d.decode(&hex!("8000")), 0.0);
    assert!((d.decode(&hex!("0929")) - 234.5).abs() < 1e-9);
}

#[test]
fn scale_rejects_degenerate_factors() {
    assert!(Scaled::new(0.0, Uint16).is_err());
    assert!(Scaled::new(f64::NAN, Uint16).is_err());
    assert!(Scaled::new(f64::INFINITY, Uint16).is_err());
    assert_eq!(Scaled::new(-1.0, Uint16).unwrap().decode(&hex!("0002")), -2.0);
}

#[test]
fn negative_scale_keeps_sentinel_positive_zero() {
    let d = Scaled::new(-0.1, NanDecoder::nan16(0x8000, Int16)).unwrap();
    let v = d.decode(&hex!("8000"));
    assert_eq!(v.to_bits(), 0.0f64.to_bits());
    let zero = Scaled::new(-2.0, Uint16).unwrap().decode(&hex!("0000"));
    assert_eq!(zero.to_bits(), 0);
    assert_eq!(d.decode(&hex!("0001")), -0.1);
}

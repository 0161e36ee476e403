use std::sync::Arc;

use crate::{Mask, RegisterWidth, Result};

/// A stateless transform from a big-endian register buffer to a reading.
///
/// Implementations capture all of their configuration at construction and
/// never mutate it, so a single decoder can be shared across threads.
pub trait Decode: Send + Sync {
    /// Number of leading bytes this decoder reads.
    fn width(&self) -> RegisterWidth;

    /// Decodes the leading [`Decode::width`] bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`Decode::width`]. Use
    /// [`Decode::try_decode`] when the buffer length is not already known to
    /// match the register.
    fn decode(&self, bytes: &[u8]) -> f64;

    /// Like [`Decode::decode`], but fails with
    /// [`Error::InvalidLength`](crate::Error::InvalidLength) on a short buffer.
    fn try_decode(&self, bytes: &[u8]) -> Result<f64> {
        self.width().check(bytes)?;
        Ok(self.decode(bytes))
    }
}

impl<D: Decode + ?Sized> Decode for &D {
    fn width(&self) -> RegisterWidth { (**self).width() }
    fn decode(&self, bytes: &[u8]) -> f64 { (**self).decode(bytes) }
}

impl<D: Decode + ?Sized> Decode for Box<D> {
    fn width(&self) -> RegisterWidth { (**self).width() }
    fn decode(&self, bytes: &[u8]) -> f64 { (**self).decode(bytes) }
}

impl<D: Decode + ?Sized> Decode for Arc<D> {
    fn width(&self) -> RegisterWidth { (**self).width() }
    fn decode(&self, bytes: &[u8]) -> f64 { (**self).decode(bytes) }
}

// ───────────────────────────── Primitives ───────────────────────────────────

/// Unsigned 16-bit register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uint16;

impl Decode for Uint16 {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits16 }
    fn decode(&self, bytes: &[u8]) -> f64 { f64::from(be_u16(bytes)) }
}

/// Two's-complement 16-bit register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Int16;

impl Decode for Int16 {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits16 }
    fn decode(&self, bytes: &[u8]) -> f64 { f64::from(be_u16(bytes) as i16) }
}

/// Unsigned 32-bit value spanning two registers, high word first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uint32;

impl Decode for Uint32 {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits32 }
    fn decode(&self, bytes: &[u8]) -> f64 { f64::from(be_u32(bytes)) }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Int32;

impl Decode for Int32 {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits32 }
    fn decode(&self, bytes: &[u8]) -> f64 { f64::from(be_u32(bytes) as i32) }
}

/// IEEE-754 binary32 spanning two registers, widened to `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Float32;

impl Decode for Float32 {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits32 }
    fn decode(&self, bytes: &[u8]) -> f64 {
        f64::from(f32::from_bits(be_u32(bytes)))
    }
}

/// Unsigned 64-bit value spanning four registers. Values above 2^53 lose
/// precision in the conversion to `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uint64;

impl Decode for Uint64 {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits64 }
    fn decode(&self, bytes: &[u8]) -> f64 { be_u64(bytes) as f64 }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Int64;

impl Decode for Int64 {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits64 }
    fn decode(&self, bytes: &[u8]) -> f64 { be_u64(bytes) as i64 as f64 }
}

/// IEEE-754 binary64 spanning four registers.
///
/// The bit pattern is carried over unchanged, including NaN payloads and
/// infinities. No masking or sentinel handling happens here; wrap it in a
/// [`NanDecoder`](crate::NanDecoder) for that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Float64;

impl Decode for Float64 {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits64 }
    fn decode(&self, bytes: &[u8]) -> f64 { f64::from_bits(be_u64(bytes)) }
}

/// Coerces a 16-bit register to `1.0` or `0.0`.
///
/// With an enabled mask only the selected bits are considered, which is how
/// single status flags are pulled out of a packed status word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bool16 {
    mask: Mask,
}

impl Bool16 {
    pub fn new(mask: Mask) -> Self { Self { mask } }

    pub fn mask(&self) -> Mask { self.mask }
}

impl Decode for Bool16 {
    fn width(&self) -> RegisterWidth { RegisterWidth::Bits16 }

    fn decode(&self, bytes: &[u8]) -> f64 {
        if self.mask.apply_u16(be_u16(bytes)) != 0 { 1.0 } else { 0.0 }
    }
}

// ────────────────────────────── Internals ───────────────────────────────────

pub(crate) fn be_u16(b: &[u8]) -> u16 { u16::from_be_bytes([b[0], b[1]]) }

pub(crate) fn be_u32(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
}

pub(crate) fn be_u64(b: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&b[..8]);
    u64::from_be_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_leading_bytes_only() {
        assert_eq!(be_u16(&[0x12, 0x34, 0xFF]), 0x1234);
        assert_eq!(be_u32(&[0x12, 0x34, 0x56, 0x78, 0xFF]), 0x1234_5678);
        assert_eq!(
            be_u64(&[1, 2, 3, 4, 5, 6, 7, 8, 9]),
            0x0102_0304_0506_0708
        );
    }

    #[test]
    #[should_panic]
    fn short_buffer_panics() {
        Float64.decode(&[0u8; 4]);
    }

    #[test]
    fn signed_primitives_sign_extend() {
        assert_eq!(Int16.decode(&[0xFF, 0xFE]), -2.0);
        assert_eq!(Int32.decode(&[0xFF, 0xFF, 0xFF, 0xFF]), -1.0);
        assert_eq!(Int64.decode(&[0x80, 0, 0, 0, 0, 0, 0, 0]), i64::MIN as f64);
    }
}

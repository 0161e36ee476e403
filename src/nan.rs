use crate::{
    Decode, Error, RegisterWidth, Result,
    decode::{be_u16, be_u32, be_u64},
};

/// A device's "no data" bit pattern for one register width.
///
/// This is a raw unsigned pattern compared against the register contents, not
/// an IEEE-754 NaN. Devices commonly use `0x8000`, `0xFFFF`, `0x8000_0000` and
/// similar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    Bits16(u16),
    Bits32(u32),
    Bits64(u64),
}

impl Sentinel {
    /// Builds a sentinel of the given width, rejecting values that do not fit.
    pub fn with_width(width: RegisterWidth, value: u64) -> Result<Self> {
        if value > width.max_value() {
            return Err(Error::SentinelOutOfRange { sentinel: value, width });
        }
        Ok(match width {
            RegisterWidth::Bits16 => Self::Bits16(value as u16),
            RegisterWidth::Bits32 => Self::Bits32(value as u32),
            RegisterWidth::Bits64 => Self::Bits64(value),
        })
    }

    pub fn width(self) -> RegisterWidth {
        match self {
            Self::Bits16(_) => RegisterWidth::Bits16,
            Self::Bits32(_) => RegisterWidth::Bits32,
            Self::Bits64(_) => RegisterWidth::Bits64,
        }
    }

    pub fn value(self) -> u64 {
        match self {
            Self::Bits16(v) => v as u64,
            Self::Bits32(v) => v as u64,
            Self::Bits64(v) => v,
        }
    }

    /// True if the leading bytes of `bytes` equal the sentinel.
    pub fn matches(self, bytes: &[u8]) -> bool {
        match self {
            Self::Bits16(v) => be_u16(bytes) == v,
            Self::Bits32(v) => be_u32(bytes) == v,
            Self::Bits64(v) => be_u64(bytes) == v,
        }
    }
}

/// Reports `0.0` when the register holds the sentinel, otherwise defers to the
/// wrapped decoder.
///
/// The sentinel is checked first, so the inner decoder never sees a buffer
/// that matched it. Decorators nest freely.
#[derive(Debug, Clone, PartialEq)]
pub struct NanDecoder<D> {
    sentinel: Sentinel,
    inner: D,
}

impl<D: Decode> NanDecoder<D> {
    pub fn new(sentinel: Sentinel, inner: D) -> Self {
        Self { sentinel, inner }
    }

    pub fn nan16(sentinel: u16, inner: D) -> Self {
        Self::new(Sentinel::Bits16(sentinel), inner)
    }

    pub fn nan32(sentinel: u32, inner: D) -> Self {
        Self::new(Sentinel::Bits32(sentinel), inner)
    }

    pub fn nan64(sentinel: u64, inner: D) -> Self {
        Self::new(Sentinel::Bits64(sentinel), inner)
    }

    pub fn sentinel(&self) -> Sentinel { self.sentinel }

    pub fn inner(&self) -> &D { &self.inner }

    pub fn into_inner(self) -> D { self.inner }
}

impl<D: Decode> Decode for NanDecoder<D> {
    fn width(&self) -> RegisterWidth {
        self.sentinel.width().max(self.inner.width())
    }

    fn decode(&self, bytes: &[u8]) -> f64 {
        if self.sentinel.matches(bytes) {
            return 0.0;
        }
        self.inner.decode(bytes)
    }
}

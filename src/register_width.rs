use core::fmt;

use crate::{Error, Result};

/// Width of a register value as read off the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegisterWidth {
    /// One 16-bit register, 2 octets
    Bits16,
    /// Two consecutive registers, 4 octets
    Bits32,
    /// Four consecutive registers, 8 octets
    Bits64,
}

#[allow(clippy::len_without_is_empty)]
impl RegisterWidth {
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            2 => Ok(Self::Bits16),
            4 => Ok(Self::Bits32),
            8 => Ok(Self::Bits64),
            _ => Err(Error::InvalidWidth(len)),
        }
    }

    pub fn len(self) -> usize {
        match self {
            Self::Bits16 => 2,
            Self::Bits32 => 4,
            Self::Bits64 => 8,
        }
    }

    pub fn bits(self) -> u32 { self.len() as u32 * 8 }

    /// Largest unsigned value representable at this width.
    pub fn max_value(self) -> u64 {
        match self {
            Self::Bits16 => u16::MAX as u64,
            Self::Bits32 => u32::MAX as u64,
            Self::Bits64 => u64::MAX,
        }
    }

    /// Fails with [`Error::InvalidLength`] when `bytes` cannot hold a value of
    /// this width.
    pub fn check(self, bytes: &[u8]) -> Result<()> {
        if bytes.len() < self.len() {
            return Err(Error::InvalidLength {
                expected: self.len(),
                actual: bytes.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for RegisterWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

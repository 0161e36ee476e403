use core::{fmt, str::FromStr};

use crate::{Error, Result};

/// A bit mask applied to a raw register value before interpretation.
///
/// A mask of zero is the "no mask" value: [`Mask::apply_u16`] returns its
/// input unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mask(u64);

impl Mask {
    pub const NONE: Mask = Mask(0);

    pub fn new(value: u64) -> Self { Self(value) }

    pub fn value(self) -> u64 { self.0 }

    pub fn is_enabled(self) -> bool { self.0 != 0 }

    /// Masks a 16-bit value with the low 16 bits of the mask.
    pub fn apply_u16(self, value: u16) -> u16 {
        if self.is_enabled() { value & self.0 as u16 } else { value }
    }
}

impl From<u64> for Mask {
    fn from(value: u64) -> Self { Self(value) }
}

impl FromStr for Mask {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { parse_mask(s).map(Self) }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Parses a textual mask, either a decimal literal or a `0x`-prefixed
/// sequence of hex bytes. Matching is case-insensitive.
///
/// Hex payloads are read as big-endian bytes, so `"0x00ff"` is `255` and
/// `"0xff00"` is `65280`. A payload longer than eight bytes keeps only the
/// trailing eight.
pub fn parse_mask(mask: &str) -> Result<u64> {
    let mask = mask.to_ascii_lowercase();

    if mask.starts_with("0x") {
        if mask.len() < 3 {
            return Err(Error::InvalidMask(mask));
        }
        let bytes = hex::decode(&mask[2..])?;
        return Ok(bytes
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)));
    }

    // u64's FromStr takes a leading '+', a decimal mask is digits only
    let digits = if mask.starts_with('+') { "+" } else { mask.as_str() };
    Ok(digits.parse::<u64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mask_passes_through() {
        assert_eq!(Mask::NONE.apply_u16(0xBEEF), 0xBEEF);
        assert_eq!(Mask::new(0x00F0).apply_u16(0xBEEF), 0x00E0);
    }

    #[test]
    fn wide_mask_truncates_to_register() {
        assert_eq!(Mask::new(0x1_0001).apply_u16(0xFFFF), 0x0001);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Mask::new(255).to_string(), "0xff");
    }
}

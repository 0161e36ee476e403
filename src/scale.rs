use crate::{Decode, Error, RegisterWidth, Result};

/// Multiplies the wrapped decoder's reading by a fixed factor, e.g. `0.1` for
/// a register that reports decivolts. A zero reading, including a NaN
/// sentinel substitution, stays `+0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaled<D> {
    factor: f64,
    inner: D,
}

impl<D: Decode> Scaled<D> {
    /// Fails with [`Error::InvalidScale`] for a zero or non-finite factor.
    pub fn new(factor: f64, inner: D) -> Result<Self> {
        if !factor.is_finite() || factor == 0.0 {
            return Err(Error::InvalidScale(factor));
        }
        Ok(Self { factor, inner })
    }

    pub fn factor(&self) -> f64 { self.factor }

    pub fn inner(&self) -> &D { &self.inner }
}

impl<D: Decode> Decode for Scaled<D> {
    fn width(&self) -> RegisterWidth { self.inner.width() }

    fn decode(&self, bytes: &[u8]) -> f64 {
        let value = self.inner.decode(bytes);
        // keep a zero reading positive under a negative factor
        if value == 0.0 { 0.0 } else { value * self.factor }
    }
}

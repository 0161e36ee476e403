use crate::{Encoding, RegisterWidth};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid mask: {0}")]
    InvalidMask(String),

    #[error("invalid mask: {0}")]
    InvalidMaskHex(#[from] hex::FromHexError),

    #[error("invalid decimal mask ({0})")]
    InvalidDecimalMask(#[from] std::num::ParseIntError),

    #[error("invalid register length: need {expected} bytes, got {actual} bytes")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid register width: expected 2, 4, or 8 bytes, got {0} bytes")]
    InvalidWidth(usize),

    #[error("NaN sentinel 0x{sentinel:x} does not fit a {width} register")]
    SentinelOutOfRange { sentinel: u64, width: RegisterWidth },

    #[error("mask is only supported for bool16 registers, not {0}")]
    MaskNotSupported(Encoding),

    #[error("invalid scale factor: {0}")]
    InvalidScale(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}

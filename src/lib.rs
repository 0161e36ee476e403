//! Scalar decoders for values read from Modbus registers.
//!
//! A register read yields a fixed-width, big-endian byte buffer of 2, 4, or 8
//! bytes. This crate turns such buffers into `f64` readings:
//!
//! - primitive decoders interpret the bytes as an integer, an IEEE‑754 float,
//!   or a (masked) boolean;
//! - [`NanDecoder`] substitutes `0.0` when a device reports its "not
//!   available" sentinel instead of data;
//! - [`Scaled`] applies a fixed scale factor.
//!
//! Every decoder implements [`Decode`], holds only immutable configuration,
//! and is `Send + Sync`. Decorators wrap any other [`Decode`] so they compose
//! to arbitrary depth. [`RegisterDef`] builds a composed decoder from a
//! declarative register description, validating masks and sentinels up front
//! so that malformed configuration fails before the first read.

mod decode;
pub use decode::*;
mod mask;
pub use mask::*;
mod nan;
pub use nan::*;
mod scale;
pub use scale::*;
mod reading;
pub use reading::*;
mod register;
pub use register::*;
mod register_width;
pub use register_width::*;
mod error;
pub use error::*;

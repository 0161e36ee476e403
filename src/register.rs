use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Bool16, Decode, Error, Float32, Float64, Int16, Int32, Int64, Mask,
    NanDecoder, RegisterWidth, Result, Scaled, Sentinel, Uint16, Uint32,
    Uint64, reading_name,
};

/// How the bytes of a register are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Bool16,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Float32,
    Uint64,
    Int64,
    Float64,
}

impl Encoding {
    pub fn width(self) -> RegisterWidth {
        match self {
            Self::Bool16 | Self::Uint16 | Self::Int16 => RegisterWidth::Bits16,
            Self::Uint32 | Self::Int32 | Self::Float32 => RegisterWidth::Bits32,
            Self::Uint64 | Self::Int64 | Self::Float64 => RegisterWidth::Bits64,
        }
    }

    fn primitive(self, mask: Mask) -> Box<dyn Decode> {
        match self {
            Self::Bool16 => Box::new(Bool16::new(mask)),
            Self::Uint16 => Box::new(Uint16),
            Self::Int16 => Box::new(Int16),
            Self::Uint32 => Box::new(Uint32),
            Self::Int32 => Box::new(Int32),
            Self::Float32 => Box::new(Float32),
            Self::Uint64 => Box::new(Uint64),
            Self::Int64 => Box::new(Int64),
            Self::Float64 => Box::new(Float64),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool16 => "bool16",
            Self::Uint16 => "uint16",
            Self::Int16 => "int16",
            Self::Uint32 => "uint32",
            Self::Int32 => "int32",
            Self::Float32 => "float32",
            Self::Uint64 => "uint64",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
        };
        f.write_str(name)
    }
}

fn scale_one() -> f64 { 1.0 }

/// Declarative description of one register, as found in a device model.
///
/// ```json
/// { "name": "status flag", "encoding": "bool16", "mask": "0x0004" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterDef {
    pub name: String,
    pub encoding: Encoding,
    /// Decimal or `0x` hex mask. Only `bool16` registers take one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    /// Raw bit pattern the device reports when no value is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nan: Option<u64>,
    #[serde(default = "scale_one")]
    pub scale: f64,
}

impl RegisterDef {
    pub fn new(name: impl Into<String>, encoding: Encoding) -> Self {
        Self {
            name: name.into(),
            encoding,
            mask: None,
            nan: None,
            scale: scale_one(),
        }
    }

    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    pub fn with_nan(mut self, nan: u64) -> Self {
        self.nan = Some(nan);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Validates the definition and composes its decoder.
    ///
    /// The sentinel check wraps the primitive decoder and scaling wraps the
    /// sentinel check, so a "not available" reading is `0.0` at any scale.
    pub fn build(&self) -> Result<RegisterDecoder> {
        let width = self.encoding.width();

        let mask = match &self.mask {
            None => Mask::NONE,
            Some(_) if self.encoding != Encoding::Bool16 => {
                return Err(Error::MaskNotSupported(self.encoding));
            }
            Some(text) => {
                let mask: Mask = text.parse()?;
                if !mask.is_enabled() {
                    tracing::warn!(
                        register = %self.name,
                        "mask {text:?} is zero, masking disabled"
                    );
                }
                mask
            }
        };

        let mut decoder = self.encoding.primitive(mask);
        let sentinel = match self.nan {
            Some(nan) => {
                let sentinel = Sentinel::with_width(width, nan)?;
                decoder = Box::new(NanDecoder::new(sentinel, decoder));
                Some(sentinel)
            }
            None => None,
        };
        if self.scale != 1.0 {
            decoder = Box::new(Scaled::new(self.scale, decoder)?);
        }

        tracing::debug!(
            register = %self.name,
            encoding = %self.encoding,
            mask = %mask,
            nan = ?sentinel.map(Sentinel::value),
            scale = self.scale,
            "built register decoder"
        );

        Ok(RegisterDecoder { name: reading_name(&self.name), decoder })
    }
}

/// A register's display name together with its composed decoder.
pub struct RegisterDecoder {
    name: String,
    decoder: Box<dyn Decode>,
}

impl RegisterDecoder {
    /// Display name, title-cased from the definition's raw name.
    pub fn name(&self) -> &str { &self.name }
}

impl Decode for RegisterDecoder {
    fn width(&self) -> RegisterWidth { self.decoder.width() }

    fn decode(&self, bytes: &[u8]) -> f64 { self.decoder.decode(bytes) }
}

impl fmt::Debug for RegisterDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterDecoder")
            .field("name", &self.name)
            .field("width", &self.decoder.width())
            .finish()
    }
}

//! Textual encoding of shares.

pub mod codec;
pub mod validator;

pub use codec::*;
pub use validator::*;

use std::{fmt, str::FromStr};

/// The wire format used for shares.
///
/// Both formats encode every field element into a fixed number of characters so a share is just a
/// sequence of fixed width `(x, y)` blocks, one per chunk of the secret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum ShareEncoding {
    /// URL safe base64 with padding, 44 characters per field element.
    #[default]
    Base64,

    /// Lowercase hex, 64 characters per field element.
    Hex,
}

impl ShareEncoding {
    /// The number of characters a single field element is encoded into.
    pub fn element_width(&self) -> usize {
        match self {
            ShareEncoding::Base64 => 44,
            ShareEncoding::Hex => 64,
        }
    }

    /// The number of characters an `(x, y)` pair is encoded into.
    pub fn pair_width(&self) -> usize {
        self.element_width().saturating_mul(2)
    }
}

impl fmt::Display for ShareEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareEncoding::Base64 => write!(f, "base64"),
            ShareEncoding::Hex => write!(f, "hex"),
        }
    }
}

/// An unknown share encoding name.
#[derive(Debug, thiserror::Error)]
#[error("unknown share encoding '{0}', expected 'base64' or 'hex'")]
pub struct UnknownEncoding(String);

impl FromStr for ShareEncoding {
    type Err = UnknownEncoding;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "base64" => Ok(ShareEncoding::Base64),
            "hex" => Ok(ShareEncoding::Hex),
            _ => Err(UnknownEncoding(input.to_string())),
        }
    }
}

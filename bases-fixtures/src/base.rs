//! Base identifiers for the codec family under test.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;

/// A binary-to-text encoding scheme targeted by a fixture document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Base {
    /// RFC 4648 base16, uppercase alphabet.
    Base16,
    /// RFC 4648 base32, standard alphabet with padding.
    Base32,
    /// RFC 4648 base64, standard alphabet with padding.
    Base64,
}

impl Base {
    /// All supported bases, in ascending order.
    pub const ALL: [Base; 3] = [Base::Base16, Base::Base32, Base::Base64];

    /// Returns the lowercase name used for file names and modules.
    pub fn name(&self) -> &'static str {
        match self {
            Base::Base16 => "base16",
            Base::Base32 => "base32",
            Base::Base64 => "base64",
        }
    }

    /// Returns the radix of the encoding.
    pub fn radix(&self) -> u32 {
        match self {
            Base::Base16 => 16,
            Base::Base32 => 32,
            Base::Base64 => 64,
        }
    }

    /// Number of input bytes consumed by one output group.
    ///
    /// Padding behavior changes at every multiple of this length.
    ///
    /// # Example
    ///
    /// ```
    /// use bases_fixtures::Base;
    ///
    /// assert_eq!(Base::Base64.block_size(), 3);
    /// assert_eq!(Base::Base32.block_size(), 5);
    /// ```
    pub fn block_size(&self) -> usize {
        match self {
            Base::Base16 => 1,
            Base::Base32 => 5,
            Base::Base64 => 3,
        }
    }

    /// Number of output characters produced per block.
    pub fn group_len(&self) -> usize {
        match self {
            Base::Base16 => 2,
            Base::Base32 => 8,
            Base::Base64 => 4,
        }
    }

    /// Length of the padded encoding of `len` input bytes.
    pub fn encoded_len(&self, len: usize) -> usize {
        len.div_ceil(self.block_size()) * self.group_len()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Base {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base16" | "16" | "hex" => Ok(Base::Base16),
            "base32" | "32" => Ok(Base::Base32),
            "base64" | "64" => Ok(Base::Base64),
            _ => Err(Error::UnknownBase(s.to_string())),
        }
    }
}

impl TryFrom<String> for Base {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Base> for String {
    fn from(base: Base) -> Self {
        base.name().to_string()
    }
}

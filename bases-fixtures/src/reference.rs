//! Trusted reference encoders.
//!
//! These wrap independently maintained crates and are never the codec under
//! test. Their output is assumed correct and becomes the expected value in
//! every emitted assertion.

use base64_external::{engine::general_purpose::STANDARD, Engine};

use crate::base::Base;

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;

const BASE32_ALPHABET: base32_external::Alphabet =
    base32_external::Alphabet::Rfc4648 { padding: true };

/// Encodes `data` with the reference implementation for `base`.
pub fn encode(base: Base, data: &[u8]) -> String {
    match base {
        Base::Base16 => hex_external::encode_upper(data),
        Base::Base32 => base32_external::encode(BASE32_ALPHABET, data),
        Base::Base64 => STANDARD.encode(data),
    }
}

/// Decodes `encoded` with the reference implementation for `base`.
///
/// Returns `None` if the input is not a valid encoding.
pub fn decode(base: Base, encoded: &str) -> Option<Vec<u8>> {
    match base {
        Base::Base16 => hex_external::decode(encoded).ok(),
        Base::Base32 => base32_external::decode(BASE32_ALPHABET, encoded),
        Base::Base64 => STANDARD.decode(encoded).ok(),
    }
}

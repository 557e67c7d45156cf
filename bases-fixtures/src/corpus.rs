//! Randomized corpus generation.
//!
//! A [`Corpus`] walks a [`SizeSpace`] in ascending length order and yields one
//! [`Trial`] per random draw, each paired with the reference encoding of its
//! bytes.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::base::Base;
use crate::error::{Error, Result};
use crate::reference;

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;

/// Minimum number of whole blocks a size space must span for every base.
pub const MIN_BLOCKS_CROSSED: usize = 3;

/// Lengths to exercise and the number of random draws per length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeSpace {
    /// Shortest generated sequence (0 or 1)
    pub min_length: usize,
    /// Longest generated sequence
    pub max_length: usize,
    /// Independent draws per length
    pub trials_per_length: usize,
}

impl Default for SizeSpace {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 511,
            trials_per_length: 4,
        }
    }
}

impl SizeSpace {
    /// Create a size space over `1..=max_length`.
    pub fn new(max_length: usize, trials_per_length: usize) -> Self {
        Self {
            min_length: 1,
            max_length,
            trials_per_length,
        }
    }

    /// Set the shortest generated length
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// The inclusive range of lengths.
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }

    /// Total number of trials this space produces.
    ///
    /// Returns `None` if the count does not fit in a `usize`.
    pub fn trial_count(&self) -> Option<usize> {
        if self.min_length > self.max_length {
            return Some(0);
        }
        (self.max_length - self.min_length)
            .checked_add(1)?
            .checked_mul(self.trials_per_length)
    }

    /// Total number of random bytes this space draws, if it fits in a `usize`.
    fn byte_count(&self) -> Option<usize> {
        if self.min_length > self.max_length {
            return Some(0);
        }
        let lengths = (self.max_length - self.min_length).checked_add(1)?;
        let sum = if lengths % 2 == 0 {
            (lengths / 2).checked_mul(self.min_length.checked_add(self.max_length)?)?
        } else {
            lengths.checked_mul(self.min_length.checked_add(self.max_length)? / 2)?
        };
        sum.checked_mul(self.trials_per_length)
    }

    /// Checks that the space exercises the padding logic of `base`.
    ///
    /// The range is contiguous, so it is enough that it starts at the
    /// smallest lengths and spans [`MIN_BLOCKS_CROSSED`] whole blocks.
    /// On success returns the number of trials the space produces.
    pub fn validate(&self, base: Base) -> Result<usize> {
        let invalid = |reason: String| Error::InvalidSizeSpace { base, reason };

        if self.trials_per_length == 0 {
            return Err(invalid("trials_per_length must be at least 1".into()));
        }
        if self.min_length > 1 {
            return Err(invalid(format!(
                "min_length must be 0 or 1, got {}",
                self.min_length
            )));
        }
        if self.min_length > self.max_length {
            return Err(invalid(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            )));
        }
        let required = MIN_BLOCKS_CROSSED * base.block_size();
        if self.max_length < required {
            return Err(invalid(format!(
                "max_length {} does not cross {} blocks of {} bytes (need at least {})",
                self.max_length,
                MIN_BLOCKS_CROSSED,
                base.block_size(),
                required
            )));
        }
        if self.byte_count().is_none() {
            return Err(invalid(format!(
                "{} trials over lengths {}..={} overflow the addressable size",
                self.trials_per_length, self.min_length, self.max_length
            )));
        }
        self.trial_count().ok_or_else(|| {
            invalid(format!(
                "trial count for lengths {}..={} overflows",
                self.min_length, self.max_length
            ))
        })
    }
}

/// A random byte sequence paired with its reference encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    base: Base,
    bytes: Vec<u8>,
    encoded: String,
}

impl Trial {
    /// Pair `bytes` with the reference encoding for `base`.
    pub fn new(base: Base, bytes: Vec<u8>) -> Self {
        let encoded = reference::encode(base, &bytes);
        Self {
            base,
            bytes,
            encoded,
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Checks the pairing invariants.
    ///
    /// The encoding must have the expected length, be printable ASCII, and
    /// decode back to exactly the same bytes with the reference decoder.
    pub fn verify(&self) -> Result<()> {
        let violation = |reason: String| Error::InvariantViolation {
            base: self.base,
            length: self.bytes.len(),
            reason,
        };

        let want_len = self.base.encoded_len(self.bytes.len());
        if self.encoded.len() != want_len {
            return Err(violation(format!(
                "encoded length {} (expected {})",
                self.encoded.len(),
                want_len
            )));
        }
        if let Some(c) = self.encoded.chars().find(|c| !c.is_ascii_graphic()) {
            return Err(violation(format!("non-printable character {:?} in encoding", c)));
        }
        match reference::decode(self.base, &self.encoded) {
            Some(decoded) if decoded == self.bytes => Ok(()),
            Some(_) => Err(violation(format!(
                "reference decode of \"{}\" does not match the generated bytes",
                self.encoded
            ))),
            None => Err(violation(format!(
                "reference decoder rejected \"{}\"",
                self.encoded
            ))),
        }
    }
}

/// Lazy, single-pass stream of trials for one base.
///
/// Each call to [`Iterator::next`] draws fresh bytes from the borrowed RNG,
/// so the same `Corpus` cannot be replayed.
pub struct Corpus<'a, R: Rng> {
    base: Base,
    rng: &'a mut R,
    lengths: RangeInclusive<usize>,
    trials_per_length: usize,
    current: Option<usize>,
    trial: usize,
    remaining: usize,
}

impl<'a, R: Rng> Corpus<'a, R> {
    /// Validate `space` for `base` and prepare the stream.
    pub fn new(base: Base, space: &SizeSpace, rng: &'a mut R) -> Result<Self> {
        let remaining = space.validate(base)?;

        let mut lengths = space.lengths();
        let current = lengths.next();
        Ok(Self {
            base,
            rng,
            lengths,
            trials_per_length: space.trials_per_length,
            current,
            trial: 0,
            remaining,
        })
    }

    fn draw(&mut self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        self.rng.fill(&mut bytes[..]);
        bytes
    }
}

impl<R: Rng> Iterator for Corpus<'_, R> {
    type Item = Result<Trial>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.current?;

        let trial = Trial::new(self.base, self.draw(len));

        self.trial += 1;
        self.remaining -= 1;
        if self.trial == self.trials_per_length {
            self.trial = 0;
            self.current = self.lengths.next();
            if let Some(next) = self.current.filter(|n| n % self.base.block_size() == 0) {
                debug!(base = %self.base, length = next, "crossing block boundary");
            }
        }

        Some(trial.verify().map(|()| trial))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Corpus<'_, R> {}

//! Generator configuration

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::base::Base;
use crate::corpus::SizeSpace;
use crate::emit::Framework;
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration for a generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bases to emit one fixture document for
    pub bases: BTreeSet<Base>,
    /// Lengths and trials per length
    #[serde(flatten)]
    pub size: SizeSpace,
    /// Fixed RNG seed; a fresh corpus is drawn on every run when unset
    pub seed: Option<u64>,
    /// Target test framework
    pub framework: Framework,
    /// Directory the documents are written to
    pub output_dir: PathBuf,
    /// Path of the codec under test in generated Rust tests
    pub codec_crate: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bases: BTreeSet::from([Base::Base64]),
            size: SizeSpace::default(),
            seed: None,
            framework: Framework::default(),
            output_dir: PathBuf::from("tests/generated"),
            codec_crate: "bases".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Missing keys fall back to [`Config::default`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigRead(path.to_path_buf(), e))?;
        serde_json::from_str(&content).map_err(|e| Error::ConfigParse(path.to_path_buf(), e))
    }

    /// Check the size space against every configured base.
    pub fn validate(&self) -> Result<()> {
        for base in &self.bases {
            self.size.validate(*base)?;
        }
        Ok(())
    }

    /// The randomness source for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

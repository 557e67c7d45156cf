//! Randomized fixture generator for base16/base32/base64 codec test suites.
//!
//! For every configured base, random byte sequences of every length in a
//! [`SizeSpace`] are paired with the output of a trusted reference encoder and
//! rendered into a self-contained test source file. The generated file asserts
//! that the codec under test encodes each sequence to the reference string and
//! decodes that string back to the exact same bytes.
//!
//! # Example
//!
//! ```
//! use bases_fixtures::{render, Base, Catch2Renderer, Corpus, FixtureDocument, SizeSpace};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let corpus = Corpus::new(Base::Base64, &SizeSpace::new(12, 1), &mut rng)?;
//! let doc = FixtureDocument::collect(Base::Base64, corpus)?;
//! let text = render(&doc, &Catch2Renderer)?;
//! assert!(text.contains("TEST_CASE(\"Base64 encoding\")"));
//! # Ok::<(), bases_fixtures::Error>(())
//! ```

use std::path::PathBuf;

use rand::Rng;
use tracing::info;

pub mod base;
pub mod config;
pub mod corpus;
pub mod emit;
pub mod error;
pub mod output;
pub mod reference;

pub use base::Base;
pub use config::Config;
pub use corpus::{Corpus, SizeSpace, Trial};
pub use emit::{render, Catch2Renderer, FixtureDocument, Framework, Renderer, RustTestRenderer};
pub use error::{Error, Result};

/// Generate and write one fixture document per configured base.
///
/// All configuration is checked before anything is written. Returns the
/// paths of the written documents in base order; an empty base set writes
/// nothing.
pub fn generate<R: Rng>(config: &Config, rng: &mut R) -> Result<Vec<PathBuf>> {
    config.validate()?;
    let renderer = config.framework.renderer(&config.codec_crate)?;

    let mut written = Vec::with_capacity(config.bases.len());
    for &base in &config.bases {
        let corpus = Corpus::new(base, &config.size, rng)?;
        let doc = FixtureDocument::collect(base, corpus)?;
        let text = emit::render(&doc, renderer.as_ref())?;

        let path = config.output_dir.join(renderer.file_name(base));
        output::write_atomic(&path, &text)?;
        info!(
            "Wrote {} {} trials ({} bytes) to {:?}",
            doc.len(),
            base,
            text.len(),
            path
        );
        written.push(path);
    }

    Ok(written)
}

//! Fixture documents and their rendering.
//!
//! Trials are collected into a [`FixtureDocument`] first and only turned into
//! text by a [`Renderer`] at the very end, so the same corpus can target any
//! supported test framework.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::Base;
use crate::corpus::Trial;
use crate::error::{Error, Result};

mod catch2;
mod rust;

pub use catch2::Catch2Renderer;
pub use rust::RustTestRenderer;


/// Ordered trials for one base, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureDocument {
    base: Base,
    trials: Vec<Trial>,
}

impl FixtureDocument {
    /// Create an empty document for `base`.
    pub fn new(base: Base) -> Self {
        Self {
            base,
            trials: Vec::new(),
        }
    }

    /// Drain a trial stream into a document.
    ///
    /// Stops at the first error; no document is produced in that case.
    pub fn collect<I>(base: Base, trials: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Trial>>,
    {
        let mut doc = Self::new(base);
        for trial in trials {
            doc.push(trial?)?;
        }
        Ok(doc)
    }

    /// Append a trial, which must target the document's base.
    pub fn push(&mut self, trial: Trial) -> Result<()> {
        if trial.base() != self.base {
            return Err(Error::InvariantViolation {
                base: self.base,
                length: trial.bytes().len(),
                reason: format!("{} trial pushed into a {} document", trial.base(), self.base),
            });
        }
        self.trials.push(trial);
        Ok(())
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}

/// Turns a [`FixtureDocument`] into source text for one test framework.
pub trait Renderer {
    /// File name of the document for `base`, relative to the output directory.
    fn file_name(&self, base: Base) -> String;

    /// Banner, imports and the opening of the test grouping.
    fn prologue(&self, out: &mut String, doc: &FixtureDocument) -> Result<()>;

    /// The encode and decode assertions for one trial.
    fn case(&self, out: &mut String, trial: &Trial) -> Result<()>;

    /// Closes the test grouping.
    fn epilogue(&self, out: &mut String, doc: &FixtureDocument) -> Result<()>;
}

/// Render a whole document in memory.
///
/// Output depends only on `doc`, so identical documents render to identical
/// text.
pub fn render(doc: &FixtureDocument, renderer: &dyn Renderer) -> Result<String> {
    let mut out = String::new();
    renderer.prologue(&mut out, doc)?;
    for trial in doc.trials() {
        renderer.case(&mut out, trial)?;
    }
    renderer.epilogue(&mut out, doc)?;
    Ok(out)
}

/// Target test framework.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// C++ Catch2 test case against `bases::converter`.
    #[default]
    Catch2,
    /// Rust `#[test]` function against a codec crate.
    Rust,
}

impl Framework {
    /// Build the renderer for this framework.
    ///
    /// `codec_crate` is only used by the Rust target.
    pub fn renderer(&self, codec_crate: &str) -> Result<Box<dyn Renderer>> {
        match self {
            Framework::Catch2 => Ok(Box::new(Catch2Renderer)),
            Framework::Rust => Ok(Box::new(RustTestRenderer::new(codec_crate)?)),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framework::Catch2 => f.write_str("catch2"),
            Framework::Rust => f.write_str("rust"),
        }
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catch2" | "cpp" | "c++" => Ok(Framework::Catch2),
            "rust" | "rs" => Ok(Framework::Rust),
            _ => Err(Error::UnknownFramework(s.to_string())),
        }
    }
}

/// Uppercase hex byte literals in generation order, joined by `sep`.
pub(crate) fn byte_list(bytes: &[u8], sep: &str) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{:X}", b))
        .collect::<Vec<_>>()
        .join(sep)
}

/// A double-quoted string literal valid in both C++ and Rust.
///
/// Quotes and backslashes are escaped; anything outside printable ASCII is
/// rejected rather than guessed at.
pub(crate) fn string_literal(s: &str) -> Result<String> {
    let mut lit = String::with_capacity(s.len() + 2);
    lit.push('"');
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                lit.push('\\');
                lit.push(c);
            }
            ' '..='~' => lit.push(c),
            _ => {
                return Err(Error::Render(format!(
                    "cannot render {:?} in a string literal",
                    c
                )))
            }
        }
    }
    lit.push('"');
    Ok(lit)
}

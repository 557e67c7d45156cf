//! Rust `#[test]` fixture rendering.

use std::fmt::Write;

use super::{byte_list, string_literal, FixtureDocument, Renderer};
use crate::base::Base;
use crate::corpus::Trial;
use crate::error::{Error, Result};

/// Renders one `#[test]` function per base.
///
/// The codec is expected at `<codec_crate>::<base>` and to expose
/// `encode(&[u8], usize) -> String` and `decode(&str, usize) -> Option<Vec<u8>>`.
#[derive(Debug, Clone)]
pub struct RustTestRenderer {
    codec_crate: String,
}

impl RustTestRenderer {
    pub fn new(codec_crate: &str) -> Result<Self> {
        let valid = !codec_crate.is_empty()
            && codec_crate.split("::").all(|seg| {
                let mut chars = seg.chars();
                matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            });
        if !valid {
            return Err(Error::Render(format!(
                "'{}' is not a valid Rust path",
                codec_crate
            )));
        }
        Ok(Self {
            codec_crate: codec_crate.to_string(),
        })
    }
}

impl Renderer for RustTestRenderer {
    fn file_name(&self, base: Base) -> String {
        format!("{}_fuzz.rs", base.name())
    }

    fn prologue(&self, out: &mut String, doc: &FixtureDocument) -> Result<()> {
        out.push_str("//! Generated by bases-fixtures. Do not edit; regenerate it instead.\n\n");
        out.push_str("#[test]\n");
        writeln!(out, "fn {}_encoding() {{", doc.base().name())?;
        if !doc.is_empty() {
            writeln!(
                out,
                "    use {}::{}::{{decode, encode}};\n",
                self.codec_crate,
                doc.base().name()
            )?;
        }
        Ok(())
    }

    fn case(&self, out: &mut String, trial: &Trial) -> Result<()> {
        let encoded = string_literal(trial.encoded())?;

        out.push_str("    {\n");
        writeln!(
            out,
            "        let test_data: &[u8] = &[{}];",
            byte_list(trial.bytes(), ", ")
        )?;
        writeln!(
            out,
            "        assert_eq!(encode(test_data, {}), {});",
            trial.bytes().len(),
            encoded
        )?;
        writeln!(
            out,
            "        let bytes = decode({}, {});",
            encoded,
            trial.encoded().len()
        )?;
        out.push_str("        assert_eq!(bytes.as_deref(), Some(test_data));\n");
        out.push_str("    }\n");
        Ok(())
    }

    fn epilogue(&self, out: &mut String, _doc: &FixtureDocument) -> Result<()> {
        out.push_str("}\n");
        Ok(())
    }
}

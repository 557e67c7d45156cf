//! Catch2 (C++) fixture rendering.

use std::fmt::Write;

use super::{byte_list, string_literal, FixtureDocument, Renderer};
use crate::base::Base;
use crate::corpus::Trial;
use crate::error::Result;

/// Renders one `TEST_CASE` per base against `bases::converter`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catch2Renderer;

fn converter(base: Base) -> String {
    format!("bases::converter<bases::bases::BASE{}>", base.radix())
}

impl Renderer for Catch2Renderer {
    fn file_name(&self, base: Base) -> String {
        format!("{}-fuzz.cpp", base.name())
    }

    fn prologue(&self, out: &mut String, doc: &FixtureDocument) -> Result<()> {
        out.push_str("/**\n");
        out.push_str(" * The content of this file has been automatically generated by bases-fixtures.\n");
        out.push_str(" * Do not edit; regenerate it instead.\n");
        out.push_str(" */\n");
        out.push_str("#include <bases/bases.hpp>\n");
        out.push_str("#include <cstdint>\n");
        out.push_str("#include <vector>\n");
        out.push_str("#include <catch2/catch.hpp>\n\n");
        writeln!(out, "TEST_CASE(\"Base{} encoding\")", doc.base().radix())?;
        out.push_str("{\n");
        Ok(())
    }

    fn case(&self, out: &mut String, trial: &Trial) -> Result<()> {
        let conv = converter(trial.base());
        let encoded = string_literal(trial.encoded())?;

        out.push_str("\t{\n");
        writeln!(
            out,
            "\t\tconst std::vector<std::uint8_t> TEST_DATA{{{}}};",
            byte_list(trial.bytes(), ",")
        )?;
        writeln!(
            out,
            "\t\tREQUIRE({}::encode(TEST_DATA.data(), {}) == {});",
            conv,
            trial.bytes().len(),
            encoded
        )?;
        writeln!(
            out,
            "\t\tconst auto bytes = {}::decode({}, {});",
            conv,
            encoded,
            trial.encoded().len()
        )?;
        out.push_str("\t\tREQUIRE(bytes.has_value());\n");
        out.push_str("\t\tREQUIRE(*bytes == TEST_DATA);\n");
        out.push_str("\t}\n");
        Ok(())
    }

    fn epilogue(&self, out: &mut String, _doc: &FixtureDocument) -> Result<()> {
        out.push_str("}\n");
        Ok(())
    }
}

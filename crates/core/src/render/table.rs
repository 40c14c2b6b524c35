// crates/core/src/render/table.rs
use std::io::Write;

use super::Renderer;
use crate::error::Result;
use crate::model::{CharsetRecord, RegistryStats};

/// C initializer statements against a pre-sized `charset_table` array.
///
/// The consumer must size the array for `stats.charsets` entries and
/// `stats.max_aliases + 1` alias slots; nothing here checks bounds.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    table_name: String,
}

impl TableRenderer {
    pub fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
        }
    }

    fn write_entry(&self, index: usize, record: &CharsetRecord, out: &mut dyn Write) -> Result<()> {
        let table = &self.table_name;

        writeln!(out)?;
        writeln!(out, "  /* {index}: {} */", comment_safe(&record.name))?;
        writeln!(
            out,
            "  {table}[{index}].mib_enum = {};",
            record.mib_enum_or_sentinel()
        )?;
        writeln!(out, "  {table}[{index}].name = {};", c_string(&record.name))?;
        match &record.mime_name {
            Some(mime) => writeln!(out, "  {table}[{index}].mime_name = {};", c_string(mime))?,
            None => writeln!(out, "  {table}[{index}].mime_name = NULL;")?,
        }
        for (slot, alias) in record.aliases.iter().enumerate() {
            writeln!(
                out,
                "  {table}[{index}].aliases[{slot}] = {};",
                c_string(alias.trim())
            )?;
        }
        writeln!(
            out,
            "  {table}[{index}].aliases[{}] = NULL;",
            record.aliases.len()
        )?;
        Ok(())
    }
}

/// Quote `s` as a C string literal.
fn c_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

// "*/" inside a name would close the comment early
fn comment_safe(s: &str) -> String {
    s.replace("*/", "* /")
}

impl Renderer for TableRenderer {
    fn render(
        &self,
        records: &[CharsetRecord],
        stats: &RegistryStats,
        out: &mut dyn Write,
    ) -> Result<()> {
        for (index, record) in records.iter().enumerate() {
            self.write_entry(index, record, out)?;
        }

        writeln!(out)?;
        writeln!(out, "/* {} charset names */", stats.charsets)?;
        writeln!(
            out,
            "/* {} max length of aliases (without sentinel) */",
            stats.max_aliases
        )?;
        writeln!(out, "/* {} longest charset name */", stats.max_name_len)?;
        Ok(())
    }
}

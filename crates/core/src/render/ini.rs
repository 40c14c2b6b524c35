// crates/core/src/render/ini.rs
use std::io::Write;

use chrono::{DateTime, Local};

use super::{Renderer, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::model::{CharsetRecord, RegistryStats};

/// INI configuration: a statistics header, then one `[name]` group per charset.
#[derive(Debug, Clone)]
pub struct IniRenderer {
    generated: DateTime<Local>,
    source_url: String,
}

impl IniRenderer {
    pub fn new(generated: DateTime<Local>, source_url: &str) -> Self {
        Self {
            generated,
            source_url: source_url.to_string(),
        }
    }

    fn write_header(&self, stats: &RegistryStats, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "#")?;
        writeln!(out, "# Automatically generated from the IANA charset assignments:")?;
        writeln!(out, "#   {}", self.source_url)?;
        writeln!(out, "#")?;
        writeln!(out, "# Statistics:")?;
        writeln!(out, "#   Number of charsets: {}", stats.charsets)?;
        writeln!(out, "#   Most aliases for a charset: {}", stats.max_aliases)?;
        writeln!(out, "#   Longest charset name: {}", stats.max_name_len)?;
        writeln!(
            out,
            "#   Date generated: {}",
            self.generated.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(out, "#")?;
        Ok(())
    }
}

fn write_section(record: &CharsetRecord, out: &mut dyn Write) -> Result<()> {
    let aliases = record
        .aliases
        .iter()
        .map(|a| a.trim())
        .collect::<Vec<_>>()
        .join(";");

    writeln!(out)?;
    writeln!(out, "[{}]", record.name.trim())?;
    writeln!(out, "mib_enum={}", record.mib_enum_or_sentinel())?;
    writeln!(out, "mime_name={}", record.mime_name.as_deref().unwrap_or("").trim())?;
    writeln!(out, "aliases={aliases}")?;
    Ok(())
}

impl Renderer for IniRenderer {
    fn render(
        &self,
        records: &[CharsetRecord],
        stats: &RegistryStats,
        out: &mut dyn Write,
    ) -> Result<()> {
        self.write_header(stats, out)?;
        for record in records {
            write_section(record, out)?;
        }
        Ok(())
    }
}

// crates/core/src/render/json.rs
use std::io::Write;

use chrono::{DateTime, Local};
use serde::Serialize;

use super::Renderer;
use crate::error::Result;
use crate::model::{CharsetRecord, RegistryStats};

#[derive(Debug, Clone)]
pub struct JsonRenderer {
    generated: DateTime<Local>,
    source_url: String,
}

impl JsonRenderer {
    pub fn new(generated: DateTime<Local>, source_url: &str) -> Self {
        Self {
            generated,
            source_url: source_url.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    source: &'a str,
    generated: String,
    stats: &'a RegistryStats,
    charsets: &'a [CharsetRecord],
}

impl Renderer for JsonRenderer {
    fn render(
        &self,
        records: &[CharsetRecord],
        stats: &RegistryStats,
        out: &mut dyn Write,
    ) -> Result<()> {
        let output = JsonOutput {
            source: &self.source_url,
            generated: self.generated.to_rfc3339(),
            stats,
            charsets: records,
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        Ok(())
    }
}

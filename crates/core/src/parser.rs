// crates/core/src/parser.rs
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::PREFERRED_MIME_MARKER;
use crate::error::{RegistryError, Result};
use crate::model::{CharsetRecord, Registry, RegistryStats};

const NAME_PREFIX: &str = "Name:";
const MIB_ENUM_PREFIX: &str = "MIBenum:";
const ALIAS_PREFIX: &str = "Alias:";

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Name:\s+(.*?)\s*(\(.*?\))?\s*(\[.*?\])?\s*$").unwrap())
}

fn alias_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Alias:\s*([^(]+)").unwrap())
}

/// Line-by-line parse state.
///
/// A record is open from its `Name:` line until the next `Name:` line or
/// [`finish`](Self::finish); statistics are folded in as each record closes.
#[derive(Debug, Default)]
pub struct RegistryParser {
    records: Vec<CharsetRecord>,
    current: Option<CharsetRecord>,
    stats: RegistryStats,
    line_no: usize,
}

impl RegistryParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its terminator).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MalformedLine`] for a `Name:` line without a
    /// name or a `MIBenum:` line that is not a non-negative integer.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;

        if line.starts_with(NAME_PREFIX) {
            self.start_record(line)
        } else if line.starts_with(MIB_ENUM_PREFIX) {
            self.set_mib_enum(line)
        } else if line.starts_with(ALIAS_PREFIX) {
            self.add_alias(line);
            Ok(())
        } else {
            Ok(())
        }
    }

    /// Close the open record and return the registry.
    pub fn finish(mut self) -> Registry {
        self.close_current();
        log::debug!(
            "parsed {} charsets (max aliases {}, longest name {})",
            self.stats.charsets,
            self.stats.max_aliases,
            self.stats.max_name_len
        );
        Registry::from_parts(self.records, self.stats)
    }

    fn close_current(&mut self) {
        if let Some(record) = self.current.take() {
            self.stats.observe(&record);
            self.records.push(record);
        }
    }

    fn start_record(&mut self, line: &str) -> Result<()> {
        let trimmed = line.trim();
        let name = name_re()
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| RegistryError::malformed(self.line_no, line, "missing charset name"))?;

        self.close_current();

        let mut record = CharsetRecord::new(name);
        if trimmed.contains(PREFERRED_MIME_MARKER) {
            record.mime_name = Some(record.name.clone());
        }
        self.current = Some(record);
        Ok(())
    }

    fn set_mib_enum(&mut self, line: &str) -> Result<()> {
        let line_no = self.line_no;
        let Some(record) = self.current.as_mut() else {
            log::debug!("line {line_no}: MIBenum before any Name, skipped");
            return Ok(());
        };

        let value = line.split(':').nth(1).unwrap_or_default().trim();
        let mib_enum = value.parse::<u32>().map_err(|e| {
            RegistryError::malformed(line_no, line, format!("invalid MIBenum '{value}': {e}"))
        })?;
        record.mib_enum = Some(mib_enum);
        Ok(())
    }

    fn add_alias(&mut self, line: &str) {
        let line_no = self.line_no;
        let Some(record) = self.current.as_mut() else {
            log::debug!("line {line_no}: Alias before any Name, skipped");
            return;
        };

        let trimmed = line.trim();
        let Some(alias) = alias_re()
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
        else {
            return;
        };
        if alias.is_empty() || alias == "None" {
            return;
        }

        record.push_alias(alias);
        if trimmed.contains(PREFERRED_MIME_MARKER) {
            record.mime_name = Some(alias.to_string());
        }
    }
}

/// Parse registry text held in memory.
///
/// # Errors
///
/// Returns [`RegistryError::MalformedLine`] on the first unparseable line.
pub fn parse_str(text: &str) -> Result<Registry> {
    let mut parser = RegistryParser::new();
    for line in text.lines() {
        parser.feed_line(line)?;
    }
    Ok(parser.finish())
}

/// Read all of `reader` and parse it.
///
/// Invalid UTF-8 is replaced rather than rejected; the registry is ASCII in
/// practice.
///
/// # Errors
///
/// Returns an I/O error if reading fails, or a parse error.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Registry> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_str(&String::from_utf8_lossy(&buf))
}

/// Read the registry file at `path` and parse it.
///
/// # Errors
///
/// Returns [`RegistryError::FileRead`] if the file cannot be read, or a parse error.
pub fn parse_file(path: &Path) -> Result<Registry> {
    let buf = std::fs::read(path).map_err(|e| RegistryError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_str(&String::from_utf8_lossy(&buf))
}

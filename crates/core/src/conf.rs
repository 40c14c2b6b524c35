// crates/core/src/conf.rs
//! Loader for the INI configuration written by [`IniRenderer`](crate::render::IniRenderer).
//!
//! Each `[group]` becomes one record. A group that appears twice is merged into
//! the first occurrence, later keys winning. Unknown keys are ignored.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{RegistryError, Result};
use crate::model::{CharsetRecord, Registry};

/// Parse generated INI text back into a registry.
///
/// # Errors
///
/// Returns [`RegistryError::MalformedLine`] for a key outside any group, an
/// empty group name, or a line that is neither a group, a `key=value` pair, a
/// comment nor blank.
pub fn load_str(text: &str) -> Result<Registry> {
    let mut records: Vec<CharsetRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current: Option<usize> = None;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(group) = line.strip_prefix('[') {
            let name = group
                .strip_suffix(']')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or_else(|| RegistryError::malformed(line_no, raw, "invalid group header"))?;
            let slot = *index.entry(name.to_string()).or_insert_with(|| {
                records.push(CharsetRecord::new(name));
                records.len() - 1
            });
            current = Some(slot);
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| RegistryError::malformed(line_no, raw, "expected key=value"))?;
        let record = current
            .map(|slot| &mut records[slot])
            .ok_or_else(|| RegistryError::malformed(line_no, raw, "key outside of any group"))?;
        apply_key(record, key.trim(), value.trim());
    }

    log::debug!("loaded {} charsets from conf", records.len());
    Ok(Registry::from_records(records))
}

fn apply_key(record: &mut CharsetRecord, key: &str, value: &str) {
    match key {
        "mib_enum" => {
            record.mib_enum = value.parse::<u32>().ok();
        }
        "mime_name" => {
            record.mime_name = (!value.is_empty()).then(|| value.to_string());
        }
        "aliases" => {
            record.aliases.clear();
            for alias in value.split(';') {
                record.push_alias(alias);
            }
        }
        other => log::debug!("ignoring unknown key '{other}' in [{}]", record.name),
    }
}

/// Read and parse the INI file at `path`.
///
/// # Errors
///
/// Returns [`RegistryError::FileRead`] if the file cannot be read, or a parse error.
pub fn load_file(path: &Path) -> Result<Registry> {
    let text = std::fs::read_to_string(path).map_err(|e| RegistryError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_str(&text)
}

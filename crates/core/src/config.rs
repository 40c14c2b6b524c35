// crates/core/src/config.rs
use crate::DEFAULT_SOURCE_URL;
use crate::error::{RegistryError, Result};
use crate::options::{InputKind, OutputFormat};
use chrono::{DateTime, Local};
use derive_builder::Builder;
use std::path::{Path, PathBuf};

/// Registry location used when no input path is given.
pub const DEFAULT_INPUT_PATH: &str = "data/iana-charsets.txt";

/// Array identifier used by the table renderer unless overridden.
pub const DEFAULT_TABLE_NAME: &str = "charset_table";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    pub input: PathBuf,
    #[builder(default)]
    pub input_kind: InputKind,
    #[builder(default)]
    pub format: OutputFormat,

    /// Stamped into the INI header and the JSON document.
    #[builder(default = "Local::now()")]
    pub generated: DateTime<Local>,
    #[builder(default = "DEFAULT_TABLE_NAME.to_string()")]
    pub table_name: String,
    #[builder(default = "DEFAULT_SOURCE_URL.to_string()")]
    pub source_url: String,

    #[builder(default)]
    pub lookup: Option<String>,
    /// Detect the charset of this file instead of rendering the registry.
    #[builder(default)]
    pub detect: Option<PathBuf>,
}

impl ConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(name) = &self.table_name
            && !is_c_identifier(name)
        {
            return Err(format!("table name '{name}' is not a valid C identifier"));
        }
        if let Some(Some(lookup)) = &self.lookup
            && lookup.trim().is_empty()
        {
            return Err("lookup name must not be empty".to_string());
        }
        if matches!(self.lookup, Some(Some(_))) && matches!(self.detect, Some(Some(_))) {
            return Err("lookup and detect cannot be combined".to_string());
        }
        Ok(())
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Resolve the input path: the explicit one if given, else [`DEFAULT_INPUT_PATH`]
/// when it exists.
///
/// # Errors
///
/// Returns [`RegistryError::Config`] when no path is given and the default is missing.
pub fn resolve_input(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_input_with_default(explicit, Path::new(DEFAULT_INPUT_PATH))
}

fn resolve_input_with_default(explicit: Option<PathBuf>, default: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None if default.is_file() => {
            log::debug!("no input given, using {}", default.display());
            Ok(default.to_path_buf())
        }
        None => Err(RegistryError::Config(format!(
            "no data file specified and default '{}' does not exist",
            default.display()
        ))),
    }
}

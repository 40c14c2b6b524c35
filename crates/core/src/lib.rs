// crates/core/src/lib.rs
//! Parsing and rendering of the IANA "character-sets" registry.
//!
//! The registry text is read into a [`Registry`](model::Registry) by
//! [`parser::parse_str`], then written out by one of the
//! [`Renderer`](render::Renderer) implementations.

pub mod config;
pub mod conf;
pub mod detect;
pub mod error;
pub mod model;
pub mod options;
pub mod parser;
pub mod render;

use std::io::Write;

use crate::config::Config;
use crate::error::{RegistryError, Result};
use crate::model::Registry;
use crate::options::{InputKind, OutputFormat};

/// Marker IANA appends to the name designated for MIME headers.
pub const PREFERRED_MIME_MARKER: &str = "(preferred MIME name)";

/// Where the registry text is published.
pub const DEFAULT_SOURCE_URL: &str = "http://www.iana.org/assignments/character-sets";

/// Load the configured input, according to its kind.
///
/// # Errors
///
/// Returns an error if the input cannot be read or contains a malformed line.
pub fn load(config: &Config) -> Result<Registry> {
    match config.input_kind {
        InputKind::Registry => parser::parse_file(&config.input),
        InputKind::Conf => conf::load_file(&config.input),
    }
}

/// Load the input and render it to `out` in the configured format.
///
/// When `config.lookup` is set only the matching record is rendered; the
/// statistics then describe that single record. When `config.detect` is set
/// the charset detected for that file is written instead.
///
/// # Errors
///
/// Returns an error on read/parse failures, a lookup miss or a write failure.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<()> {
    let registry = load(config)?;
    log::debug!(
        "loaded {} charsets from {}",
        registry.stats().charsets,
        config.input.display()
    );

    if let Some(target) = &config.detect {
        let detection = detect::detect_file(&registry, target)?;
        if config.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, &detection)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", detection.charset)?;
        }
        out.flush()?;
        return Ok(());
    }

    let registry = match &config.lookup {
        Some(name) => {
            let record = registry
                .lookup(name)
                .ok_or_else(|| RegistryError::NotFound(name.clone()))?;
            Registry::from_records(vec![record.clone()])
        }
        None => registry,
    };

    let renderer = render::renderer_for(config);
    renderer.render(registry.records(), registry.stats(), out)?;
    out.flush()?;
    Ok(())
}

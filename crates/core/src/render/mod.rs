// crates/core/src/render/mod.rs
//! Output renderers.
//!
//! Every renderer consumes the same parsed records and statistics; the
//! configured [`OutputFormat`] picks one via [`renderer_for`].

mod ini;
mod json;
mod table;

pub use ini::IniRenderer;
pub use json::JsonRenderer;
pub use table::TableRenderer;

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::model::{CharsetRecord, RegistryStats};
use crate::options::OutputFormat;

/// Timestamp layout used in generated headers.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

pub trait Renderer {
    /// Write `records` to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    fn render(
        &self,
        records: &[CharsetRecord],
        stats: &RegistryStats,
        out: &mut dyn Write,
    ) -> Result<()>;
}

pub fn renderer_for(config: &Config) -> Box<dyn Renderer> {
    match config.format {
        OutputFormat::Ini => Box::new(IniRenderer::new(config.generated, &config.source_url)),
        OutputFormat::Table => Box::new(TableRenderer::new(&config.table_name)),
        OutputFormat::Json => Box::new(JsonRenderer::new(config.generated, &config.source_url)),
    }
}

/// Render into a `String`, mostly for tests and callers that post-process output.
///
/// # Errors
///
/// Returns an error if the renderer fails.
pub fn render_to_string(
    renderer: &dyn Renderer,
    records: &[CharsetRecord],
    stats: &RegistryStats,
) -> Result<String> {
    let mut buf = Vec::new();
    renderer.render(records, stats, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

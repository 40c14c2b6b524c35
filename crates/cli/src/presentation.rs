// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use std::io::{BufWriter, Write};

/// Render the configured input to stdout.
///
/// # Errors
///
/// Returns an error if loading, rendering or writing fails. Output already
/// written stays on stdout.
pub fn emit(config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emit_to(config, &mut out)
}

/// Same as [`emit`] but into any writer.
///
/// # Errors
///
/// See [`emit`].
pub fn emit_to(config: &Config, out: &mut dyn Write) -> Result<()> {
    charset_registry_core::run(config, out)?;
    Ok(())
}

/// Install the stderr logger. `RUST_LOG` takes precedence over `verbose`.
///
/// # Panics
///
/// Panics if a logger is already installed; call once from `main`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use charset_registry_core::config::{Config, ConfigBuilder};
use charset_registry_core::config::resolve_input;
use charset_registry_core::options::{self as core_options, InputKind};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let input = resolve_input(args.input)?;
        let input_kind = if args.from_conf {
            InputKind::Conf
        } else {
            InputKind::Registry
        };
        let format: core_options::OutputFormat = args.format.into();

        let mut builder = ConfigBuilder::default();
        builder
            .input(input)
            .input_kind(input_kind)
            .format(format)
            .table_name(args.table_name)
            .source_url(args.source_url)
            .lookup(args.lookup)
            .detect(args.detect);
        if let Some(stamp) = args.timestamp {
            builder.generated(stamp.0);
        }
        Ok(builder.build()?)
    }
}

impl From<options::OutputFormat> for core_options::OutputFormat {
    fn from(format: options::OutputFormat) -> Self {
        match format {
            options::OutputFormat::Ini => Self::Ini,
            options::OutputFormat::Table => Self::Table,
            options::OutputFormat::Json => Self::Json,
        }
    }
}

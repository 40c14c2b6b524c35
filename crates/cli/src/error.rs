// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] charset_registry_core::error::RegistryError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] charset_registry_core::config::ConfigBuilderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// INI-style configuration file
    #[default]
    Ini,
    /// Indexed assignments against a fixed-size C array
    Table,
    Json,
}

/// What the input file contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// IANA `character-sets` registry text
    #[default]
    Registry,
    /// INI file previously generated with [`OutputFormat::Ini`]
    Conf,
}

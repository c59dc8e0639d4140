//! Output configuration types

use clap::ValueEnum;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented tree, optionally colored
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn colored() -> Self {
        Self { use_color: true }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }
}

//! Tree formatting and display
//!
//! This module turns a `FileNode` tree into one of the supported formats:
//! - Indented text, optionally colored
//! - JSON
//! - YAML
//!
//! # Module Structure
//!
//! - `config` - Output format and configuration types
//! - `utils` - Indentation, styled lines and error reporting
//! - `text` - Indented text formatter
//! - `json` - JSON output
//! - `yaml` - YAML output

mod config;
mod json;
mod text;
mod utils;
mod yaml;

use crate::error::RenderError;
use crate::node::FileNode;

// Re-export public types and functions
pub use config::{OutputConfig, OutputFormat};
pub use json::{print_json, to_json};
pub use text::TextFormatter;
pub use utils::{indent, print_error, write_styled};
pub use yaml::{print_yaml, to_yaml};

/// Render a tree into a string in the requested format.
pub fn render(
    root: &FileNode,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(TextFormatter::new(config.clone()).format(root)),
        OutputFormat::Json => to_json(root).map(|json| json + "\n"),
        OutputFormat::Yaml => to_yaml(root),
    }
}

/// Print a tree to stdout in the requested format.
pub fn print_tree(
    root: &FileNode,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Text => TextFormatter::new(config.clone()).print(root)?,
        OutputFormat::Json => print_json(root)?,
        OutputFormat::Yaml => print_yaml(root)?,
    }
    Ok(())
}

//! YAML output formatting

use std::io::{self, Write};

use crate::error::RenderError;
use crate::node::FileNode;

pub fn to_yaml(node: &FileNode) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(node)?)
}

/// Print tree node as a YAML document to stdout.
pub fn print_yaml(node: &FileNode) -> Result<(), RenderError> {
    let yaml = to_yaml(node)?;
    // serde_yaml already terminates the document with a newline
    write!(io::stdout().lock(), "{}", yaml)?;
    Ok(())
}

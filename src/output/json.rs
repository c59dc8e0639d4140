//! JSON output formatting

use std::io::{self, Write};

use crate::error::RenderError;
use crate::node::FileNode;

/// Serialize a tree as pretty-printed JSON.
pub fn to_json(node: &FileNode) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &FileNode) -> Result<(), RenderError> {
    let json = to_json(node)?;
    writeln!(io::stdout().lock(), "{}", json)?;
    Ok(())
}

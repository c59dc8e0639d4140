//! Filelister - list a directory tree with file metadata as text, JSON or YAML

pub mod error;
pub mod node;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{RenderError, ScanError};
pub use node::FileNode;
pub use output::{OutputConfig, OutputFormat, TextFormatter, print_error, print_tree, render};
pub use stats::{ScanStats, print_stats};
pub use tree::{Scan, ScanConfig, TreeBuilder};

//! Error types for scanning and rendering

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while building the file tree.
///
/// Only [`ScanError::Root`] aborts a scan. The other variants are collected
/// in [`crate::ScanStats::errors`] while the walk carries on.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Couldn't stat {}: {source}", .path.display())]
    Root { path: PathBuf, source: io::Error },

    #[error("Error reading directory {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("Couldn't read entry {}: {source}", .path.display())]
    Entry { path: PathBuf, source: io::Error },

    #[error("Couldn't read symlink {}: {source}", .path.display())]
    ReadLink { path: PathBuf, source: io::Error },
}

impl ScanError {
    /// Path the failed operation was applied to.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::Root { path, .. }
            | ScanError::ReadDir { path, .. }
            | ScanError::Entry { path, .. }
            | ScanError::ReadLink { path, .. } => path,
        }
    }
}

/// Errors raised while rendering a tree.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Couldn't encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to output YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Couldn't write output: {0}")]
    Io(#[from] io::Error),
}

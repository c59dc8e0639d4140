//! TreeBuilder - builds the full file tree in memory

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ScanError;
use crate::node::{FileNode, entry_name};
use crate::stats::ScanStats;

use super::config::ScanConfig;

/// Result of a completed scan.
#[derive(Debug)]
pub struct Scan {
    pub root: FileNode,
    pub stats: ScanStats,
}

/// Depth-first tree builder.
///
/// Entries are classified without following symlinks, so a link to a
/// directory is recorded as a link leaf and never descended into.
pub struct TreeBuilder {
    config: ScanConfig,
}

impl TreeBuilder {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Build the tree rooted at `root`.
    ///
    /// Failing to read the root's own metadata is the only fatal error.
    /// Everything below the root is best effort and ends up in
    /// `Scan::stats.errors`.
    pub fn build(&self, root: &Path) -> Result<Scan, ScanError> {
        let meta = fs::metadata(root).map_err(|source| ScanError::Root {
            path: root.to_path_buf(),
            source,
        })?;

        let mut node = FileNode::from_metadata(entry_name(root), &meta, None);
        let stats = if node.is_dir {
            self.expand(root, &mut node)
        } else {
            ScanStats::new()
        };

        Ok(Scan { root: node, stats })
    }

    /// List `path` into `parent.children`, returning the subtree's stats.
    fn expand(&self, path: &Path, parent: &mut FileNode) -> ScanStats {
        let mut stats = ScanStats::new();

        let entries = match read_entries(path, &mut stats) {
            Some(entries) => entries,
            None => return stats,
        };
        debug!(path = %path.display(), entries = entries.len(), "expanding directory");

        self.append_entries(entries, parent, &mut stats);
        stats
    }

    /// Turn listed entries into children of `parent`, expanding directories
    /// when recursion is on.
    fn append_entries(
        &self,
        entries: Vec<ListedEntry>,
        parent: &mut FileNode,
        stats: &mut ScanStats,
    ) {
        for ListedEntry { path, name, meta } in entries {
            if meta.is_dir() && self.config.recursive {
                let mut child = FileNode::from_metadata(name, &meta, None);
                stats.merge(self.expand(&path, &mut child));
                stats.record_directory();
                parent.children.push(child);
            } else {
                let links_to = if meta.file_type().is_symlink() {
                    resolve_link(&path, stats)
                } else {
                    None
                };
                parent
                    .children
                    .push(FileNode::from_metadata(name, &meta, links_to));
                stats.record_file();
            }
        }
    }
}

/// A directory entry with the metadata read while listing.
struct ListedEntry {
    path: PathBuf,
    name: String,
    meta: Metadata,
}

/// Drain a directory listing, metadata included, so the handle is closed
/// before recursing. Returns `None` when the directory itself cannot be
/// opened; entries whose metadata cannot be read are skipped.
fn read_entries(path: &Path, stats: &mut ScanStats) -> Option<Vec<ListedEntry>> {
    let read_dir = match fs::read_dir(path) {
        Ok(r) => r,
        Err(source) => {
            record(
                stats,
                ScanError::ReadDir {
                    path: path.to_path_buf(),
                    source,
                },
            );
            return None;
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(source) => {
                record(
                    stats,
                    ScanError::Entry {
                        path: path.to_path_buf(),
                        source,
                    },
                );
                continue;
            }
        };

        let entry_path = entry.path();
        match entry.metadata() {
            Ok(meta) => entries.push(ListedEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry_path,
                meta,
            }),
            Err(source) => record(
                stats,
                ScanError::Entry {
                    path: entry_path,
                    source,
                },
            ),
        }
    }
    Some(entries)
}

fn resolve_link(path: &Path, stats: &mut ScanStats) -> Option<String> {
    match fs::read_link(path) {
        Ok(target) => Some(target.to_string_lossy().to_string()),
        Err(source) => {
            record(
                stats,
                ScanError::ReadLink {
                    path: path.to_path_buf(),
                    source,
                },
            );
            None
        }
    }
}

fn record(stats: &mut ScanStats, error: ScanError) {
    warn!(path = %error.path().display(), "{}", error);
    stats.record_error(error);
}

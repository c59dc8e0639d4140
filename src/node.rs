//! File metadata record and the tree built from it

use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One filesystem entry plus, for expanded directories, its children.
///
/// Field names serialize in PascalCase (`Name`, `Size`, `Mode`, ...) and
/// `Children` is left out entirely for leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileNode {
    pub name: String,
    pub size: u64,
    pub mode: u32,
    pub modified_time: DateTime<Utc>,
    pub is_link: bool,
    pub links_to: String,
    pub is_dir: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Build a childless node from metadata read once from the filesystem.
    ///
    /// `links_to` is only kept when the metadata describes a symlink.
    pub fn from_metadata(name: String, meta: &Metadata, links_to: Option<String>) -> Self {
        let is_link = meta.file_type().is_symlink();
        let is_dir = meta.is_dir();
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        Self {
            name,
            size: if is_dir { 0 } else { meta.len() },
            mode: mode_bits(meta),
            modified_time: DateTime::<Utc>::from(modified),
            is_link,
            links_to: if is_link {
                links_to.unwrap_or_default()
            } else {
                String::new()
            },
            is_dir,
            children: Vec::new(),
        }
    }

    /// True for nodes that were not expanded: files, links and directories
    /// listed without recursion.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes below this one, not counting itself.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&FileNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Base name of a path, falling back to the path as written for `/`, `.`
/// and similar paths without a final component.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &Metadata) -> u32 {
    // Synthesize unix-style bits so output stays comparable across platforms.
    const S_IFDIR: u32 = 0o040000;
    const S_IFREG: u32 = 0o100000;
    const S_IFLNK: u32 = 0o120000;

    let kind = if meta.file_type().is_symlink() {
        S_IFLNK
    } else if meta.is_dir() {
        S_IFDIR
    } else {
        S_IFREG
    };
    let perms = if meta.permissions().readonly() {
        0o444
    } else {
        0o644
    };
    kind | perms
}

//! Scan statistics accumulated during tree traversal
//!
//! Each level of the walk returns the statistics of its own subtree and the
//! caller merges them, so a scan never touches shared counters.

use std::io::{self, Write};

use crate::error::ScanError;

/// Counters and non-fatal errors collected while building a tree.
#[derive(Debug, Default)]
pub struct ScanStats {
    /// Leaf entries appended to the tree (files, links, unexpanded dirs)
    pub files_listed: usize,
    /// Subdirectories that were expanded
    pub paths_traversed: usize,
    /// Recoverable errors, in the order they happened
    pub errors: Vec<ScanError>,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a leaf entry.
    pub fn record_file(&mut self) {
        self.files_listed += 1;
    }

    /// Record an expanded subdirectory.
    pub fn record_directory(&mut self) {
        self.paths_traversed += 1;
    }

    pub fn record_error(&mut self, error: ScanError) {
        self.errors.push(error);
    }

    /// Fold the statistics of a subtree into these.
    pub fn merge(&mut self, other: ScanStats) {
        self.files_listed += other.files_listed;
        self.paths_traversed += other.paths_traversed;
        self.errors.extend(other.errors);
    }

    /// The closing summary printed after every run.
    pub fn summary(&self) -> String {
        format!(
            "Total files: {}\nTotal Directories: {}\n",
            self.files_listed, self.paths_traversed
        )
    }
}

/// Print the closing summary to stdout.
pub fn print_stats(stats: &ScanStats) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(stats.summary().as_bytes())?;
    stdout.flush()
}

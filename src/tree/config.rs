//! Configuration types for the tree builder

/// Configuration for tree building behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanConfig {
    /// Expand subdirectories instead of listing them as leaves
    pub recursive: bool,
}

impl ScanConfig {
    pub fn recursive() -> Self {
        Self { recursive: true }
    }
}

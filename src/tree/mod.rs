//! Directory tree building
//!
//! `TreeBuilder` walks a root path depth-first and returns the full
//! `FileNode` tree together with the `ScanStats` gathered on the way.

mod builder;
mod config;

pub use builder::{Scan, TreeBuilder};
pub use config::ScanConfig;

//! Indented text formatter
//!
//! This module provides `TextFormatter`, which prints the children of a
//! `FileNode` tree one per line, two spaces of indentation per level.
//! Directories end in `/`, symlinks end in `* (<target>)`.

use std::io::{self, Write};

use termcolor::{Ansi, Color, ColorChoice, NoColor, StandardStream, WriteColor};

use crate::node::FileNode;

use super::config::OutputConfig;
use super::utils::{indent, write_styled};

const DIR_COLOR: Color = Color::Blue;
const LINK_COLOR: Color = Color::Yellow;

/// Formatter for the text tree.
pub struct TextFormatter {
    config: OutputConfig,
}

impl TextFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree into a string, with ANSI escapes when color is on.
    pub fn format(&self, root: &FileNode) -> String {
        let bytes = if self.config.use_color {
            let mut out = Ansi::new(Vec::new());
            self.write_children(root, &mut out, 0)
                .map(|_| out.into_inner())
        } else {
            let mut out = NoColor::new(Vec::new());
            self.write_children(root, &mut out, 0)
                .map(|_| out.into_inner())
        };
        // Writing into a Vec cannot fail
        String::from_utf8_lossy(&bytes.unwrap_or_default()).into_owned()
    }

    pub fn print(&self, root: &FileNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_children(root, &mut stdout, 0)?;
        stdout.flush()
    }

    /// Write every child of `node` at `depth`. The node itself is not written.
    pub fn write_children<W: WriteColor>(
        &self,
        node: &FileNode,
        out: &mut W,
        depth: usize,
    ) -> io::Result<()> {
        for child in &node.children {
            self.write_node(child, out, depth)?;
        }
        Ok(())
    }

    fn write_node<W: WriteColor>(
        &self,
        node: &FileNode,
        out: &mut W,
        depth: usize,
    ) -> io::Result<()> {
        let pad = indent(depth);
        if node.is_dir {
            write_styled(out, &format!("{}{}/", pad, node.name), Some(DIR_COLOR))?;
            self.write_children(node, out, depth + 1)
        } else if node.is_link {
            write_styled(
                out,
                &format!("{}{}* ({})", pad, node.name, node.links_to),
                Some(LINK_COLOR),
            )
        } else {
            write_styled(out, &format!("{}{}", pad, node.name), None)
        }
    }
}

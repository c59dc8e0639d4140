//! Shared utility functions for output formatting

use std::fmt::Display;
use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Leading whitespace for a tree level: two spaces per level.
pub fn indent(depth: usize) -> String {
    " ".repeat(2 * depth)
}

/// Write one line, wrapped in `color` when given. The newline itself is
/// written after the reset so every line starts unstyled.
pub fn write_styled<W: WriteColor>(
    out: &mut W,
    text: &str,
    color: Option<Color>,
) -> io::Result<()> {
    match color {
        Some(c) => {
            out.set_color(ColorSpec::new().set_fg(Some(c)))?;
            write!(out, "{}", text)?;
            out.reset()?;
        }
        None => write!(out, "{}", text)?,
    }
    writeln!(out)
}

/// Report an error on stderr as `<tool>: <label>: <message>`, in red when
/// color is enabled.
pub fn print_error(tool: &str, err: &dyn Display, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let line = format!("{}: {}", tool, err);
    // Nothing sensible left to do if stderr itself is gone
    let _ = write_styled(&mut stderr, &line, Some(Color::Red));
}

#[cfg(test)]
mod tests {
    use termcolor::{Ansi, NoColor};

    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "  ");
        assert_eq!(indent(3), "      ");
    }

    #[test]
    fn test_write_styled_plain_writer_ignores_color() {
        let mut out = NoColor::new(Vec::new());
        write_styled(&mut out, "dir/", Some(Color::Blue)).unwrap();
        assert_eq!(out.into_inner(), b"dir/\n");
    }

    #[test]
    fn test_write_styled_resets_before_newline() {
        let mut out = Ansi::new(Vec::new());
        write_styled(&mut out, "dir/", Some(Color::Blue)).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\x1b[34mdir/"), "got {:?}", text);
        assert!(text.ends_with("\x1b[0m\n"), "got {:?}", text);
    }

    #[test]
    fn test_write_styled_without_color_has_no_escapes() {
        let mut out = Ansi::new(Vec::new());
        write_styled(&mut out, "file.txt", None).unwrap();
        assert_eq!(out.into_inner(), b"file.txt\n");
    }
}

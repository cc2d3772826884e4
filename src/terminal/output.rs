//! Terminal output utilities.
//!
//! Prompt writing and styled error lines.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;

/// How messages are rendered on the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Plain text, byte-for-byte what the caller passed.
    #[default]
    Plain,
    /// ANSI colours for errors.
    Color,
}

impl Style {
    /// Colour only when stdout is a terminal, so piped output stays plain.
    pub fn detect() -> Self {
        if io::stdout().is_tty() {
            Style::Color
        } else {
            Style::Plain
        }
    }
}

/// Write a prompt without a trailing newline and flush it ahead of the read.
pub fn write_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}

/// Write an error message on its own line, red when styled.
pub fn write_error<W: Write>(out: &mut W, style: Style, msg: &str) -> io::Result<()> {
    match style {
        Style::Color => queue!(
            out,
            SetForegroundColor(Color::Red),
            Print(msg),
            ResetColor,
            Print("\n")
        )?,
        Style::Plain => writeln!(out, "{msg}")?,
    }
    out.flush()
}

/// Reset colour attributes on stdout when it is a terminal.
pub fn reset_terminal() {
    let mut out = io::stdout();
    if !out.is_tty() {
        return;
    }
    let _ = queue!(out, ResetColor);
    let _ = out.flush();
}

use crate::converter::token::Position;
use anyhow::{Context, Result};
use std::error::Error;
use std::fmt;
use std::fmt::Formatter;
use string_builder::Builder;

/// Which stage of the conversion rejected the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The tokenizer met a character it does not understand.
    Lexical,
    /// The token stream does not form exactly one expression.
    Structural,
}

/// A positioned error message describing why tokenizing or parsing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, position: Position) -> Diagnostic {
        Diagnostic {
            kind,
            message: message.into(),
            line: position.line,
            column: position.column,
        }
    }

    pub fn lexical(message: impl Into<String>, position: Position) -> Diagnostic {
        Self::new(DiagnosticKind::Lexical, message, position)
    }

    pub fn structural(message: impl Into<String>, position: Position) -> Diagnostic {
        Self::new(DiagnosticKind::Structural, message, position)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl Error for Diagnostic {}

/// Renders diagnostics against the source text they were produced from,
/// with a caret under the offending column.
pub struct ErrorFormatter<'a> {
    lines: Vec<&'a str>,
    context_lines: usize,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(source: &'a str) -> ErrorFormatter<'a> {
        let lines = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        ErrorFormatter {
            lines,
            context_lines: 0,
        }
    }

    /// Shows up to `context_lines` source lines before and after the failing line.
    pub fn with_context_lines(mut self, context_lines: usize) -> ErrorFormatter<'a> {
        self.context_lines = context_lines;
        self
    }

    /// Formats the diagnostic as an `Error:` header followed by the source excerpt.
    ///
    /// # Arguments
    ///
    /// * `diagnostic`: The failure to display.
    ///
    /// returns: The formatted, multi-line error text (without a trailing newline).
    ///
    /// # Examples
    ///
    /// ```
    /// use rpn2tex::converter::diagnostic::{Diagnostic, ErrorFormatter};
    /// use rpn2tex::converter::token::Position;
    /// # use anyhow::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let diagnostic = Diagnostic::lexical("Unexpected character '^'", Position::new(1, 5));
    /// let formatted = ErrorFormatter::new("2 3 ^").format(&diagnostic)?;
    /// assert_eq!(formatted, "Error: Unexpected character '^'\n\n1 | 2 3 ^\n  |     ^");
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn format(&self, diagnostic: &Diagnostic) -> Result<String> {
        let mut builder = Builder::default();
        builder.append(format!("Error: {}", diagnostic.message));

        let line_index = diagnostic.line.wrapping_sub(1);
        if line_index < self.lines.len() {
            builder.append("\n\n");
            builder.append(self.excerpt(line_index, diagnostic.column));
        }

        builder.string().context("Failed to build error message")
    }

    fn excerpt(&self, line_index: usize, column: usize) -> String {
        let first = line_index.saturating_sub(self.context_lines);
        let last = line_index.saturating_add(self.context_lines).min(self.lines.len() - 1);
        let width = (last + 1).to_string().len();

        let mut rows = Vec::new();
        for index in first..=last {
            rows.push(format!("{:>width$} | {}", index + 1, self.lines[index], width = width));
            if index == line_index {
                let padding = " ".repeat(column.saturating_sub(1));
                rows.push(format!("{:width$} | {}^", "", padding, width = width));
            }
        }
        rows.join("\n")
    }
}

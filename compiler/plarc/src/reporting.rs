//! Rendering of parse and runtime failures for the terminal.
//!
//! ```text
//! erro: divisao por zero
//!  --> prog.plar:3:10
//!   |
//! 3 | escrever(1 / 0);
//!   |          ^^^^^
//! ```

use std::fmt;

use plar_eval::EvalError;
use plar_ir::Span;
use plar_parse::ParseError;

/// Where a failure happened, resolved against its source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub col: u32,
    pub source_line: String,
    /// Caret count under `source_line`; at least one.
    pub width: usize,
}

impl Location {
    pub fn resolve(file: &str, source: &str, span: Span) -> Self {
        let at = span.line_col(source);
        let source_line = span.source_line(source).to_string();
        let line_rest = source_line
            .chars()
            .count()
            .saturating_sub(at.col as usize - 1);
        let span_chars = source
            .get(span.to_range())
            .map_or(0, |text| text.chars().take_while(|c| *c != '\n').count());
        Location {
            file: file.to_string(),
            line: at.line,
            col: at.col,
            source_line,
            width: span_chars.min(line_rest).max(1),
        }
    }
}

/// A user-facing error: a message and, when known, its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub location: Option<Location>,
}

impl Report {
    pub fn message(message: impl Into<String>) -> Self {
        Report {
            message: message.into(),
            location: None,
        }
    }

    pub fn from_parse(err: &ParseError, file: &str, source: &str) -> Self {
        Report {
            message: format!("erro de sintaxe: {err}"),
            location: Some(Location::resolve(file, source, err.span)),
        }
    }

    pub fn from_eval(err: &EvalError, file: &str, source: &str) -> Self {
        Report {
            message: err.message.clone(),
            location: err.span.map(|span| Location::resolve(file, source, span)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "erro: {}", self.message)?;
        let Some(location) = &self.location else {
            return Ok(());
        };
        let gutter = location.line.to_string().len();
        let pad = " ".repeat(gutter);
        writeln!(
            f,
            "{pad}--> {}:{}:{}",
            location.file, location.line, location.col
        )?;
        writeln!(f, "{pad} |")?;
        writeln!(f, "{} | {}", location.line, location.source_line)?;
        writeln!(
            f,
            "{pad} | {}{}",
            " ".repeat(location.col as usize - 1),
            "^".repeat(location.width)
        )
    }
}

#[cfg(test)]
mod tests;

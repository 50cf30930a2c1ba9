//! Error types for literal parsing.

use std::fmt;

use thiserror::Error;

/// Byte range of a token in the parsed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Failures while reading literal text.
///
/// Both variants carry the span of the offending token so that
/// [`ParseError::context`] can point at it in the original source.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The text contains something that is not a token of the literal grammar
    #[error("invalid token at {}..{}: {message}", span.start, span.end)]
    Lexer { span: Span, message: String },

    /// The tokens do not form a literal expression
    #[error("parse error at {}..{}: {message}", span.start, span.end)]
    Parser { span: Span, message: String },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexer { span, .. } | ParseError::Parser { span, .. } => *span,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ParseError::Lexer { message, .. } | ParseError::Parser { message, .. } => message,
        }
    }

    /// Check if this error was raised while splitting the text into tokens
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ParseError::Lexer { .. })
    }

    /// Returns the 1-based line and column (in characters) of the error.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let start = self.span().start.min(source.len());
        let before = source.get(..start).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
        let column = before
            .get(line_start..)
            .map_or(0, |prefix| prefix.chars().count())
            + 1;
        (line, column)
    }

    /// Pairs the error with its source for a caret-annotated report.
    pub fn context<'a>(&'a self, source: &'a str) -> ErrorContext<'a> {
        ErrorContext {
            source,
            error: self,
        }
    }
}

/// Display adapter that prints an error with the offending source line.
#[derive(Debug)]
pub struct ErrorContext<'a> {
    source: &'a str,
    error: &'a ParseError,
}

impl ErrorContext<'_> {
    fn source_line(&self) -> &str {
        let start = self.error.span().start.min(self.source.len());
        let line_start = self
            .source
            .get(..start)
            .and_then(|before| before.rfind('\n'))
            .map_or(0, |pos| pos + 1);
        let rest = self.source.get(line_start..).unwrap_or_default();
        rest.split('\n').next().unwrap_or_default()
    }
}

impl fmt::Display for ErrorContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.error.line_col(self.source);
        writeln!(f, "line {line}, column {column}: {}", self.error.message())?;

        let source_line = self.source_line();
        let available = source_line.chars().count().saturating_sub(column - 1);
        let width = self
            .source
            .get(self.error.span().start..self.error.span().end)
            .map_or(1, |token| token.chars().count())
            .clamp(1, available.max(1));
        writeln!(f, "  {source_line}")?;
        write!(f, "  {}{}", " ".repeat(column - 1), "^".repeat(width))
    }
}

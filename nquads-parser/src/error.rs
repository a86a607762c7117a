use std::fmt;

/// A 0-based line/column/byte-offset into the whole stream seen so far. [`Display`] renders
/// `line`/`column` as 1-based, matching how editors report positions.
///
/// Grounded on `oxttl::toolkit::error::TextPosition`.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct TextPosition {
    pub line: u64,
    pub column: u64,
    pub offset: u64,
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line + 1, self.column + 1)
    }
}

/// A lexical, structural, or schema error raised while scanning N-Quads/N-Triples input.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("parser error at {position}: {message}")]
pub struct NQuadsSyntaxError {
    pub position: TextPosition,
    pub message: String,
}

impl NQuadsSyntaxError {
    pub(crate) fn new(position: TextPosition, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// The error type the streaming parser's `process`/`end_stream` return.
///
/// `Sink` carries whatever error type the downstream [`rdf_sink::QuadSink`] reports;
/// `Syntax` is a parse error produced by this crate itself. `Io` is never produced by
/// [`crate::NQuadsParser::process`] (it works over already-decoded `&str` chunks and
/// touches no I/O); it exists so a reader-based adapter built on top of this crate, such as
/// `rdf-io`'s, can report its own read failures through the same error type.
#[derive(thiserror::Error, Debug)]
pub enum NQuadsParseError<E> {
    #[error(transparent)]
    Syntax(#[from] NQuadsSyntaxError),
    #[error(transparent)]
    Sink(E),
    #[error(transparent)]
    Io(std::io::Error),
}

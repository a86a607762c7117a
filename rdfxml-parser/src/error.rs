use std::fmt;

/// A 0-based line/column/byte-offset, the same shape `nquads-parser` uses, so a caller
/// juggling both formats sees one error-position convention.
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

/// A grammar or schema violation in RDF/XML input: a malformed node/property-element
/// production, a conflicting attribute combination, an invalid IRI, or a malformed XML
/// event reaching the parser from its source adapter.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("parser error at {position}: {kind}")]
pub struct RdfXmlSyntaxError {
    pub position: TextPosition,
    pub kind: SyntaxErrorKind,
}

impl RdfXmlSyntaxError {
    pub(crate) fn new(position: TextPosition, kind: impl Into<SyntaxErrorKind>) -> Self {
        Self {
            position,
            kind: kind.into(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum SyntaxErrorKind {
    #[error("invalid IRI `{iri}`: {error}")]
    InvalidIri { iri: String, error: String },
    #[error("invalid language tag `{tag}`: {error}")]
    InvalidLanguageTag { tag: String, error: String },
    #[error("{0}")]
    Msg(String),
}

impl From<String> for SyntaxErrorKind {
    fn from(message: String) -> Self {
        Self::Msg(message)
    }
}

impl From<&str> for SyntaxErrorKind {
    fn from(message: &str) -> Self {
        Self::Msg(message.to_owned())
    }
}

/// The error type [`crate::RdfXmlReader`]'s event methods return.
#[derive(thiserror::Error, Debug)]
pub enum RdfXmlParseError<E> {
    #[error(transparent)]
    Syntax(#[from] RdfXmlSyntaxError),
    #[error(transparent)]
    Sink(E),
}

use nquads_parser::NQuadsParseError;
use rdfxml_parser::RdfXmlParseError;

/// The error type [`crate::RdfParser::parse_slice`] returns, wrapping whichever of the two
/// underlying parsers' error types the selected format produced.
#[derive(thiserror::Error, Debug)]
pub enum RdfParseError<E> {
    #[error(transparent)]
    NQuads(#[from] NQuadsParseError<E>),
    #[error(transparent)]
    RdfXml(#[from] RdfXmlParseError<E>),
    /// N-Quads/N-Triples input that is not valid UTF-8. RDF/XML reports the equivalent
    /// failure itself, since `quick-xml` scans the byte stream directly.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

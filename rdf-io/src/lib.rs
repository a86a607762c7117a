//! A unified entry point for parsing the RDF serialization formats this workspace supports,
//! dispatching by [`RdfFormat`] to either `nquads-parser` or `rdfxml-parser` and exposing
//! both through the common [`rdf_sink::QuadSink`] contract.
//!
//! Grounded on `oxrdfio`'s facade (`RdfFormat`/`RdfParser`), trimmed to the two format
//! families this workspace implements; see `DESIGN.md` for what was dropped and why.

mod error;
mod format;

pub use error::RdfParseError;
pub use format::RdfFormat;

use nquads_parser::NQuadsParser;
use rdf_model::{NamedNode, Subject};
use rdf_sink::{QuadSink, TripleSink};
use rdfxml_parser::RdfXmlParser;

/// Adapts a [`QuadSink`] so RDF/XML's [`TripleSink`]-based parser can feed it, attributing
/// every triple to the default graph (RDF/XML has no concept of named graphs).
struct DefaultGraphSink<'a, S> {
    inner: &'a mut S,
}

impl<S: QuadSink> TripleSink for DefaultGraphSink<'_, S> {
    type Error = S::Error;

    fn start_stream(&mut self) -> Result<(), Self::Error> {
        self.inner.start_stream()
    }

    fn end_stream(&mut self) -> Result<(), Self::Error> {
        self.inner.end_stream()
    }

    fn add_non_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        object: &Subject,
    ) -> Result<(), Self::Error> {
        self.inner.add_non_literal(subject, predicate, object, None)
    }

    fn add_iri_ref(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        object: &NamedNode,
    ) -> Result<(), Self::Error> {
        self.inner.add_iri_ref(subject, predicate, object, None)
    }

    fn add_plain_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        language: Option<&str>,
    ) -> Result<(), Self::Error> {
        self.inner.add_plain_literal(subject, predicate, lexical, language, None)
    }

    fn add_typed_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        datatype: &NamedNode,
    ) -> Result<(), Self::Error> {
        self.inner.add_typed_literal(subject, predicate, lexical, datatype, None)
    }
}

/// Parses one of this workspace's supported RDF serializations into a [`QuadSink`].
///
/// ```
/// use rdf_io::{RdfFormat, RdfParser};
/// use rdf_sink::VecQuadSink;
///
/// let input = "<http://example.com/s> <http://example.com/p> <http://example.com/o> .";
/// let mut sink = VecQuadSink::default();
/// RdfParser::from_format(RdfFormat::NTriples)
///     .parse_slice(input.as_bytes(), &mut sink)
///     .unwrap();
/// assert_eq!(sink.0.len(), 1);
/// ```
#[must_use]
pub struct RdfParser {
    format: RdfFormat,
    base_iri: String,
    unchecked: bool,
}

impl RdfParser {
    pub fn from_format(format: RdfFormat) -> Self {
        Self {
            format,
            base_iri: String::new(),
            unchecked: false,
        }
    }

    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = base_iri.into();
        self
    }

    /// Relaxes validation: RDF/XML skips IRI/NCName checks it would otherwise perform,
    /// N-Quads/N-Triples recover from a malformed statement by skipping to the next `.`
    /// instead of aborting the stream.
    #[must_use]
    pub fn unchecked(mut self) -> Self {
        self.unchecked = true;
        self
    }

    pub const fn format(&self) -> RdfFormat {
        self.format
    }

    /// Parses `input` in full, feeding every quad it contains to `sink`.
    #[tracing::instrument(skip(self, input, sink), fields(format = %self.format, bytes = input.len()))]
    pub fn parse_slice<S>(&self, input: &[u8], sink: &mut S) -> Result<(), RdfParseError<S::Error>>
    where
        S: QuadSink,
        S::Error: std::fmt::Display,
    {
        tracing::debug!("starting parse");
        let result = match self.format {
            RdfFormat::NQuads => {
                let mut parser = NQuadsParser::new().with_error_recovery(self.unchecked);
                let text = std::str::from_utf8(input)?;
                parser.process(text, sink).map_err(RdfParseError::NQuads)?;
                parser.end_stream(sink).map_err(RdfParseError::NQuads)
            }
            RdfFormat::NTriples => {
                let mut parser = NQuadsParser::new_triples().with_error_recovery(self.unchecked);
                let text = std::str::from_utf8(input)?;
                parser.process(text, sink).map_err(RdfParseError::NQuads)?;
                parser.end_stream(sink).map_err(RdfParseError::NQuads)
            }
            RdfFormat::RdfXml => {
                let mut xml_parser = RdfXmlParser::new().with_base_iri(self.base_iri.clone());
                if self.unchecked {
                    xml_parser = xml_parser.unchecked();
                }
                let mut adapted = DefaultGraphSink { inner: sink };
                xml_parser
                    .parse_slice(input, &mut adapted)
                    .map_err(RdfParseError::RdfXml)
            }
        };
        match &result {
            Ok(()) => tracing::debug!("parse finished"),
            Err(error) => tracing::warn!(%error, "parse failed"),
        }
        result
    }

    /// Reads `reader` to completion and parses it, the way an application loading a file or
    /// an HTTP response body would. `nquads-parser`/`rdfxml-parser` themselves only see
    /// already-buffered input; read failures are reported as
    /// [`nquads_parser::NQuadsParseError::Io`] wrapped in [`RdfParseError::NQuads`] so
    /// callers match on the same error type regardless of the source.
    #[tracing::instrument(skip(self, reader, sink), fields(format = %self.format))]
    pub fn parse_reader<R, S>(&self, mut reader: R, sink: &mut S) -> Result<(), RdfParseError<S::Error>>
    where
        R: std::io::Read,
        S: QuadSink,
        S::Error: std::fmt::Display,
    {
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(nquads_parser::NQuadsParseError::Io)
            .map_err(RdfParseError::NQuads)?;
        self.parse_slice(&buffer, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_sink::VecQuadSink;

    #[test]
    fn parses_nquads_with_graph_name() {
        let input = b"<http://example.com/s> <http://example.com/p> <http://example.com/o> <http://example.com/g> .\n";
        let mut sink = VecQuadSink::default();
        RdfParser::from_format(RdfFormat::NQuads)
            .parse_slice(input, &mut sink)
            .unwrap();
        assert_eq!(sink.0.len(), 1);
        assert!(sink.0[0].graph_name.is_some());
    }

    #[test]
    fn parses_ntriples_into_default_graph() {
        let input = b"<http://example.com/s> <http://example.com/p> <http://example.com/o> .\n";
        let mut sink = VecQuadSink::default();
        RdfParser::from_format(RdfFormat::NTriples)
            .parse_slice(input, &mut sink)
            .unwrap();
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0[0].graph_name, None);
    }

    #[test]
    fn parses_rdf_xml_into_default_graph() {
        let input = br#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                xmlns:ex="http://example.com/">
            <rdf:Description rdf:about="http://example.com/s">
                <ex:p rdf:resource="http://example.com/o"/>
            </rdf:Description>
        </rdf:RDF>"#;
        let mut sink = VecQuadSink::default();
        RdfParser::from_format(RdfFormat::RdfXml)
            .parse_slice(input, &mut sink)
            .unwrap();
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0[0].graph_name, None);
    }

    #[test]
    fn parse_reader_reads_to_completion() {
        let input = b"<http://example.com/s> <http://example.com/p> <http://example.com/o> .\n".as_slice();
        let mut sink = VecQuadSink::default();
        RdfParser::from_format(RdfFormat::NTriples)
            .parse_reader(input, &mut sink)
            .unwrap();
        assert_eq!(sink.0.len(), 1);
    }

    #[test]
    fn rejects_invalid_utf8_for_line_formats() {
        let mut sink = VecQuadSink::default();
        let result = RdfParser::from_format(RdfFormat::NQuads).parse_slice(&[0xff, 0xfe], &mut sink);
        assert!(matches!(result, Err(RdfParseError::InvalidUtf8(_))));
    }
}

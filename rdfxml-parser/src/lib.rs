//! A SAX-event-driven parser for the RDF/XML syntax: node-element and property-element
//! productions, the three `parseType` modes (`Literal`/`Resource`/`Collection`), `rdf:li`
//! numbering, and `rdf:ID` reification.
//!
//! [`RdfXmlReader`] is the parser core and takes pre-parsed, namespace-resolved XML events;
//! [`RdfXmlParser`] is the entry point most callers want, pairing it with a `quick-xml`-based
//! adapter that reads a byte slice directly.

mod adapter;
mod error;
mod reader;
mod state;
mod xml_literal;

pub use error::{RdfXmlParseError, RdfXmlSyntaxError, SyntaxErrorKind, TextPosition};
pub use reader::{Attribute, RdfXmlReader};

use rdf_sink::TripleSink;

/// Builder for parsing a complete RDF/XML document into a [`TripleSink`].
#[derive(Debug, Clone)]
pub struct RdfXmlParser {
    base_iri: String,
    unchecked: bool,
}

impl Default for RdfXmlParser {
    fn default() -> Self {
        Self {
            base_iri: String::new(),
            unchecked: false,
        }
    }
}

impl RdfXmlParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document's initial base IRI, used to resolve relative `rdf:about` and
    /// `rdf:resource` values until overridden by an `xml:base` attribute.
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = base_iri.into();
        self
    }

    /// Skips IRI and NCName validation, trusting the input is already well-formed. Useful
    /// when parsing data that has already been validated upstream.
    #[must_use]
    pub fn unchecked(mut self) -> Self {
        self.unchecked = true;
        self
    }

    /// Parses `input` in full, feeding every triple (and reified statement) to `sink`.
    pub fn parse_slice<S: TripleSink>(
        &self,
        input: &[u8],
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        adapter::parse_slice(input, self.base_iri.clone(), self.unchecked, sink)
    }

    pub fn parse_str<S: TripleSink>(
        &self,
        input: &str,
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        self.parse_slice(input.as_bytes(), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_model::Triple;
    use rdf_sink::VecTripleSink;

    fn parse(input: &str) -> Vec<Triple> {
        let mut sink = VecTripleSink::default();
        RdfXmlParser::new()
            .with_base_iri("http://example.com/")
            .parse_str(input, &mut sink)
            .unwrap();
        sink.0
    }

    #[test]
    fn plain_description_with_about() {
        let triples = parse(
            r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <rdf:Description rdf:about="http://example.com/s">
    <ex:name>Alice</ex:name>
  </rdf:Description>
</rdf:RDF>"#,
        );
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].subject.to_string(), "<http://example.com/s>");
        assert_eq!(triples[0].predicate.to_string(), "<http://example.com/ns#name>");
        assert_eq!(triples[0].object.to_string(), "\"Alice\"");
    }

    #[test]
    fn typed_node_element_emits_rdf_type() {
        let triples = parse(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <ex:Person rdf:about="http://example.com/alice"/>
</rdf:RDF>"#,
        );
        assert_eq!(triples.len(), 1);
        assert_eq!(
            triples[0].predicate.to_string(),
            "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>"
        );
        assert_eq!(triples[0].object.to_string(), "<http://example.com/ns#Person>");
    }

    #[test]
    fn striped_node_element_child_gets_an_edge() {
        let triples = parse(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <ex:Person rdf:about="http://example.com/alice">
    <ex:knows>
      <ex:Person rdf:about="http://example.com/bob"/>
    </ex:knows>
  </ex:Person>
</rdf:RDF>"#,
        );
        assert!(triples.iter().any(|t| t.predicate.as_str()
            == "http://example.com/ns#knows"
            && t.object.to_string() == "<http://example.com/bob>"));
    }

    #[test]
    fn blank_node_without_identifier() {
        let triples = parse(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <ex:Person>
    <ex:name>Carol</ex:name>
  </ex:Person>
</rdf:RDF>"#,
        );
        assert_eq!(triples.len(), 2);
        assert!(triples[0].subject.to_string().starts_with("_:"));
    }
}

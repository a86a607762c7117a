//! The downstream contract both parsers in this workspace drive: a stateless receiver of
//! RDF statements, invoked synchronously, in document order, at most once per statement.
//!
//! `oxttl`/`oxrdfxml` hand emitted statements back through `Iterator`/closure callbacks
//! instead of a named sink type, so this module's shape is new, but its method set is a
//! direct, Rust-trait rendering of the `addNonLiteral`/`addIriRef`/`addPlainLiteral`/
//! `addTypedLiteral` contract callers expect.

use rdf_model::{GraphName, NamedNode, Subject};

/// Receives the triples an [`rdfxml-parser`](../rdfxml_parser/index.html) produces.
pub trait TripleSink {
    type Error;

    /// Called once before the first statement of a parse.
    fn start_stream(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once after the last statement of a parse, including when the parse produced
    /// no statements at all.
    fn end_stream(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A triple whose object is an IRI or a blank node (never a literal).
    fn add_non_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        object: &Subject,
    ) -> Result<(), Self::Error>;

    /// A triple whose object is known to be an IRI specifically, as opposed to a blank node.
    /// Defaults to [`Self::add_non_literal`]; callers that can tell the two apart cheaply
    /// (e.g. emitting `rdf:type`) may use this instead to skip an enum match.
    fn add_iri_ref(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        object: &NamedNode,
    ) -> Result<(), Self::Error> {
        self.add_non_literal(subject, predicate, &Subject::NamedNode(object.clone()))
    }

    /// A triple whose object is a simple or language-tagged literal.
    fn add_plain_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        language: Option<&str>,
    ) -> Result<(), Self::Error>;

    /// A triple whose object is a literal with an explicit datatype IRI.
    fn add_typed_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        datatype: &NamedNode,
    ) -> Result<(), Self::Error>;
}

/// Receives the quads an [`nquads-parser`](../nquads_parser/index.html) produces. Identical
/// to [`TripleSink`] except every method additionally carries the (optional) graph name —
/// `None` means the default graph.
pub trait QuadSink {
    type Error;

    fn start_stream(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_stream(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn add_non_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        object: &Subject,
        graph: Option<&GraphName>,
    ) -> Result<(), Self::Error>;

    fn add_iri_ref(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        object: &NamedNode,
        graph: Option<&GraphName>,
    ) -> Result<(), Self::Error> {
        self.add_non_literal(subject, predicate, &Subject::NamedNode(object.clone()), graph)
    }

    fn add_plain_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        language: Option<&str>,
        graph: Option<&GraphName>,
    ) -> Result<(), Self::Error>;

    fn add_typed_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        datatype: &NamedNode,
        graph: Option<&GraphName>,
    ) -> Result<(), Self::Error>;
}

pub mod collecting;
pub use collecting::{VecQuadSink, VecTripleSink};

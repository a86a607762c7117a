//! `Vec`-backed sinks, handy in tests and as the `rdf-io` facade's default collector.

use crate::{QuadSink, TripleSink};
use rdf_model::{GraphName, Literal, NamedNode, Quad, Subject, Term, Triple};
use std::convert::Infallible;

/// Appends every triple it receives to an in-memory `Vec`.
#[derive(Debug, Default)]
pub struct VecTripleSink(pub Vec<Triple>);

impl TripleSink for VecTripleSink {
    type Error = Infallible;

    fn add_non_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        object: &Subject,
    ) -> Result<(), Self::Error> {
        self.0.push(Triple::new(subject.clone(), predicate.clone(), object.clone()));
        Ok(())
    }

    fn add_plain_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        language: Option<&str>,
    ) -> Result<(), Self::Error> {
        let literal = match language {
            Some(language) => Literal::new_language_tagged(lexical, language)
                .unwrap_or_else(|_| Literal::new_simple(lexical)),
            None => Literal::new_simple(lexical),
        };
        self.0.push(Triple::new(subject.clone(), predicate.clone(), Term::Literal(literal)));
        Ok(())
    }

    fn add_typed_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        datatype: &NamedNode,
    ) -> Result<(), Self::Error> {
        self.0.push(Triple::new(
            subject.clone(),
            predicate.clone(),
            Term::Literal(Literal::new_typed(lexical, datatype.clone())),
        ));
        Ok(())
    }
}

/// Appends every quad it receives to an in-memory `Vec`.
#[derive(Debug, Default)]
pub struct VecQuadSink(pub Vec<Quad>);

impl QuadSink for VecQuadSink {
    type Error = Infallible;

    fn add_non_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        object: &Subject,
        graph: Option<&GraphName>,
    ) -> Result<(), Self::Error> {
        self.0.push(Quad::new(
            subject.clone(),
            predicate.clone(),
            object.clone(),
            graph.cloned(),
        ));
        Ok(())
    }

    fn add_plain_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        language: Option<&str>,
        graph: Option<&GraphName>,
    ) -> Result<(), Self::Error> {
        let literal = match language {
            Some(language) => Literal::new_language_tagged(lexical, language)
                .unwrap_or_else(|_| Literal::new_simple(lexical)),
            None => Literal::new_simple(lexical),
        };
        self.0.push(Quad::new(
            subject.clone(),
            predicate.clone(),
            Term::Literal(literal),
            graph.cloned(),
        ));
        Ok(())
    }

    fn add_typed_literal(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        lexical: &str,
        datatype: &NamedNode,
        graph: Option<&GraphName>,
    ) -> Result<(), Self::Error> {
        self.0.push(Quad::new(
            subject.clone(),
            predicate.clone(),
            Term::Literal(Literal::new_typed(lexical, datatype.clone())),
            graph.cloned(),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_quad_sink_collects_in_order() {
        let mut sink = VecQuadSink::default();
        sink.add_iri_ref(
            &Subject::NamedNode(NamedNode::new_unchecked("http://a")),
            &NamedNode::new_unchecked("http://b"),
            &NamedNode::new_unchecked("http://c"),
            None,
        )
        .unwrap();
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0[0].graph_name, None);
    }
}

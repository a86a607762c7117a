//! A streaming parser for [N-Quads](https://www.w3.org/TR/n-quads/) and its 3-column subset
//! [N-Triples](https://www.w3.org/TR/n-triples/).
//!
//! [`NQuadsParser`] is a character-stream state machine: feed it chunks of input, in any
//! partition (down to one character per call), through [`NQuadsParser::process`], and it
//! invokes an [`rdf_sink::QuadSink`] once per statement recognized. No statement is ever
//! split across calls to the sink; a token, however, may span any number of calls to
//! `process`.

mod error;
mod parser;

pub use error::{NQuadsParseError, NQuadsSyntaxError, TextPosition};
pub use parser::NQuadsParser;

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_model::{GraphName, NamedNode, Subject};
    use rdf_sink::VecQuadSink;

    fn parse(input: &str) -> Vec<rdf_model::Quad> {
        let mut parser = NQuadsParser::new();
        let mut sink = VecQuadSink::default();
        parser.process(input, &mut sink).unwrap();
        parser.end_stream(&mut sink).unwrap();
        sink.0
    }

    #[test]
    fn basic_quad() {
        let quads = parse("<http://a> <http://b> <http://c> <http://g> .\n");
        assert_eq!(quads.len(), 1);
        let q = &quads[0];
        assert_eq!(q.subject, Subject::NamedNode(NamedNode::new_unchecked("http://a")));
        assert_eq!(q.predicate, NamedNode::new_unchecked("http://b"));
        assert_eq!(
            q.graph_name,
            Some(GraphName::NamedNode(NamedNode::new_unchecked("http://g")))
        );
    }

    #[test]
    fn triple_has_no_graph() {
        let quads = parse("<http://a> <http://b> <http://c> .\n");
        assert_eq!(quads[0].graph_name, None);
    }

    #[test]
    fn comment_is_ignored() {
        let quads = parse("# a comment\n<http://a> <http://b> <http://c> .\n# trailing\n");
        assert_eq!(quads.len(), 1);
    }

    #[test]
    fn error_without_recovery_aborts() {
        let mut parser = NQuadsParser::new();
        let mut sink = VecQuadSink::default();
        let result = parser.process("not-a-token . ", &mut sink);
        assert!(result.is_err());
    }

    #[test]
    fn error_recovery_skips_to_next_statement() {
        let mut parser = NQuadsParser::new().with_error_recovery(true);
        let mut sink = VecQuadSink::default();
        parser
            .process("@garbage .\n<http://a> <http://b> <http://c> .\n", &mut sink)
            .unwrap();
        parser.end_stream(&mut sink).unwrap();
        assert_eq!(sink.0.len(), 1);
    }
}

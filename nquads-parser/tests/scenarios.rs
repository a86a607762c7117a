//! Integration tests for the textual scenarios a conforming N-Quads parser must handle,
//! plus the chunking- and comment-invariance properties the crate promises.

use nquads_parser::NQuadsParser;
use rdf_model::{Literal, Quad, Term};
use rdf_sink::VecQuadSink;

fn parse_whole(input: &str) -> Vec<Quad> {
    let mut parser = NQuadsParser::new();
    let mut sink = VecQuadSink::default();
    parser.process(input, &mut sink).unwrap();
    parser.end_stream(&mut sink).unwrap();
    sink.0
}

/// Feeds `input` to a fresh parser one byte-range at a time, split at every offset in
/// `splits` (plus the implicit start and end), to check that statement output does not
/// depend on how the caller chunked the input.
fn parse_chunked(input: &str, splits: &[usize]) -> Vec<Quad> {
    let mut parser = NQuadsParser::new();
    let mut sink = VecQuadSink::default();
    let mut start = 0;
    for &split in splits {
        parser.process(&input[start..split], &mut sink).unwrap();
        start = split;
    }
    parser.process(&input[start..], &mut sink).unwrap();
    parser.end_stream(&mut sink).unwrap();
    sink.0
}

#[test]
fn scenario_plain_literal_with_language() {
    let quads = parse_whole("<s> <p> \"hi\"@en .\n");
    assert_eq!(quads.len(), 1);
    assert_eq!(quads[0].graph_name, None);
    match &quads[0].object {
        Term::Literal(Literal::LanguageTagged { value, language }) => {
            assert_eq!(value, "hi");
            assert_eq!(language, "en");
        }
        other => panic!("expected a language-tagged literal, got {other:?}"),
    }
}

#[test]
fn scenario_typed_literal() {
    let quads = parse_whole(
        "<s> <p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n",
    );
    assert_eq!(quads.len(), 1);
    match &quads[0].object {
        Term::Literal(Literal::Typed { value, datatype }) => {
            assert_eq!(value, "42");
            assert_eq!(datatype.as_str(), "http://www.w3.org/2001/XMLSchema#integer");
        }
        other => panic!("expected a typed literal, got {other:?}"),
    }
}

#[test]
fn scenario_escape_across_buffers_matches_single_buffer() {
    let input = "<s> <p> \"hi\"@en .\n";
    let whole = parse_whole(input);

    // Split between the `h` and `i` of the literal, and between `@` and `en`.
    let h_i = input.find("hi").unwrap() + 1;
    let at_en = input.find("@en").unwrap() + 1;
    let chunked = parse_chunked(input, &[h_i, at_en]);

    assert_eq!(whole, chunked);
}

#[test]
fn chunking_invariance_holds_one_character_at_a_time() {
    let input = "<http://a> <http://b> \"v\\u00e9\"@fr-CA <http://g> .\n<http://a> <http://b> _:x .\n";
    let whole = parse_whole(input);

    let splits: Vec<usize> = (1..input.len()).collect();
    let chunked = parse_chunked(input, &splits);

    assert_eq!(whole, chunked);
}

#[test]
fn comment_invariance_holds() {
    let without_comments = parse_whole("<http://a> <http://b> <http://c> .\n");
    let with_comments = parse_whole(
        "# leading comment\n<http://a> <http://b> <http://c> . # trailing comment\n",
    );
    assert_eq!(without_comments, with_comments);
}

#[test]
fn unicode_escape_decodes_to_the_right_character() {
    let quads = parse_whole("<s> <p> \"caf\\u00e9\" .\n");
    match &quads[0].object {
        Term::Literal(Literal::Simple(value)) => assert_eq!(value, "caf\u{e9}"),
        other => panic!("expected a simple literal, got {other:?}"),
    }
}

use rdf_model::Triple;
use rdf_sink::VecTripleSink;
use rdfxml_parser::RdfXmlParser;

fn parse(input: &str) -> Vec<Triple> {
    let mut sink = VecTripleSink::default();
    RdfXmlParser::new()
        .with_base_iri("http://example.com/")
        .parse_str(input, &mut sink)
        .unwrap();
    sink.0
}

#[test]
fn scenario_collection_weaves_rdf_first_rest_nil() {
    let triples = parse(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <rdf:Description rdf:about="http://example.com/s">
    <ex:items rdf:parseType="Collection">
      <rdf:Description rdf:about="http://example.com/a"/>
      <rdf:Description rdf:about="http://example.com/b"/>
    </ex:items>
  </rdf:Description>
</rdf:RDF>"#,
    );
    let rest = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    let first = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    let nil = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

    let owning = triples
        .iter()
        .find(|t| t.predicate.as_str() == "http://example.com/ns#items")
        .expect("owning triple to the list head");
    let head = owning.object.to_string();

    let first_item = triples
        .iter()
        .find(|t| t.subject.to_string() == head && t.predicate.as_str() == first)
        .expect("rdf:first on the head cell");
    assert_eq!(first_item.object.to_string(), "<http://example.com/a>");

    let rest_cell = triples
        .iter()
        .find(|t| t.subject.to_string() == head && t.predicate.as_str() == rest)
        .expect("rdf:rest on the head cell");
    let second_cell = rest_cell.object.to_string();
    assert_ne!(second_cell, format!("<{nil}>"));

    let second_item = triples
        .iter()
        .find(|t| t.subject.to_string() == second_cell && t.predicate.as_str() == first)
        .expect("rdf:first on the second cell");
    assert_eq!(second_item.object.to_string(), "<http://example.com/b>");

    let terminator = triples
        .iter()
        .find(|t| t.subject.to_string() == second_cell && t.predicate.as_str() == rest)
        .expect("rdf:rest terminating the list");
    assert_eq!(terminator.object.to_string(), format!("<{nil}>"));
}

#[test]
fn scenario_empty_collection_is_rdf_nil() {
    let triples = parse(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <rdf:Description rdf:about="http://example.com/s">
    <ex:items rdf:parseType="Collection"/>
  </rdf:Description>
</rdf:RDF>"#,
    );
    assert_eq!(triples.len(), 1);
    assert_eq!(
        triples[0].object.to_string(),
        "<http://www.w3.org/1999/02/22-rdf-syntax-ns#nil>"
    );
}

#[test]
fn scenario_parse_type_literal_captures_markup_verbatim() {
    let triples = parse(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#" xmlns:html="http://www.w3.org/1999/xhtml">
  <rdf:Description rdf:about="http://example.com/s">
    <ex:body rdf:parseType="Literal"><html:p>Hello <html:b>world</html:b></html:p></ex:body>
  </rdf:Description>
</rdf:RDF>"#,
    );
    assert_eq!(triples.len(), 1);
    let object = &triples[0].object;
    let rendered = object.to_string();
    assert!(rendered.contains(r#"<html:p xmlns:html="http://www.w3.org/1999/xhtml">Hello <html:b>world</html:b></html:p>"#));
    assert!(rendered.ends_with(
        "^^<http://www.w3.org/1999/02/22-rdf-syntax-ns#XMLLiteral>"
    ));
}

#[test]
fn scenario_parse_type_literal_does_not_redeclare_an_already_scoped_prefix() {
    let triples = parse(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#" xmlns:html="http://www.w3.org/1999/xhtml">
  <rdf:Description rdf:about="http://example.com/s">
    <ex:body rdf:parseType="Literal"><html:div xmlns:html="http://www.w3.org/1999/xhtml"><html:span/></html:div></ex:body>
  </rdf:Description>
</rdf:RDF>"#,
    );
    let rendered = triples[0].object.to_string();
    assert_eq!(rendered.matches("xmlns:html").count(), 1);
}

#[test]
fn scenario_parse_type_resource_mints_a_blank_node() {
    let triples = parse(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <rdf:Description rdf:about="http://example.com/s">
    <ex:address rdf:parseType="Resource">
      <ex:city>Lyon</ex:city>
    </ex:address>
  </rdf:Description>
</rdf:RDF>"#,
    );
    let edge = triples
        .iter()
        .find(|t| t.predicate.as_str() == "http://example.com/ns#address")
        .expect("edge to the implicit blank node");
    let city = triples
        .iter()
        .find(|t| t.predicate.as_str() == "http://example.com/ns#city")
        .expect("city literal on the implicit blank node");
    assert_eq!(edge.object.to_string(), city.subject.to_string());
    assert_eq!(city.object.to_string(), "\"Lyon\"");
}

#[test]
fn scenario_rdf_id_reifies_the_statement() {
    let triples = parse(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <rdf:Description rdf:about="http://example.com/s">
    <ex:name rdf:ID="witness1">Alice</ex:name>
  </rdf:Description>
</rdf:RDF>"#,
    );
    let reified_subject = "<http://example.com/#witness1>";
    let type_triple = triples.iter().find(|t| {
        t.subject.to_string() == reified_subject
            && t.predicate.as_str() == "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
    });
    assert!(type_triple.is_some(), "reification should emit rdf:type rdf:Statement");
    assert!(triples.iter().any(|t| t.subject.to_string() == reified_subject
        && t.predicate.as_str() == "http://www.w3.org/1999/02/22-rdf-syntax-ns#object"
        && t.object.to_string() == "\"Alice\""));
    assert!(triples
        .iter()
        .any(|t| t.predicate.as_str() == "http://example.com/ns#name" && t.object.to_string() == "\"Alice\""));
}

#[test]
fn scenario_rdf_li_numbers_successive_properties() {
    let triples = parse(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <rdf:Seq rdf:about="http://example.com/s">
    <rdf:li>one</rdf:li>
    <rdf:li>two</rdf:li>
  </rdf:Seq>
</rdf:RDF>"#,
    );
    assert!(triples.iter().any(|t| t.predicate.as_str()
        == "http://www.w3.org/1999/02/22-rdf-syntax-ns#_1"
        && t.object.to_string() == "\"one\""));
    assert!(triples.iter().any(|t| t.predicate.as_str()
        == "http://www.w3.org/1999/02/22-rdf-syntax-ns#_2"
        && t.object.to_string() == "\"two\""));
}

#[test]
fn scenario_xml_lang_is_inherited_by_descendants() {
    let triples = parse(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.com/ns#">
  <rdf:Description rdf:about="http://example.com/s" xml:lang="fr">
    <ex:name>Alice</ex:name>
  </rdf:Description>
</rdf:RDF>"#,
    );
    let name = triples
        .iter()
        .find(|t| t.predicate.as_str() == "http://example.com/ns#name")
        .expect("language-tagged literal");
    assert_eq!(name.object.to_string(), "\"Alice\"@fr");
}

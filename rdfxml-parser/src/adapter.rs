//! Drives a [`RdfXmlReader`] from raw XML bytes using `quick-xml`'s [`NsReader`], resolving
//! element and attribute names against in-scope namespace declarations before handing them
//! to the SAX-event core. This is the one piece of this crate that is not itself the
//! parser: everything upstream of "here is a namespace-resolved start tag" is ordinary XML
//! well-formedness, which `quick-xml` already does for us.
//!
//! Grounded on `oxrdfxml::parser::RdfXmlReader`'s `read_event`/`resolve_element`/
//! `resolve_attribute` usage.

use crate::error::{RdfXmlParseError, RdfXmlSyntaxError, TextPosition};
use crate::reader::{Attribute, RdfXmlReader};
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{QName, ResolveResult};
use quick_xml::NsReader;
use rdf_sink::TripleSink;

fn decode(decoder: Decoder, bytes: &[u8]) -> Result<String, String> {
    decoder
        .decode(bytes)
        .map(|cow| cow.into_owned())
        .map_err(|error| error.to_string())
}

fn resolve_name(
    decoder: Decoder,
    namespace: ResolveResult<'_>,
    local_name: &[u8],
) -> Result<(Option<String>, String), String> {
    let local_name = decode(decoder, local_name)?;
    match namespace {
        ResolveResult::Bound(ns) => Ok((Some(decode(decoder, ns.as_ref())?), local_name)),
        ResolveResult::Unbound => Ok((None, local_name)),
        ResolveResult::Unknown(prefix) => {
            Err(format!("unknown namespace prefix `{}`", decode(decoder, &prefix)?))
        }
    }
}

fn collect_attributes<R>(
    reader: &NsReader<R>,
    start: &BytesStart<'_>,
) -> Result<Vec<Attribute>, String> {
    let decoder = reader.decoder();
    let mut attrs = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| e.to_string())?;
        let qname = decode(decoder, attribute.key.as_ref())?;
        let (namespace, local_name) = reader.resolve_attribute(attribute.key);
        // Unqualified attributes (no prefix) stay unbound, per the XML namespaces spec,
        // rather than inheriting the element's default namespace.
        let uri = match namespace {
            ResolveResult::Bound(ns) if qname.contains(':') => Some(decode(decoder, ns.as_ref())?),
            _ => None,
        };
        let value = attribute
            .decode_and_unescape_value(reader)
            .map_err(|e| e.to_string())?
            .into_owned();
        attrs.push(Attribute {
            uri,
            local_name,
            qname,
            value,
        });
    }
    Ok(attrs)
}

/// Parses `input` as RDF/XML, feeding every triple (and reified statement) it contains to
/// `sink`. `base_iri` is the document's initial base IRI, typically the IRI the bytes were
/// retrieved from.
pub fn parse_slice<S: TripleSink>(
    input: &[u8],
    base_iri: String,
    unchecked: bool,
    sink: &mut S,
) -> Result<(), RdfXmlParseError<S::Error>> {
    let mut xml_reader = NsReader::from_reader(input);
    xml_reader.expand_empty_elements(true);
    let mut core = RdfXmlReader::new(base_iri, unchecked);
    core.start_document();
    let mut buffer = Vec::new();
    let mut line = 0u64;

    loop {
        buffer.clear();
        let event = xml_reader.read_event_into(&mut buffer).map_err(|error| {
            RdfXmlParseError::Syntax(RdfXmlSyntaxError::new(
                TextPosition { line, column: 0, offset: 0 },
                error.to_string(),
            ))
        })?;
        match event {
            Event::Start(start) => {
                let (namespace, local_name) = xml_reader.resolve_element(start.name());
                let (uri, local_name) = resolve_name(xml_reader.decoder(), namespace, local_name.as_ref())
                    .map_err(|msg| syntax_err(line, msg))?;
                let qname = decode(xml_reader.decoder(), start.name().as_ref())
                    .map_err(|msg| syntax_err(line, msg))?;
                let attrs =
                    collect_attributes(&xml_reader, &start).map_err(|msg| syntax_err(line, msg))?;
                core.start_element(uri.as_deref(), &local_name, &qname, &attrs, sink)?;
            }
            Event::Empty(_) => {
                return Err(syntax_err(
                    line,
                    "the expand_empty_elements option must be enabled".to_owned(),
                ))
            }
            Event::End(end) => {
                let qname = decode(xml_reader.decoder(), end.name().as_ref())
                    .map_err(|msg| syntax_err(line, msg))?;
                core.end_element(&qname, sink)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| syntax_err(line, e.to_string()))?;
                core.characters(&text, sink)?;
                line += text.matches('\n').count() as u64;
            }
            Event::CData(cdata) => {
                let text = decode(xml_reader.decoder(), cdata.as_ref()).map_err(|msg| syntax_err(line, msg))?;
                core.characters(&text, sink)?;
            }
            Event::Comment(comment) => {
                let text = decode(xml_reader.decoder(), comment.as_ref()).map_err(|msg| syntax_err(line, msg))?;
                core.comment(&text, sink)?;
            }
            Event::PI(pi) => {
                let content = decode(xml_reader.decoder(), pi.as_ref()).map_err(|msg| syntax_err(line, msg))?;
                let (target, data) = content.split_once(char::is_whitespace).unwrap_or((&content, ""));
                core.processing_instruction(target, data.trim_start(), sink)?;
            }
            Event::Decl(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }
    Ok(())
}

fn syntax_err<E>(line: u64, message: String) -> RdfXmlParseError<E> {
    RdfXmlParseError::Syntax(RdfXmlSyntaxError::new(
        TextPosition { line, column: 0, offset: 0 },
        message,
    ))
}

//! A minimal re-serializer used while inside `rdf:parseType="Literal"`: the events the
//! source adapter already decoded (start/end tags, text, comments, processing
//! instructions) are written back out verbatim as XML text, which becomes the lexical
//! form of the resulting `rdf:XMLLiteral`-typed literal.
//!
//! Grounded on `oxrdfxml::parser`'s use of a `quick_xml::Writer<Vec<u8>>` for the same
//! purpose; reimplemented over a plain `String` since this crate does not depend on
//! `quick-xml`'s writer half of the API.

use std::fmt::Write;

#[derive(Debug, Default)]
pub struct XmlLiteralWriter {
    buffer: String,
}

impl XmlLiteralWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_element(&mut self, qname: &str, attrs: &[(String, String)], self_closing: bool) {
        let _ = write!(self.buffer, "<{qname}");
        for (name, value) in attrs {
            let _ = write!(self.buffer, " {name}=\"{}\"", escape_attr(value));
        }
        self.buffer.push_str(if self_closing { "/>" } else { ">" });
    }

    pub fn end_element(&mut self, qname: &str) {
        let _ = write!(self.buffer, "</{qname}>");
    }

    pub fn text(&mut self, text: &str) {
        self.buffer.push_str(&escape_text(text));
    }

    pub fn comment(&mut self, text: &str) {
        let _ = write!(self.buffer, "<!--{text}-->");
    }

    pub fn processing_instruction(&mut self, target: &str, data: &str) {
        if data.is_empty() {
            let _ = write!(self.buffer, "<?{target}?>");
        } else {
            let _ = write!(self.buffer, "<?{target} {data}?>");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.buffer
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_simple_element() {
        let mut w = XmlLiteralWriter::new();
        w.start_element("p:tag", &[("attr".to_owned(), "v\"<&".to_owned())], false);
        w.text("a<b");
        w.end_element("p:tag");
        assert_eq!(w.into_inner(), "<p:tag attr=\"v&quot;&lt;&amp;\">a&lt;b</p:tag>");
    }
}

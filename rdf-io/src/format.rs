use std::fmt;

/// The RDF serialization formats this workspace can parse.
///
/// Grounded on `oxrdfio::RdfFormat`, trimmed to the two syntax families the parser crates
/// in this workspace actually implement (N-Quads/N-Triples and RDF/XML); Turtle/TriG/N3 and
/// JSON-LD are out of scope, see `DESIGN.md`.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
#[non_exhaustive]
pub enum RdfFormat {
    /// [N-Quads](https://www.w3.org/TR/n-quads/)
    NQuads,
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/)
    RdfXml,
}

impl RdfFormat {
    #[inline]
    pub const fn iri(self) -> &'static str {
        match self {
            Self::NQuads => "http://www.w3.org/ns/formats/N-Quads",
            Self::NTriples => "http://www.w3.org/ns/formats/N-Triples",
            Self::RdfXml => "http://www.w3.org/ns/formats/RDF_XML",
        }
    }

    #[inline]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::NQuads => "application/n-quads",
            Self::NTriples => "application/n-triples",
            Self::RdfXml => "application/rdf+xml",
        }
    }

    #[inline]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::NQuads => "nq",
            Self::NTriples => "nt",
            Self::RdfXml => "rdf",
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NQuads => "N-Quads",
            Self::NTriples => "N-Triples",
            Self::RdfXml => "RDF/XML",
        }
    }

    /// Whether the format can carry named graphs, rather than only the default graph.
    #[inline]
    pub const fn supports_datasets(self) -> bool {
        matches!(self, Self::NQuads)
    }

    /// Looks up a format from an IANA media type, ignoring parameters and tolerating a few
    /// common aliases.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type.split(';').next()?.trim() {
            "application/n-quads" => Some(Self::NQuads),
            "application/n-triples" => Some(Self::NTriples),
            "application/rdf+xml" | "application/xml" | "text/xml" => Some(Self::RdfXml),
            _ => None,
        }
    }

    /// Looks up a format from a file extension (without the leading dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "nq" => Some(Self::NQuads),
            "nt" => Some(Self::NTriples),
            "rdf" | "xml" | "owl" => Some(Self::RdfXml),
            _ => None,
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_round_trips() {
        assert_eq!(RdfFormat::from_media_type("text/xml"), Some(RdfFormat::RdfXml));
        assert_eq!(
            RdfFormat::from_media_type("application/n-quads; charset=utf-8"),
            Some(RdfFormat::NQuads)
        );
    }

    #[test]
    fn only_nquads_supports_datasets() {
        assert!(RdfFormat::NQuads.supports_datasets());
        assert!(!RdfFormat::NTriples.supports_datasets());
        assert!(!RdfFormat::RdfXml.supports_datasets());
    }
}

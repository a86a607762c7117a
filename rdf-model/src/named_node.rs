use oxiri::{Iri, IriParseError};
use std::fmt;

/// An RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri).
///
/// The default string formatter returns an N-Triples/N-Quads compatible representation:
/// ```
/// use rdf_model::NamedNode;
///
/// assert_eq!(
///     "<http://example.com/foo>",
///     NamedNode::new("http://example.com/foo")?.to_string()
/// );
/// # Result::<_, oxiri::IriParseError>::Ok(())
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
pub struct NamedNode {
    iri: String,
}

impl NamedNode {
    /// Builds and validates an absolute IRI.
    pub fn new(iri: impl Into<String>) -> Result<Self, IriParseError> {
        let iri = iri.into();
        Iri::parse(iri.as_str())?;
        Ok(Self { iri })
    }

    /// Builds an IRI from a string the caller has already validated, e.g. because it was
    /// produced by resolving a relative reference against a base that is itself absolute.
    #[inline]
    pub fn new_unchecked(iri: impl Into<String>) -> Self {
        Self { iri: iri.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.iri
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.iri
    }
}

impl fmt::Display for NamedNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

impl PartialEq<str> for NamedNode {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.iri == other
    }
}

impl From<NamedNode> for String {
    #[inline]
    fn from(node: NamedNode) -> Self {
        node.iri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_iris() {
        assert!(NamedNode::new("not-an-iri").is_err());
    }

    #[test]
    fn display_is_angle_bracketed() {
        let n = NamedNode::new("http://example.com/foo").unwrap();
        assert_eq!(n.to_string(), "<http://example.com/foo>");
    }
}

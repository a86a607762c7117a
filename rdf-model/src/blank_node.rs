use rand::random;
use std::fmt;
use thiserror::Error;

/// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// The common way to create a fresh one is [`BlankNode::default`], which mints a random,
/// collision-resistant label. [`BlankNode::new`] validates a label coming from input text
/// (e.g. an N-Quads `_:label` token or an RDF/XML `rdf:nodeID` attribute).
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct BlankNode(String);

impl BlankNode {
    /// Creates a blank node from a label, validating it against the N-Triples/N-Quads grammar
    /// for `BLANK_NODE_LABEL`.
    pub fn new(id: impl Into<String>) -> Result<Self, BlankNodeIdParseError> {
        let id = id.into();
        validate_blank_node_label(&id)?;
        Ok(Self(id))
    }

    /// Creates a blank node from a label the caller has already validated.
    #[inline]
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a blank node from a unique numerical id, formatted as lowercase hex.
    #[inline]
    pub fn new_from_unique_id(id: u128) -> Self {
        Self(format!("{id:x}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BlankNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

impl Default for BlankNode {
    /// Builds a new blank node with a fresh, randomly minted id.
    ///
    /// The id never starts with a digit, so it stays valid when later serialized as an
    /// RDF/XML `rdf:nodeID` (which must be an NCName).
    #[inline]
    fn default() -> Self {
        loop {
            let id: u128 = random();
            let label = format!("{id:x}");
            if matches!(label.as_bytes().first(), Some(b'a'..=b'f')) {
                return Self(label);
            }
        }
    }
}

#[derive(Error, Debug, Eq, PartialEq, Clone)]
#[error("{0} is not a valid blank node label")]
pub struct BlankNodeIdParseError(String);

fn validate_blank_node_label(id: &str) -> Result<(), BlankNodeIdParseError> {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return Err(BlankNodeIdParseError(id.to_owned()));
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first.is_ascii_digit()) {
        return Err(BlankNodeIdParseError(id.to_owned()));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(BlankNodeIdParseError(id.to_owned()));
    }
    if id.ends_with('.') {
        return Err(BlankNodeIdParseError(id.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_valid_label() {
        let bnode = BlankNode::default();
        assert!(BlankNode::new(bnode.as_str().to_owned()).is_ok());
    }

    #[test]
    fn rejects_trailing_dot() {
        assert!(BlankNode::new("a.").is_err());
    }

    #[test]
    fn display_has_underscore_colon_prefix() {
        let bnode = BlankNode::new("b0").unwrap();
        assert_eq!(bnode.to_string(), "_:b0");
    }
}

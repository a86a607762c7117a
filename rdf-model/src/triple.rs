use crate::blank_node::BlankNode;
use crate::literal::Literal;
use crate::named_node::NamedNode;
use std::fmt;

/// An RDF subject: either an IRI or a blank node (RDF 1.1 forbids literal subjects).
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Subject {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(n) => n.fmt(f),
            Self::BlankNode(n) => n.fmt(f),
        }
    }
}

impl From<NamedNode> for Subject {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<BlankNode> for Subject {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

/// An RDF object term: an IRI, a blank node, or a literal.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(n) => n.fmt(f),
            Self::BlankNode(n) => n.fmt(f),
            Self::Literal(l) => l.fmt(f),
        }
    }
}

impl From<NamedNode> for Term {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<Literal> for Term {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Subject> for Term {
    #[inline]
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::NamedNode(n) => Self::NamedNode(n),
            Subject::BlankNode(n) => Self::BlankNode(n),
        }
    }
}

/// A named graph identifier: an IRI or a blank node. Absent (`None` on [`Quad::graph_name`])
/// means the default graph.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum GraphName {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
}

impl fmt::Display for GraphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(n) => n.fmt(f),
            Self::BlankNode(n) => n.fmt(f),
        }
    }
}

impl From<NamedNode> for GraphName {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<BlankNode> for GraphName {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<Subject> for GraphName {
    #[inline]
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::NamedNode(n) => Self::NamedNode(n),
            Subject::BlankNode(n) => Self::BlankNode(n),
        }
    }
}

/// An RDF triple: `subject predicate object`, scoped to whatever graph its producer implies.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Triple {
    pub subject: Subject,
    pub predicate: NamedNode,
    pub object: Term,
}

impl Triple {
    #[inline]
    pub fn new(subject: impl Into<Subject>, predicate: NamedNode, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// An RDF quad: a [`Triple`] plus an optional graph name (`None` is the default graph).
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Quad {
    pub subject: Subject,
    pub predicate: NamedNode,
    pub object: Term,
    pub graph_name: Option<GraphName>,
}

impl Quad {
    #[inline]
    pub fn new(
        subject: impl Into<Subject>,
        predicate: NamedNode,
        object: impl Into<Term>,
        graph_name: Option<GraphName>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
            graph_name,
        }
    }

    #[inline]
    pub fn into_triple(self) -> Triple {
        Triple {
            subject: self.subject,
            predicate: self.predicate,
            object: self.object,
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(graph_name) = &self.graph_name {
            write!(f, " {graph_name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::rdf;

    #[test]
    fn quad_display_omits_default_graph() {
        let q = Quad::new(
            NamedNode::new_unchecked("http://a"),
            rdf::type_(),
            NamedNode::new_unchecked("http://b"),
            None,
        );
        assert_eq!(q.to_string(), "<http://a> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://b>");
    }

    #[test]
    fn quad_display_includes_named_graph() {
        let q = Quad::new(
            NamedNode::new_unchecked("http://a"),
            rdf::type_(),
            NamedNode::new_unchecked("http://b"),
            Some(GraphName::NamedNode(NamedNode::new_unchecked("http://g"))),
        );
        assert!(q.to_string().ends_with(" <http://g>"));
    }
}

use crate::xml_literal::XmlLiteralWriter;
use rdf_model::{NamedNode, Subject};
use std::collections::HashSet;

/// What a property element's object ends up being, once its content is fully read:
/// either a nested node (from a node-element child, `rdf:resource`, `rdf:nodeID`, or
/// `rdf:parseType="Resource"`), or text (the literal's lexical form).
#[derive(Debug, Clone)]
pub(crate) enum PropertyObject {
    Node(Subject),
    Text(String),
}

/// One entry of the single stack of frames this parser keeps, replacing the five parallel
/// stacks (`modeStack`/`langStack`/`baseStack`/`subjStack`/`subjLiIndexStack`) a literal
/// translation would otherwise need — each `start_element` pushes exactly one frame, each
/// `end_element` pops exactly one.
///
/// Grounded on `oxrdfxml::parser::RdfXmlState`, already shaped as a single enum there.
#[derive(Debug, Clone)]
pub(crate) enum Frame {
    /// Before the document's root element (or the `rdf:RDF` wrapper) has been seen.
    Doc { base_iri: String },
    /// Inside `rdf:RDF` (or at the top level without one): the next child element must be
    /// a node element.
    Rdf { base_iri: String, language: Option<String> },
    /// Inside a node element: the next child elements are property elements, and
    /// `li_counter` numbers any `rdf:li` children as `rdf:_1`, `rdf:_2`, ...
    NodeElt {
        base_iri: String,
        language: Option<String>,
        subject: Subject,
        li_counter: u64,
    },
    /// Inside a property element whose content is still being determined: a node-element
    /// child, `characters`, or nothing (in which case it is an empty-string literal).
    PropertyElt {
        iri: NamedNode,
        base_iri: String,
        language: Option<String>,
        subject: Subject,
        object: Option<PropertyObject>,
        id_attr: Option<String>,
        datatype_attr: Option<String>,
    },
    /// Inside a property element with `rdf:parseType="Collection"`: each node-element
    /// child becomes one more item of the `rdf:List` woven together when this frame pops.
    ParseTypeCollectionPropertyElt {
        iri: NamedNode,
        base_iri: String,
        language: Option<String>,
        subject: Subject,
        items: Vec<Subject>,
        id_attr: Option<String>,
    },
    /// Inside a property element with `rdf:parseType="Literal"`: every event is
    /// re-serialized verbatim into `writer` until the matching end tag.
    ///
    /// `declared_scopes` is one `HashSet` of namespace prefixes per level of element
    /// nesting seen so far inside the literal (pushed/popped in lockstep with
    /// `literal_depth`), recording which prefixes each level declared itself. Together
    /// they let `start_element` tell a prefix already visible from outside the literal
    /// apart from one the captured subtree must redeclare to stay well-formed on its own.
    ParseTypeLiteralPropertyElt {
        iri: NamedNode,
        base_iri: String,
        language: Option<String>,
        subject: Subject,
        writer: XmlLiteralWriter,
        id_attr: Option<String>,
        declared_scopes: Vec<HashSet<String>>,
    },
    /// A property element whose triple (and reification, if any) was already fully
    /// emitted at its start tag (`rdf:resource`, `rdf:nodeID`, or bare property
    /// attributes) — pushed only so its matching end tag has a frame to pop.
    FinishedPropertyElt,
}

impl Frame {
    pub(crate) fn base_iri(&self) -> &str {
        match self {
            Self::Doc { base_iri }
            | Self::Rdf { base_iri, .. }
            | Self::NodeElt { base_iri, .. }
            | Self::PropertyElt { base_iri, .. }
            | Self::ParseTypeCollectionPropertyElt { base_iri, .. }
            | Self::ParseTypeLiteralPropertyElt { base_iri, .. } => base_iri,
            Self::FinishedPropertyElt => "",
        }
    }

    pub(crate) fn language(&self) -> Option<&str> {
        match self {
            Self::Doc { .. } | Self::FinishedPropertyElt => None,
            Self::Rdf { language, .. }
            | Self::NodeElt { language, .. }
            | Self::PropertyElt { language, .. }
            | Self::ParseTypeCollectionPropertyElt { language, .. }
            | Self::ParseTypeLiteralPropertyElt { language, .. } => language.as_deref(),
        }
    }
}

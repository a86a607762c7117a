use crate::error::{RdfXmlParseError, RdfXmlSyntaxError, TextPosition};
use crate::state::{Frame, PropertyObject};
use crate::xml_literal::XmlLiteralWriter;
use rdf_model::vocab::rdf;
use rdf_model::{BlankNode, Literal, NamedNode, Subject, Term};
use rdf_sink::TripleSink;
use std::collections::HashSet;

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

const RDF_ABOUT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#about";
const RDF_ABOUT_EACH: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#aboutEach";
const RDF_ABOUT_EACH_PREFIX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#aboutEachPrefix";
const RDF_BAG_ID: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#bagID";
const RDF_DATATYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#datatype";
const RDF_DESCRIPTION: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Description";
const RDF_ID: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#ID";
const RDF_LI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#li";
const RDF_NODE_ID: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nodeID";
const RDF_PARSE_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#parseType";
const RDF_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#RDF";
const RDF_RESOURCE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#resource";
const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

const RESERVED_RDF_ATTRIBUTES: &[&str] = &[
    RDF_ABOUT_EACH,
    RDF_ABOUT_EACH_PREFIX,
    RDF_BAG_ID,
];

/// One XML attribute as handed to [`RdfXmlReader::start_element`], already namespace-
/// resolved by the source adapter (`uri` is `None` for an unprefixed, unqualified
/// attribute, per the XML namespaces spec).
#[derive(Debug, Clone)]
pub struct Attribute {
    pub uri: Option<String>,
    pub local_name: String,
    pub qname: String,
    pub value: String,
}

impl Attribute {
    fn full_name(&self) -> String {
        match &self.uri {
            Some(uri) => format!("{uri}{}", self.local_name),
            None => self.local_name.clone(),
        }
    }
}

/// Returns the `xmlns[:prefix]`/value pair to re-declare on a `rdf:parseType="Literal"`
/// element, so the captured subtree stays well-formed, self-contained XML once lifted out
/// of its surrounding document. `None` when `prefix` is `"xml"` (always implicitly bound),
/// already visible from outside the literal (`in_scope`), or already declared earlier
/// within it at the current nesting level (`own_scope`).
fn declare_namespace(
    prefix: &str,
    uri: Option<&str>,
    in_scope: &HashSet<&str>,
    own_scope: &mut HashSet<String>,
) -> Option<(String, String)> {
    if prefix == "xml" || in_scope.contains(prefix) || !own_scope.insert(prefix.to_owned()) {
        return None;
    }
    let uri = uri?;
    let name = if prefix.is_empty() {
        "xmlns".to_owned()
    } else {
        format!("xmlns:{prefix}")
    };
    Some((name, uri.to_owned()))
}

enum ParseType {
    Default,
    Literal,
    Resource,
    Collection,
    Other,
}

/// The SAX-event-driven core of the RDF/XML grammar: node-element and property-element
/// productions, the three `parseType` modes, reification, and `rdf:li` numbering.
///
/// This type owns no XML reader of its own — it is fed pre-parsed, namespace-resolved
/// events by an external source adapter (see the `adapter` module for a `quick-xml`-backed
/// one), matching how the rest of this workspace treats source adaptation as an external
/// concern. Grounded on `oxrdfxml::parser::RdfXmlReader`, restructured around that external
/// event boundary instead of an embedded `quick_xml::NsReader`.
pub struct RdfXmlReader {
    state: Vec<Frame>,
    known_rdf_ids: HashSet<String>,
    literal_depth: usize,
    unchecked: bool,
    line: u64,
}

impl RdfXmlReader {
    pub fn new(base_iri: String, unchecked: bool) -> Self {
        Self {
            state: vec![Frame::Doc { base_iri }],
            known_rdf_ids: HashSet::new(),
            literal_depth: 0,
            unchecked,
            line: 0,
        }
    }

    fn position(&self) -> TextPosition {
        TextPosition {
            line: self.line,
            column: 0,
            offset: 0,
        }
    }

    fn err<S: TripleSink>(&self, message: impl Into<String>) -> RdfXmlParseError<S::Error> {
        RdfXmlParseError::Syntax(RdfXmlSyntaxError::new(self.position(), message.into()))
    }

    /// Resolves `reference` against `base` per RFC 3986, the same merge `iri_util::resolve`
    /// performs in checked mode — `unchecked` only removes the final absolute-IRI validation
    /// in [`Self::named_node`], it never substitutes naive string concatenation for the
    /// merge itself.
    fn resolve<S: TripleSink>(&self, base: &str, reference: &str) -> Result<String, RdfXmlParseError<S::Error>> {
        if self.unchecked && iri_util::is_absolute(reference) {
            return Ok(reference.to_owned());
        }
        match iri_util::resolve(base, reference) {
            Ok(resolved) => Ok(resolved),
            Err(_) if self.unchecked => Ok(format!("{base}{reference}")),
            Err(error) => Err(RdfXmlParseError::Syntax(RdfXmlSyntaxError::new(
                self.position(),
                format!("invalid IRI `{reference}`: {error}"),
            ))),
        }
    }

    fn named_node<S: TripleSink>(&self, iri: String) -> Result<NamedNode, RdfXmlParseError<S::Error>> {
        if self.unchecked || iri_util::is_absolute(&iri) {
            Ok(NamedNode::new_unchecked(iri))
        } else {
            Err(self.err::<S>(format!("{iri} is not an absolute IRI")))
        }
    }

    /// Call once before the first `start_element`.
    pub fn start_document(&mut self) {
        // `state` already seeded with `Frame::Doc` by `new`; nothing else to do.
    }

    pub fn comment<S: TripleSink>(
        &mut self,
        text: &str,
        _sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        if let Some(Frame::ParseTypeLiteralPropertyElt { writer, .. }) = self.state.last_mut() {
            writer.comment(text);
        }
        Ok(())
    }

    pub fn processing_instruction<S: TripleSink>(
        &mut self,
        target: &str,
        data: &str,
        _sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        if let Some(Frame::ParseTypeLiteralPropertyElt { writer, .. }) = self.state.last_mut() {
            writer.processing_instruction(target, data);
        }
        Ok(())
    }

    pub fn characters<S: TripleSink>(
        &mut self,
        text: &str,
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        match self.state.last_mut() {
            Some(Frame::ParseTypeLiteralPropertyElt { writer, .. }) => {
                writer.text(text);
                Ok(())
            }
            Some(Frame::PropertyElt { object, .. }) => {
                match object {
                    None => *object = Some(PropertyObject::Text(text.to_owned())),
                    Some(PropertyObject::Text(existing)) => existing.push_str(text),
                    Some(PropertyObject::Node(_)) => {
                        if !text.trim().is_empty() {
                            return Err(self.err::<S>("text content mixed with a node-element child"));
                        }
                    }
                }
                Ok(())
            }
            _ => {
                if text.trim().is_empty() {
                    Ok(())
                } else {
                    let _ = sink;
                    Err(self.err::<S>("unexpected text content outside a property element"))
                }
            }
        }
    }

    pub fn start_element<S: TripleSink>(
        &mut self,
        uri: Option<&str>,
        local_name: &str,
        qname: &str,
        attrs: &[Attribute],
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        if matches!(self.state.last(), Some(Frame::ParseTypeLiteralPropertyElt { .. })) {
            self.literal_depth += 1;
            if let Some(Frame::ParseTypeLiteralPropertyElt { writer, declared_scopes, .. }) =
                self.state.last_mut()
            {
                let in_scope: HashSet<&str> = declared_scopes
                    .iter()
                    .flatten()
                    .map(String::as_str)
                    .collect();
                let mut own_scope = HashSet::new();
                let mut literal_attrs = Vec::new();

                for attr in attrs {
                    if attr.qname == "xmlns" {
                        own_scope.insert(String::new());
                    } else if let Some(prefix) = attr.qname.strip_prefix("xmlns:") {
                        own_scope.insert(prefix.to_owned());
                    }
                }

                if let Some((prefix, _)) = qname.split_once(':') {
                    if let Some(decl) = declare_namespace(prefix, uri, &in_scope, &mut own_scope) {
                        literal_attrs.push(decl);
                    }
                }
                for attr in attrs {
                    if attr.qname == "xmlns" || attr.qname.starts_with("xmlns:") {
                        continue;
                    }
                    if let Some((prefix, _)) = attr.qname.split_once(':') {
                        if let Some(decl) =
                            declare_namespace(prefix, attr.uri.as_deref(), &in_scope, &mut own_scope)
                        {
                            literal_attrs.push(decl);
                        }
                    }
                }

                literal_attrs.extend(attrs.iter().map(|a| (a.qname.clone(), a.value.clone())));
                writer.start_element(qname, &literal_attrs, false);
                declared_scopes.push(own_scope);
            }
            return Ok(());
        }

        let full_name = match uri {
            Some(uri) => format!("{uri}{local_name}"),
            None => local_name.to_owned(),
        };

        if matches!(self.state.last(), Some(Frame::Doc { .. })) && full_name == RDF_RDF {
            let parent_base = self.state.last().expect("just matched").base_iri().to_owned();
            let parent_lang = self.state.last().expect("just matched").language().map(str::to_owned);
            let (base_iri, language) = self.inherit_base_and_lang(&parent_base, parent_lang, attrs, sink)?;
            self.state.push(Frame::Rdf { base_iri, language });
            return Ok(());
        }

        match self.state.last() {
            Some(Frame::Doc { .. } | Frame::Rdf { .. }) => {
                self.start_node_element(&full_name, attrs, sink)
            }
            Some(Frame::NodeElt { .. }) => {
                self.start_property_element(&full_name, attrs, sink)
            }
            Some(Frame::ParseTypeCollectionPropertyElt { .. }) => {
                self.start_node_element(&full_name, attrs, sink)
            }
            Some(Frame::PropertyElt { .. } | Frame::ParseTypeLiteralPropertyElt { .. } | Frame::FinishedPropertyElt) => {
                // A node-element child of a property element (striped syntax).
                self.start_node_element(&full_name, attrs, sink)
            }
            None => unreachable!("state is never empty after `new`"),
        }
    }

    fn inherit_base_and_lang<S: TripleSink>(
        &self,
        parent_base: &str,
        parent_language: Option<String>,
        attrs: &[Attribute],
        _sink: &mut S,
    ) -> Result<(String, Option<String>), RdfXmlParseError<S::Error>> {
        let mut base_iri = parent_base.to_owned();
        let mut language = parent_language;
        for attr in attrs {
            if attr.uri.as_deref() == Some(XML_NS) && attr.local_name == "base" {
                base_iri = self.resolve::<S>(parent_base, &attr.value)?;
                if let Some(hash) = base_iri.find('#') {
                    base_iri.truncate(hash);
                }
            } else if attr.uri.as_deref() == Some(XML_NS) && attr.local_name == "lang" {
                language = if attr.value.is_empty() {
                    None
                } else {
                    Some(attr.value.to_ascii_lowercase())
                };
            }
        }
        Ok((base_iri, language))
    }

    /// Determines the subject of a node element (from `rdf:about`/`rdf:ID`/`rdf:nodeID`, or
    /// a fresh blank node), emits its `rdf:type` and property-attribute triples, and pushes
    /// a [`Frame::NodeElt`]. When this node element is the value of a property (striped
    /// syntax) or a collection item, the edge connecting it to its parent is not emitted
    /// here: it is recorded lazily, once this element's own `end_element` pops its frame
    /// and [`Self::propagate_finished_subject`] hands the subject up to the parent frame.
    fn start_node_element<S: TripleSink>(
        &mut self,
        full_name: &str,
        attrs: &[Attribute],
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        if full_name == RDF_LI {
            return Err(self.err::<S>("rdf:li cannot be used as a node element"));
        }

        let parent_base = self.state.last().expect("non-empty state").base_iri().to_owned();
        let parent_language = self
            .state
            .last()
            .expect("non-empty state")
            .language()
            .map(str::to_owned);
        let (base_iri, language) = self.inherit_base_and_lang(&parent_base, parent_language, attrs, sink)?;

        let mut about_attr = None;
        let mut id_attr = None;
        let mut node_id_attr = None;
        let mut type_attrs = Vec::new();
        let mut property_attrs = Vec::new();

        for attr in attrs {
            let name = attr.full_name();
            match name.as_str() {
                RDF_ABOUT => about_attr = Some(attr.value.clone()),
                RDF_ID => id_attr = Some(attr.value.clone()),
                RDF_NODE_ID => node_id_attr = Some(attr.value.clone()),
                RDF_TYPE => type_attrs.push(attr.value.clone()),
                _ if attr.uri.as_deref() == Some(XML_NS) => {}
                _ if attr.qname == "xmlns" || attr.qname.starts_with("xmlns:") => {}
                _ if RESERVED_RDF_ATTRIBUTES.contains(&name.as_str()) => {
                    return Err(self.err::<S>(format!("{name} is not allowed on a node element")));
                }
                RDF_RESOURCE | RDF_PARSE_TYPE | RDF_DATATYPE => {
                    return Err(self.err::<S>(format!("{name} is not allowed on a node element")));
                }
                _ => property_attrs.push(attr.clone()),
            }
        }

        let present = [about_attr.is_some(), id_attr.is_some(), node_id_attr.is_some()]
            .iter()
            .filter(|p| **p)
            .count();
        if present > 1 {
            return Err(self.err::<S>(
                "a node element cannot combine rdf:about, rdf:ID and rdf:nodeID",
            ));
        }

        let subject = if let Some(about) = about_attr {
            let iri = self.resolve::<S>(&base_iri, &about)?;
            Subject::NamedNode(self.named_node::<S>(iri)?)
        } else if let Some(id) = id_attr {
            if !self.unchecked && !iri_util::is_nc_name(&id) {
                return Err(self.err::<S>(format!("{id} is not a valid NCName")));
            }
            let iri = format!("{base_iri}#{id}");
            if !self.known_rdf_ids.insert(iri.clone()) {
                return Err(self.err::<S>(format!("duplicate rdf:ID `{id}`")));
            }
            Subject::NamedNode(self.named_node::<S>(iri)?)
        } else if let Some(node_id) = node_id_attr {
            if !self.unchecked && !iri_util::is_nc_name(&node_id) {
                return Err(self.err::<S>(format!("{node_id} is not a valid NCName")));
            }
            Subject::BlankNode(BlankNode::new_unchecked(node_id))
        } else {
            Subject::BlankNode(BlankNode::default())
        };

        if full_name != RDF_DESCRIPTION {
            let type_iri = self.named_node::<S>(full_name.to_owned())?;
            sink.add_iri_ref(&subject, &rdf::type_(), &type_iri).map_err(RdfXmlParseError::Sink)?;
        }
        for type_value in type_attrs {
            let iri = self.resolve::<S>(&base_iri, &type_value)?;
            let type_iri = self.named_node::<S>(iri)?;
            sink.add_iri_ref(&subject, &rdf::type_(), &type_iri).map_err(RdfXmlParseError::Sink)?;
        }
        for attr in property_attrs {
            let predicate = self.named_node::<S>(attr.full_name())?;
            self.add_plain_or_lang_literal(&subject, &predicate, &attr.value, language.as_deref(), sink)?;
        }

        self.state.push(Frame::NodeElt {
            base_iri,
            language,
            subject,
            li_counter: 1,
        });
        Ok(())
    }

    fn add_plain_or_lang_literal<S: TripleSink>(
        &self,
        subject: &Subject,
        predicate: &NamedNode,
        value: &str,
        language: Option<&str>,
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        sink.add_plain_literal(subject, predicate, value, language)
            .map_err(RdfXmlParseError::Sink)
    }

    fn start_property_element<S: TripleSink>(
        &mut self,
        full_name: &str,
        attrs: &[Attribute],
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        if full_name == RDF_DESCRIPTION {
            return Err(self.err::<S>("rdf:Description cannot be used as a property element"));
        }

        let (subject, base_iri, language, li_counter) = match self.state.last_mut() {
            Some(Frame::NodeElt {
                subject,
                base_iri,
                language,
                li_counter,
            }) => (subject.clone(), base_iri.clone(), language.clone(), li_counter),
            _ => unreachable!("start_property_element is only reached from a NodeElt frame"),
        };

        let predicate_iri = if full_name == RDF_LI {
            let n = *li_counter;
            *li_counter += 1;
            rdf::li_n(n).into_string()
        } else {
            full_name.to_owned()
        };
        let predicate = self.named_node::<S>(predicate_iri)?;

        let (base_iri, mut elt_language) = self.inherit_base_and_lang(&base_iri, language, attrs, sink)?;

        let mut resource_attr = None;
        let mut node_id_attr = None;
        let mut datatype_attr = None;
        let mut id_attr = None;
        let mut parse_type = ParseType::Default;
        let mut other_attrs = Vec::new();

        for attr in attrs {
            let name = attr.full_name();
            match name.as_str() {
                RDF_RESOURCE => resource_attr = Some(attr.value.clone()),
                RDF_NODE_ID => node_id_attr = Some(attr.value.clone()),
                RDF_DATATYPE => datatype_attr = Some(attr.value.clone()),
                RDF_ID => id_attr = Some(attr.value.clone()),
                RDF_PARSE_TYPE => {
                    parse_type = match attr.value.as_str() {
                        "Literal" => ParseType::Literal,
                        "Resource" => ParseType::Resource,
                        "Collection" => ParseType::Collection,
                        _ => ParseType::Other,
                    };
                }
                _ if attr.uri.as_deref() == Some(XML_NS) => {}
                _ if attr.qname == "xmlns" || attr.qname.starts_with("xmlns:") => {}
                _ if RESERVED_RDF_ATTRIBUTES.contains(&name.as_str()) || name == RDF_TYPE => {
                    return Err(self.err::<S>(format!("{name} is not allowed on a property element")));
                }
                _ => other_attrs.push(attr.clone()),
            }
        }

        if resource_attr.is_some() && node_id_attr.is_some() {
            return Err(self.err::<S>("a property element cannot combine rdf:resource and rdf:nodeID"));
        }
        if !matches!(parse_type, ParseType::Default) && (!other_attrs.is_empty() || datatype_attr.is_some()) {
            return Err(self.err::<S>("rdf:parseType cannot be combined with other property attributes"));
        }

        let reify_iri = match &id_attr {
            Some(id) => {
                if !self.unchecked && !iri_util::is_nc_name(id) {
                    return Err(self.err::<S>(format!("{id} is not a valid NCName")));
                }
                let iri = format!("{base_iri}#{id}");
                if !self.known_rdf_ids.insert(iri.clone()) {
                    return Err(self.err::<S>(format!("duplicate rdf:ID `{id}`")));
                }
                Some(self.named_node::<S>(iri)?)
            }
            None => None,
        };

        match parse_type {
            ParseType::Resource => {
                let object = Subject::BlankNode(BlankNode::default());
                sink.add_non_literal(&subject, &predicate, &object)
                    .map_err(RdfXmlParseError::Sink)?;
                if let Some(reify_iri) = &reify_iri {
                    self.reify(reify_iri, &subject, &predicate, &Term::from(object.clone()), sink)?;
                }
                self.state.push(Frame::NodeElt {
                    base_iri,
                    language: elt_language,
                    subject: object,
                    li_counter: 1,
                });
                return Ok(());
            }
            ParseType::Collection => {
                self.state.push(Frame::ParseTypeCollectionPropertyElt {
                    iri: predicate,
                    base_iri,
                    language: elt_language,
                    subject,
                    items: Vec::new(),
                    id_attr: reify_iri.map(NamedNode::into_string),
                });
                return Ok(());
            }
            ParseType::Literal => {
                self.state.push(Frame::ParseTypeLiteralPropertyElt {
                    iri: predicate,
                    base_iri,
                    language: elt_language,
                    subject,
                    writer: XmlLiteralWriter::new(),
                    id_attr: reify_iri.map(NamedNode::into_string),
                    declared_scopes: Vec::new(),
                });
                return Ok(());
            }
            ParseType::Default | ParseType::Other => {}
        }

        if let Some(resource) = resource_attr {
            let iri = self.resolve::<S>(&base_iri, &resource)?;
            let object = Subject::NamedNode(self.named_node::<S>(iri)?);
            sink.add_non_literal(&subject, &predicate, &object)
                .map_err(RdfXmlParseError::Sink)?;
            if let Some(reify_iri) = &reify_iri {
                self.reify(reify_iri, &subject, &predicate, &Term::from(object), sink)?;
            }
            self.state.push(Frame::FinishedPropertyElt);
            return Ok(());
        }

        if let Some(node_id) = node_id_attr {
            if !self.unchecked && !iri_util::is_nc_name(&node_id) {
                return Err(self.err::<S>(format!("{node_id} is not a valid NCName")));
            }
            let object = Subject::BlankNode(BlankNode::new_unchecked(node_id));
            sink.add_non_literal(&subject, &predicate, &object)
                .map_err(RdfXmlParseError::Sink)?;
            if let Some(reify_iri) = &reify_iri {
                self.reify(reify_iri, &subject, &predicate, &Term::from(object), sink)?;
            }
            self.state.push(Frame::FinishedPropertyElt);
            return Ok(());
        }

        if !other_attrs.is_empty() {
            let object = Subject::BlankNode(BlankNode::default());
            sink.add_non_literal(&subject, &predicate, &object)
                .map_err(RdfXmlParseError::Sink)?;
            for attr in &other_attrs {
                let attr_predicate = self.named_node::<S>(attr.full_name())?;
                self.add_plain_or_lang_literal(
                    &object,
                    &attr_predicate,
                    &attr.value,
                    elt_language.as_deref(),
                    sink,
                )?;
            }
            if let Some(reify_iri) = &reify_iri {
                self.reify(reify_iri, &subject, &predicate, &Term::from(object), sink)?;
            }
            self.state.push(Frame::FinishedPropertyElt);
            return Ok(());
        }

        self.state.push(Frame::PropertyElt {
            iri: predicate,
            base_iri,
            language: elt_language,
            subject,
            object: None,
            id_attr: reify_iri.map(NamedNode::into_string),
            datatype_attr,
        });
        Ok(())
    }

    pub fn end_element<S: TripleSink>(
        &mut self,
        qname: &str,
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        if self.literal_depth > 0 {
            self.literal_depth -= 1;
            if let Some(Frame::ParseTypeLiteralPropertyElt { writer, declared_scopes, .. }) =
                self.state.last_mut()
            {
                writer.end_element(qname);
                declared_scopes.pop();
            }
            return Ok(());
        }
        let frame = self.state.pop().expect("end_element without a matching start_element");
        match frame {
            Frame::Doc { .. } => Err(self.err::<S>("unexpected end tag at the top level")),
            Frame::Rdf { .. } => Ok(()),
            Frame::FinishedPropertyElt => Ok(()),
            Frame::NodeElt { subject, .. } => {
                self.propagate_finished_subject(subject, sink)
            }
            Frame::PropertyElt {
                iri,
                base_iri,
                language,
                subject,
                object,
                id_attr,
                datatype_attr,
            } => {
                match object {
                    Some(PropertyObject::Node(object_subject)) => {
                        sink.add_non_literal(&subject, &iri, &object_subject)
                            .map_err(RdfXmlParseError::Sink)?;
                        if let Some(id) = &id_attr {
                            let reify_iri = self.named_node::<S>(id.clone())?;
                            self.reify(&reify_iri, &subject, &iri, &Term::from(object_subject), sink)?;
                        }
                    }
                    Some(PropertyObject::Text(value)) => {
                        self.emit_literal_and_reify(
                            &subject, &iri, &value, &base_iri, language, datatype_attr, id_attr, sink,
                        )?;
                    }
                    None => {
                        self.emit_literal_and_reify(
                            &subject, &iri, "", &base_iri, language, datatype_attr, id_attr, sink,
                        )?;
                    }
                }
                Ok(())
            }
            Frame::ParseTypeCollectionPropertyElt {
                iri,
                subject,
                items,
                id_attr,
                ..
            } => self.finish_collection(&subject, &iri, items, id_attr, sink),
            Frame::ParseTypeLiteralPropertyElt {
                iri,
                subject,
                writer,
                id_attr,
                ..
            } => {
                let literal = Literal::new_typed(writer.into_inner(), rdf::xml_literal());
                sink.add_typed_literal(&subject, &iri, literal.value(), &rdf::xml_literal())
                    .map_err(RdfXmlParseError::Sink)?;
                if let Some(id) = &id_attr {
                    let reify_iri = self.named_node::<S>(id.clone())?;
                    self.reify(
                        &reify_iri,
                        &subject,
                        &iri,
                        &Term::Literal(literal),
                        sink,
                    )?;
                }
                Ok(())
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn emit_literal_and_reify<S: TripleSink>(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        value: &str,
        base_iri: &str,
        language: Option<String>,
        datatype_attr: Option<String>,
        id_attr: Option<String>,
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        let literal = match datatype_attr {
            Some(datatype) => {
                let iri = self.resolve::<S>(base_iri, &datatype)?;
                Literal::new_typed(value, self.named_node::<S>(iri)?)
            }
            None => match language {
                Some(language) => Literal::new_language_tagged(value, language)
                    .map_err(|e| self.err::<S>(e.to_string()))?,
                None => Literal::new_simple(value),
            },
        };
        match &literal {
            Literal::Typed { datatype, .. } => {
                sink.add_typed_literal(subject, predicate, literal.value(), datatype)
                    .map_err(RdfXmlParseError::Sink)?;
            }
            Literal::Simple(_) => {
                sink.add_plain_literal(subject, predicate, literal.value(), None)
                    .map_err(RdfXmlParseError::Sink)?;
            }
            Literal::LanguageTagged { language, .. } => {
                sink.add_plain_literal(subject, predicate, literal.value(), Some(language))
                    .map_err(RdfXmlParseError::Sink)?;
            }
        }
        if let Some(id) = &id_attr {
            let reify_iri = self.named_node::<S>(id.clone())?;
            self.reify(&reify_iri, subject, predicate, &Term::Literal(literal), sink)?;
        }
        Ok(())
    }

    fn finish_collection<S: TripleSink>(
        &mut self,
        subject: &Subject,
        predicate: &NamedNode,
        items: Vec<Subject>,
        id_attr: Option<String>,
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        if items.is_empty() {
            sink.add_iri_ref(subject, predicate, &rdf::nil()).map_err(RdfXmlParseError::Sink)?;
            if let Some(id) = &id_attr {
                let reify_iri = self.named_node::<S>(id.clone())?;
                self.reify(&reify_iri, subject, predicate, &Term::NamedNode(rdf::nil()), sink)?;
            }
            return Ok(());
        }

        let head = Subject::BlankNode(BlankNode::default());
        sink.add_non_literal(subject, predicate, &head).map_err(RdfXmlParseError::Sink)?;
        if let Some(id) = &id_attr {
            let reify_iri = self.named_node::<S>(id.clone())?;
            self.reify(&reify_iri, subject, predicate, &Term::from(head.clone()), sink)?;
        }

        let mut cell = head;
        let mut iter = items.into_iter().peekable();
        while let Some(item) = iter.next() {
            sink.add_non_literal(&cell, &rdf::first(), &item).map_err(RdfXmlParseError::Sink)?;
            if iter.peek().is_some() {
                let next_cell = Subject::BlankNode(BlankNode::default());
                sink.add_non_literal(&cell, &rdf::rest(), &next_cell).map_err(RdfXmlParseError::Sink)?;
                cell = next_cell;
            } else {
                sink.add_iri_ref(&cell, &rdf::rest(), &rdf::nil()).map_err(RdfXmlParseError::Sink)?;
            }
        }
        Ok(())
    }

    fn propagate_finished_subject<S: TripleSink>(
        &mut self,
        subject: Subject,
        _sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        match self.state.last_mut() {
            Some(Frame::PropertyElt { object, .. }) => {
                *object = Some(PropertyObject::Node(subject));
            }
            Some(Frame::ParseTypeCollectionPropertyElt { items, .. }) => {
                items.push(subject);
            }
            _ => {}
        }
        Ok(())
    }

    fn reify<S: TripleSink>(
        &self,
        reify_iri: &NamedNode,
        subject: &Subject,
        predicate: &NamedNode,
        object: &Term,
        sink: &mut S,
    ) -> Result<(), RdfXmlParseError<S::Error>> {
        let reify_subject = Subject::NamedNode(reify_iri.clone());
        sink.add_iri_ref(&reify_subject, &rdf::type_(), &rdf::statement())
            .map_err(RdfXmlParseError::Sink)?;
        sink.add_non_literal(&reify_subject, &rdf::subject(), subject)
            .map_err(RdfXmlParseError::Sink)?;
        sink.add_iri_ref(&reify_subject, &rdf::predicate(), predicate)
            .map_err(RdfXmlParseError::Sink)?;
        match object {
            Term::NamedNode(n) => sink
                .add_iri_ref(&reify_subject, &rdf::object(), n)
                .map_err(RdfXmlParseError::Sink)?,
            Term::BlankNode(n) => sink
                .add_non_literal(&reify_subject, &rdf::object(), &Subject::BlankNode(n.clone()))
                .map_err(RdfXmlParseError::Sink)?,
            Term::Literal(Literal::Typed { value, datatype }) => sink
                .add_typed_literal(&reify_subject, &rdf::object(), value, datatype)
                .map_err(RdfXmlParseError::Sink)?,
            Term::Literal(Literal::Simple(value)) => sink
                .add_plain_literal(&reify_subject, &rdf::object(), value, None)
                .map_err(RdfXmlParseError::Sink)?,
            Term::Literal(Literal::LanguageTagged { value, language }) => sink
                .add_plain_literal(&reify_subject, &rdf::object(), value, Some(language))
                .map_err(RdfXmlParseError::Sink)?,
        }
        Ok(())
    }
}

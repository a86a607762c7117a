//! Constants for the small slice of the `rdf:` and `xsd:` vocabularies the two parsers in
//! this workspace need to emit on their own initiative (list cells, reification, language
//! strings). Grounded on `oxrdf::vocab`, trimmed to what is actually used here.

use crate::NamedNode;

/// The [RDF vocabulary](https://www.w3.org/1999/02/22-rdf-syntax-ns#).
pub mod rdf {
    use super::*;

    macro_rules! rdf_term {
        ($name:ident, $local:expr) => {
            pub fn $name() -> NamedNode {
                NamedNode::new_unchecked(concat!(
                    "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
                    $local
                ))
            }
        };
    }

    rdf_term!(type_, "type");
    rdf_term!(first, "first");
    rdf_term!(rest, "rest");
    rdf_term!(nil, "nil");
    rdf_term!(lang_string, "langString");
    rdf_term!(xml_literal, "XMLLiteral");
    rdf_term!(statement, "Statement");
    rdf_term!(subject, "subject");
    rdf_term!(predicate, "predicate");
    rdf_term!(object, "object");
    rdf_term!(description, "Description");
    rdf_term!(li, "li");
    rdf_term!(bag, "Bag");

    /// `rdf:_n`, the container membership property for position `n` (as used for `rdf:li`
    /// expansion and for weaving `rdf:List` cells).
    pub fn li_n(n: u64) -> NamedNode {
        NamedNode::new_unchecked(format!(
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#_{n}"
        ))
    }
}

/// The small slice of [`xsd:`](https://www.w3.org/2001/XMLSchema#) datatypes referenced by
/// this crate's default typing rules.
pub mod xsd {
    use super::*;

    macro_rules! xsd_term {
        ($name:ident, $local:expr) => {
            pub fn $name() -> NamedNode {
                NamedNode::new_unchecked(concat!("http://www.w3.org/2001/XMLSchema#", $local))
            }
        };
    }

    xsd_term!(string, "string");
    xsd_term!(integer, "integer");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rdf_type_is_the_expected_iri() {
        assert_eq!(rdf::type_().as_str(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    }

    #[test]
    fn li_n_formats_the_index() {
        assert_eq!(
            rdf::li_n(3).as_str(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#_3"
        );
    }
}

use crate::named_node::NamedNode;
use crate::vocab::{rdf, xsd};
use oxilangtag::{LanguageTag, LanguageTagParseError};
use std::fmt;
use std::fmt::Write;

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// Unlike `oxrdf::Literal`, a simple literal and an `xsd:string`-typed literal are kept as
/// distinct variants: the parsers this model feeds never invent an `xsd:string` datatype on
/// their own, they only ever report what the source syntax actually stated.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Literal {
    Simple(String),
    LanguageTagged { value: String, language: String },
    Typed { value: String, datatype: NamedNode },
}

impl Literal {
    #[inline]
    pub fn new_simple(value: impl Into<String>) -> Self {
        Self::Simple(value.into())
    }

    #[inline]
    pub fn new_typed(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self::Typed {
            value: value.into(),
            datatype,
        }
    }

    /// Builds a language-tagged literal, normalizing the tag to lowercase and validating it
    /// against BCP47 via `oxilangtag`.
    pub fn new_language_tagged(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, LanguageTagParseError> {
        let mut language = language.into();
        language.make_ascii_lowercase();
        let language = LanguageTag::parse(language)?.into_inner();
        Ok(Self::LanguageTagged {
            value: value.into(),
            language,
        })
    }

    #[inline]
    pub fn value(&self) -> &str {
        match self {
            Self::Simple(value) | Self::Typed { value, .. } => value,
            Self::LanguageTagged { value, .. } => value,
        }
    }

    #[inline]
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::LanguageTagged { language, .. } => Some(language),
            _ => None,
        }
    }

    /// The literal's datatype. Simple literals carry `xsd:string`, language-tagged literals
    /// carry `rdf:langString`, matching the RDF 1.1 concepts mapping.
    pub fn datatype(&self) -> NamedNode {
        match self {
            Self::Simple(_) => xsd::string(),
            Self::LanguageTagged { .. } => rdf::lang_string(),
            Self::Typed { datatype, .. } => datatype.clone(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.value().chars() {
            match c {
                '\u{8}' => f.write_str("\\b")?,
                '\t' => f.write_str("\\t")?,
                '\n' => f.write_str("\\n")?,
                '\u{c}' => f.write_str("\\f")?,
                '\r' => f.write_str("\\r")?,
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')?;
        match self {
            Self::Simple(_) => Ok(()),
            Self::LanguageTagged { language, .. } => write!(f, "@{language}"),
            Self::Typed { datatype, .. } => write!(f, "^^{datatype}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_literal_datatype_is_xsd_string() {
        let l = Literal::new_simple("hello");
        assert_eq!(l.datatype(), xsd::string());
        assert_eq!(l.language(), None);
    }

    #[test]
    fn language_tagged_literal_is_lowercased() {
        let l = Literal::new_language_tagged("hi", "EN-GB").unwrap();
        assert_eq!(l.language(), Some("en-gb"));
    }

    #[test]
    fn display_escapes_quotes_and_backslashes() {
        let l = Literal::new_simple("a\"b\\c\nd");
        assert_eq!(l.to_string(), "\"a\\\"b\\\\c\\nd\"");
    }

    #[test]
    fn typed_literal_display_has_datatype_suffix() {
        let l = Literal::new_typed("42", xsd::integer());
        assert_eq!(
            l.to_string(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }
}

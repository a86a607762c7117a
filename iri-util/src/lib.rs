//! The two IRI operations the grammar cores delegate rather than reimplement
//! (`resolve`/`is_absolute`), plus the XML `Name`/`NCName` character classes `rdfxml-parser`
//! needs to validate `rdf:ID`/`rdf:nodeID` values and element/attribute names.
//!
//! Grounded on `oxiri` and on `oxrdfxml::utils`'s `is_name`/`is_nc_name` character classes.

pub use oxiri::IriParseError;
use oxiri::Iri;

/// Returns whether `iri` is a syntactically valid *absolute* IRI.
pub fn is_absolute(iri: &str) -> bool {
    Iri::parse(iri).is_ok()
}

/// Resolves `reference` against `base`, which must itself already be absolute.
///
/// This is the single entry point both parsers use for turning `rdf:about`/`xml:base`/
/// relative-IRI-object text into absolute IRIs.
pub fn resolve(base: &str, reference: &str) -> Result<String, IriParseError> {
    let base = Iri::parse(base)?;
    Ok(base.resolve(reference)?.into_inner())
}

/// `NameStartChar` from the XML 1.0 `Name` production (includes `:` since RDF/XML uses
/// qualified names before namespace resolution splits them).
pub fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':'
        | 'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{02FF}'
        | '\u{0370}'..='\u{037D}'
        | '\u{037F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// `NameChar` from the XML 1.0 `Name` production.
pub fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c, '-' | '.' | '0'..='9' | '\u{B7}' | '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

/// Whether `name` is a well-formed XML `Name`.
pub fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    if !chars.next().is_some_and(is_name_start_char) {
        return false;
    }
    chars.all(is_name_char)
}

/// Whether `name` is a well-formed XML `NCName` (a `Name` without a `:`). `rdf:ID` and
/// `rdf:nodeID` values must be NCNames.
pub fn is_nc_name(name: &str) -> bool {
    is_name(name) && !name.contains(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_iri_is_accepted() {
        assert!(is_absolute("http://example.com/foo"));
    }

    #[test]
    fn relative_reference_is_rejected() {
        assert!(!is_absolute("foo/bar"));
    }

    #[test]
    fn resolve_handles_relative_paths() {
        assert_eq!(
            resolve("http://example.com/a/b", "../c").unwrap(),
            "http://example.com/c"
        );
    }

    #[test]
    fn resolve_handles_fragment_only_references() {
        assert_eq!(
            resolve("http://example.com/a", "#frag").unwrap(),
            "http://example.com/a#frag"
        );
    }

    #[test]
    fn nc_name_rejects_colon() {
        assert!(is_name("a:b"));
        assert!(!is_nc_name("a:b"));
    }

    #[test]
    fn nc_name_rejects_leading_digit() {
        assert!(!is_nc_name("1abc"));
    }
}

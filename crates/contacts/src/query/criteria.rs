//! Criteria parsing: raw argument text into keyword groups per field.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ContactsError, Result};

use super::arguments::{
    tokenize_arguments, MARKER_FACULTY, MARKER_MODULE, MARKER_NAME, MARKER_TAG,
};

/// A field that criteria can filter on.
///
/// The declaration order is the evaluation order of the combined predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CriteriaField {
    Name,
    Tag,
    Faculty,
    Module,
}

impl CriteriaField {
    pub const ALL: [CriteriaField; 4] = [Self::Name, Self::Tag, Self::Faculty, Self::Module];

    pub fn marker(self) -> &'static str {
        match self {
            Self::Name => MARKER_NAME,
            Self::Tag => MARKER_TAG,
            Self::Faculty => MARKER_FACULTY,
            Self::Module => MARKER_MODULE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Tag => "tag",
            Self::Faculty => "faculty",
            Self::Module => "module",
        }
    }

    fn markers() -> [&'static str; 4] {
        Self::ALL.map(Self::marker)
    }
}

impl fmt::Display for CriteriaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword lists keyed by field. Every present field has at least one keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaGroup {
    fields: BTreeMap<CriteriaField, Vec<String>>,
}

impl CriteriaGroup {
    /// Builds a group directly; fields with no keywords are dropped.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (CriteriaField, Vec<String>)>,
    {
        Self {
            fields: fields
                .into_iter()
                .filter(|(_, keywords)| !keywords.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self, field: CriteriaField) -> Option<&[String]> {
        self.fields.get(&field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Present fields in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (CriteriaField, &[String])> {
        self.fields
            .iter()
            .map(|(field, keywords)| (*field, keywords.as_slice()))
    }
}

/// What to do with input that contains no marker at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerPolicy {
    /// Markerless input is a format error.
    #[default]
    Required,
    /// Markerless, non-empty input is a list of name keywords.
    ImplicitName,
}

/// Parses filter arguments such as `n/Alice Bob f/Computing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriteriaParser {
    policy: MarkerPolicy,
}

impl CriteriaParser {
    pub fn new(policy: MarkerPolicy) -> Self {
        Self { policy }
    }

    /// Returns true if `input` contains at least one criteria marker.
    pub fn has_markers(input: &str) -> bool {
        tokenize_arguments(input, &CriteriaField::markers()).has_any_marker()
    }

    pub fn parse(&self, input: &str) -> Result<CriteriaGroup> {
        let markers = CriteriaField::markers();
        let arguments = tokenize_arguments(input, &markers);

        if !arguments.has_any_marker() {
            return match self.policy {
                MarkerPolicy::ImplicitName if !arguments.preamble().is_empty() => {
                    Ok(CriteriaGroup::from_fields([(
                        CriteriaField::Name,
                        split_keywords(arguments.preamble()),
                    )]))
                }
                _ => Err(ContactsError::Format(
                    "at least one of n/, t/, m/ or f/ must be given".to_string(),
                )),
            };
        }

        if !arguments.preamble().is_empty() {
            return Err(ContactsError::Format(format!(
                "unexpected text before the first marker: {}",
                arguments.preamble()
            )));
        }

        arguments.verify_no_duplicates(&markers)?;

        let mut fields = BTreeMap::new();
        for field in CriteriaField::ALL {
            let Some(text) = arguments.value(field.marker()) else {
                continue;
            };
            let keywords = split_keywords(text);
            if keywords.is_empty() {
                return Err(ContactsError::Format(format!(
                    "{} requires at least one keyword",
                    field.marker()
                )));
            }
            fields.insert(field, keywords);
        }

        Ok(CriteriaGroup { fields })
    }
}

fn split_keywords(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required() -> CriteriaParser {
        CriteriaParser::new(MarkerPolicy::Required)
    }

    fn assert_format_error(result: Result<CriteriaGroup>) {
        match result {
            Err(ContactsError::Format(_)) => {}
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn parses_single_field() {
        let group = required().parse(" n/Alice   Bob ").expect("parse");
        assert_eq!(group.len(), 1);
        assert_eq!(
            group.keywords(CriteriaField::Name),
            Some(&["Alice".to_string(), "Bob".to_string()][..])
        );
    }

    #[test]
    fn parses_compound_fields_in_fixed_order() {
        let group = required()
            .parse("m/CS2103T f/Computing t/friends n/Alice")
            .expect("parse");
        let order = group.iter().map(|(field, _)| field).collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                CriteriaField::Name,
                CriteriaField::Tag,
                CriteriaField::Faculty,
                CriteriaField::Module
            ]
        );
    }

    #[test]
    fn empty_keyword_after_marker_is_rejected() {
        assert_format_error(required().parse("n/"));
        assert_format_error(required().parse("n/Alice t/"));
        assert_format_error(required().parse("f/   "));
    }

    #[test]
    fn preamble_with_markers_is_rejected() {
        assert_format_error(required().parse("1 n/Alice"));
        assert_format_error(required().parse("abc n/Alice"));
    }

    #[test]
    fn duplicate_markers_are_rejected() {
        assert_format_error(required().parse("n/Alice n/Bob"));
    }

    #[test]
    fn markerless_input_depends_on_policy() {
        assert_format_error(required().parse("Alice Bob"));
        assert_format_error(required().parse("   "));

        let implicit = CriteriaParser::new(MarkerPolicy::ImplicitName);
        let group = implicit.parse("  Alice Bob ").expect("implicit name");
        assert_eq!(
            group.keywords(CriteriaField::Name),
            Some(&["Alice".to_string(), "Bob".to_string()][..])
        );
        assert_format_error(implicit.parse("   "));
    }

    #[test]
    fn from_fields_drops_empty_keyword_lists() {
        let group = CriteriaGroup::from_fields([
            (CriteriaField::Tag, vec!["friends".to_string()]),
            (CriteriaField::Module, Vec::new()),
        ]);
        assert_eq!(group.len(), 1);
        assert!(group.keywords(CriteriaField::Module).is_none());
    }
}

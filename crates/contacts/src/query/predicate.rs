//! Combined contact predicate built from a criteria group.

use crate::model::Contact;

use super::criteria::{CriteriaField, CriteriaGroup};
use super::text_match::any_keyword_matches;

/// Matcher for a single field: true iff any keyword matches any value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMatcher {
    Name(Vec<String>),
    Tag(Vec<String>),
    Faculty(Vec<String>),
    Module(Vec<String>),
}

impl FieldMatcher {
    /// Builds a matcher for `field`, lowercasing the keywords once.
    pub fn new(field: CriteriaField, keywords: &[String]) -> Self {
        let keywords = keywords
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .collect::<Vec<_>>();
        match field {
            CriteriaField::Name => Self::Name(keywords),
            CriteriaField::Tag => Self::Tag(keywords),
            CriteriaField::Faculty => Self::Faculty(keywords),
            CriteriaField::Module => Self::Module(keywords),
        }
    }

    pub fn field(&self) -> CriteriaField {
        match self {
            Self::Name(_) => CriteriaField::Name,
            Self::Tag(_) => CriteriaField::Tag,
            Self::Faculty(_) => CriteriaField::Faculty,
            Self::Module(_) => CriteriaField::Module,
        }
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            Self::Name(keywords) => {
                any_keyword_matches(std::iter::once(contact.name().as_str()), keywords)
            }
            Self::Tag(keywords) => {
                any_keyword_matches(contact.tags().iter().map(|tag| tag.as_str()), keywords)
            }
            Self::Faculty(keywords) => any_keyword_matches(
                contact.faculties().iter().map(|faculty| faculty.as_str()),
                keywords,
            ),
            Self::Module(keywords) => any_keyword_matches(
                contact.modules().iter().map(|module| module.as_str()),
                keywords,
            ),
        }
    }
}

/// Conjunction of field matchers.
///
/// A predicate with no matchers rejects every contact, so search and batch
/// delete never select the whole book by accident.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPredicate {
    matchers: Vec<FieldMatcher>,
}

impl ContactPredicate {
    pub fn from_criteria(criteria: &CriteriaGroup) -> Self {
        Self {
            matchers: criteria
                .iter()
                .map(|(field, keywords)| FieldMatcher::new(field, keywords))
                .collect(),
        }
    }

    pub fn matchers(&self) -> &[FieldMatcher] {
        &self.matchers
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        !self.matchers.is_empty() && self.matchers.iter().all(|matcher| matcher.matches(contact))
    }
}

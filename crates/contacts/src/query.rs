//! Criteria parsing and contact matching.
//!
//! This module provides the filter language shared by `find` and `delete`:
//! - Marker tokenization (`n/`, `t/`, `m/`, `f/`, ...)
//! - Criteria groups (keyword lists per field)
//! - Field matchers and their conjunction

pub mod arguments;
mod criteria;
mod predicate;
mod text_match;

// Re-export public types
pub use arguments::{tokenize_arguments, ArgumentMap};
pub use criteria::{CriteriaField, CriteriaGroup, CriteriaParser, MarkerPolicy};
pub use predicate::{ContactPredicate, FieldMatcher};

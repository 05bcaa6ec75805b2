//! Contact records and their validated fields.

mod contact;
mod fields;

pub use contact::{Contact, ContactChanges};
pub use fields::{Address, Email, Faculty, Favorite, Module, Name, Phone, Tag};

use std::collections::BTreeSet;

use crate::error::Result;

/// Parses each raw value with `parse`, failing on the first invalid one.
pub fn parse_set<T, F>(values: &[&str], parse: F) -> Result<BTreeSet<T>>
where
    T: Ord,
    F: Fn(&str) -> Result<T>,
{
    values.iter().map(|value| parse(value)).collect()
}

//! Mapping between contacts and the eight-column contact table.

use std::collections::BTreeSet;

use crate::error::{ContactsError, Result};
use crate::model::{Address, Contact, Email, Faculty, Favorite, Module, Name, Phone, Tag};

use super::rows::{parse_rows, write_rows, CsvRow};

pub const HEADER: [&str; 8] = [
    "Name",
    "Phone Number",
    "Email",
    "Address",
    "Tags",
    "Modules",
    "Faculties",
    "Favorites",
];

/// Separator between values of a multi-valued cell.
pub const VALUE_SEPARATOR: char = '|';

/// Result of decoding one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Decoded(Contact),
    /// The row could not be turned into a contact. `line` is 1-based.
    Rejected { line: usize, reason: String },
}

impl RowOutcome {
    pub fn contact(&self) -> Option<&Contact> {
        match self {
            Self::Decoded(contact) => Some(contact),
            Self::Rejected { .. } => None,
        }
    }
}

/// Encodes contacts as table text, header first.
pub fn encode_contacts(contacts: &[Contact]) -> Result<String> {
    let header = HEADER.map(str::to_string);
    write_rows(std::iter::once(header).chain(contacts.iter().map(encode_contact)))
}

fn encode_contact(contact: &Contact) -> [String; 8] {
    [
        contact.name().to_string(),
        contact.phone().to_string(),
        contact.email().to_string(),
        contact.address().to_string(),
        join_values(contact.tags().iter().map(Tag::as_str)),
        join_values(contact.modules().iter().map(Module::as_str)),
        join_values(contact.faculties().iter().map(Faculty::as_str)),
        contact.favorite().as_str().to_string(),
    ]
}

fn join_values<'a, I>(values: I) -> String
where
    I: Iterator<Item = &'a str>,
{
    values.collect::<Vec<_>>().join(&VALUE_SEPARATOR.to_string())
}

/// Decodes table text. The first row is the header and is skipped unread.
pub fn decode_contacts(input: &str) -> Result<Vec<RowOutcome>> {
    let rows = parse_rows(input)?;
    Ok(rows.iter().skip(1).map(decode_row).collect())
}

fn decode_row(row: &CsvRow) -> RowOutcome {
    match build_contact(&row.cells) {
        Ok(contact) => RowOutcome::Decoded(contact),
        Err(error) => RowOutcome::Rejected {
            line: row.line,
            reason: error.to_string(),
        },
    }
}

fn build_contact(cells: &[String]) -> Result<Contact> {
    let [name, phone, email, address, tags, modules, faculties, favorite] = cells else {
        return Err(ContactsError::Codec(format!(
            "expected {} cells but found {}",
            HEADER.len(),
            cells.len()
        )));
    };

    Ok(Contact::new(
        Name::parse(name.trim())?,
        Phone::parse(phone.trim())?,
        Email::parse(email.trim())?,
        Address::parse(address.trim())?,
        split_values(tags, Tag::parse)?,
        split_values(modules, Module::parse)?,
        split_values(faculties, Faculty::parse)?,
        parse_favorite(favorite)?,
    ))
}

fn split_values<T, F>(cell: &str, parse: F) -> Result<BTreeSet<T>>
where
    T: Ord,
    F: Fn(&str) -> Result<T>,
{
    cell.split(VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse)
        .collect()
}

fn parse_favorite(cell: &str) -> Result<Favorite> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(Favorite::default());
    }
    Favorite::parse(trimmed)
}

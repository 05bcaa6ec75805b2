use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::{ContactsError, Result};
use crate::model::{
    parse_set, Address, Contact, ContactChanges, Email, Faculty, Favorite, Module, Name, Phone, Tag,
};
use crate::query::arguments::{
    MARKER_ADDRESS, MARKER_EMAIL, MARKER_FACULTY, MARKER_FAVORITE, MARKER_MODULE, MARKER_NAME,
    MARKER_PHONE, MARKER_TAG,
};
use crate::query::{tokenize_arguments, ArgumentMap, CriteriaParser, MarkerPolicy};

use super::types::*;

const CONTACT_MARKERS: [&str; 8] = [
    MARKER_NAME,
    MARKER_PHONE,
    MARKER_EMAIL,
    MARKER_ADDRESS,
    MARKER_TAG,
    MARKER_MODULE,
    MARKER_FACULTY,
    MARKER_FAVORITE,
];

const SINGLE_VALUED_MARKERS: [&str; 5] = [
    MARKER_NAME,
    MARKER_PHONE,
    MARKER_EMAIL,
    MARKER_ADDRESS,
    MARKER_FAVORITE,
];

/// Parses one line of user input. `find_policy` decides how `find` treats
/// text without markers; `delete` always reads markerless text as an index.
pub fn parse_command(input: &str, find_policy: MarkerPolicy) -> Result<Command> {
    let input = input.trim();
    let (word, arguments) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };

    match word {
        "" => Err(ContactsError::Format(format!(
            "no command given, try {COMMAND_HELP}"
        ))),
        COMMAND_ADD => parse_add(arguments),
        COMMAND_EDIT => parse_edit(arguments),
        COMMAND_DELETE => parse_delete(arguments),
        COMMAND_FIND => CriteriaParser::new(find_policy)
            .parse(arguments)
            .map(Command::Find)
            .map_err(|error| with_usage(error, USAGE_FIND)),
        COMMAND_LIST => Ok(Command::List),
        COMMAND_IMPORT => parse_import(arguments),
        COMMAND_EXPORT => Ok(Command::Export),
        COMMAND_SELECT => parse_select(arguments),
        COMMAND_HELP => Ok(Command::Help),
        COMMAND_EXIT => Ok(Command::Exit),
        unknown => Err(ContactsError::Format(format!("unknown command {unknown}"))),
    }
}

fn with_usage(error: ContactsError, usage: &str) -> ContactsError {
    match error {
        ContactsError::Format(message) => {
            ContactsError::Format(format!("{message}\nUsage: {usage}"))
        }
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Individual commands
// ---------------------------------------------------------------------------

fn parse_add(arguments: &str) -> Result<Command> {
    let map = tokenize_arguments(arguments, &CONTACT_MARKERS);
    let required = [MARKER_NAME, MARKER_PHONE, MARKER_EMAIL, MARKER_ADDRESS];
    if !map.preamble().is_empty() || required.iter().any(|marker| !map.contains(marker)) {
        return Err(ContactsError::Format(format!("Usage: {USAGE_ADD}")));
    }
    map.verify_no_duplicates(&SINGLE_VALUED_MARKERS)?;

    let contact = Contact::new(
        Name::parse(single(&map, MARKER_NAME))?,
        Phone::parse(single(&map, MARKER_PHONE))?,
        Email::parse(single(&map, MARKER_EMAIL))?,
        Address::parse(single(&map, MARKER_ADDRESS))?,
        parse_set(&map.all_values(MARKER_TAG), Tag::parse)?,
        parse_set(&map.all_values(MARKER_MODULE), Module::parse)?,
        parse_set(&map.all_values(MARKER_FACULTY), Faculty::parse)?,
        map.value(MARKER_FAVORITE)
            .map(Favorite::parse)
            .transpose()?
            .unwrap_or_default(),
    );
    Ok(Command::Add(contact))
}

fn single<'a>(map: &'a ArgumentMap, marker: &str) -> &'a str {
    map.value(marker).unwrap_or_default()
}

fn parse_edit(arguments: &str) -> Result<Command> {
    let map = tokenize_arguments(arguments, &CONTACT_MARKERS);
    let index = parse_index(map.preamble()).map_err(|error| with_usage(error, USAGE_EDIT))?;
    map.verify_no_duplicates(&SINGLE_VALUED_MARKERS)?;

    let changes = ContactChanges {
        name: map.value(MARKER_NAME).map(Name::parse).transpose()?,
        phone: map.value(MARKER_PHONE).map(Phone::parse).transpose()?,
        email: map.value(MARKER_EMAIL).map(Email::parse).transpose()?,
        address: map.value(MARKER_ADDRESS).map(Address::parse).transpose()?,
        tags: replacement_set(&map, MARKER_TAG, Tag::parse)?,
        modules: replacement_set(&map, MARKER_MODULE, Module::parse)?,
        faculties: replacement_set(&map, MARKER_FACULTY, Faculty::parse)?,
        favorite: map.value(MARKER_FAVORITE).map(Favorite::parse).transpose()?,
    };
    if changes.is_empty() {
        return Err(ContactsError::Format(format!(
            "at least one field to edit must be provided\nUsage: {USAGE_EDIT}"
        )));
    }
    Ok(Command::Edit { index, changes })
}

/// `None` when the marker is absent; a lone empty value clears the set.
fn replacement_set<T, F>(map: &ArgumentMap, marker: &str, parse: F) -> Result<Option<BTreeSet<T>>>
where
    T: Ord,
    F: Fn(&str) -> Result<T>,
{
    let values = map.all_values(marker);
    match values.as_slice() {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        values => parse_set(values, parse).map(Some),
    }
}

fn parse_delete(arguments: &str) -> Result<Command> {
    if !CriteriaParser::has_markers(arguments) {
        return parse_index(arguments)
            .map(|index| Command::Delete(DeleteTarget::Index(index)))
            .map_err(|error| with_usage(error, USAGE_DELETE));
    }
    CriteriaParser::new(MarkerPolicy::Required)
        .parse(arguments)
        .map(|criteria| Command::Delete(DeleteTarget::Criteria(criteria)))
        .map_err(|error| with_usage(error, USAGE_DELETE))
}

fn parse_import(arguments: &str) -> Result<Command> {
    let path = PathBuf::from(arguments);
    if !arguments.ends_with(".csv") || !path.is_file() {
        return Err(ContactsError::Format(format!(
            "{arguments:?} is not an existing .csv file\nUsage: {USAGE_IMPORT}"
        )));
    }
    Ok(Command::Import(path))
}

fn parse_select(arguments: &str) -> Result<Command> {
    if arguments.is_empty() {
        return Err(ContactsError::Format(format!("Usage: {USAGE_SELECT}")));
    }
    Ok(Command::Select(arguments.to_string()))
}

/// Parses a one-based index into a zero-based one.
fn parse_index(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(index) if index > 0 => Ok(index - 1),
        _ => Err(ContactsError::Format(format!(
            "index must be a positive integer, got {:?}",
            text.trim()
        ))),
    }
}

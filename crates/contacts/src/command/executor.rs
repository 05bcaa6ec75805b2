use crate::book::AddressBook;
use crate::codec::{read_contacts, write_contacts, RowOutcome};
use crate::directory::faculty_admins;
use crate::error::{ContactsError, Result};
use crate::query::ContactPredicate;

use super::types::*;

pub const MESSAGE_INVALID_INDEX: &str = "The contact index provided is invalid";
pub const MESSAGE_NO_MATCHES_TO_DELETE: &str = "No contacts found matching the criteria to delete.";
pub const MESSAGE_EMPTY_EXPORT: &str = "Unable to export due to empty address book";

/// Runs `command` against `book`. On error the book is left unchanged.
pub fn execute(
    command: Command,
    book: &mut AddressBook,
    context: &CommandContext,
) -> Result<CommandOutcome> {
    let outcome = match command {
        Command::Add(contact) => {
            let feedback = format!("New contact added: {contact}");
            book.add(contact)?;
            book.clear_filter();
            CommandOutcome::mutated(feedback)
        }
        Command::Edit { index, changes } => {
            let target = book
                .displayed_at(index)
                .cloned()
                .ok_or_else(|| ContactsError::Logic(MESSAGE_INVALID_INDEX.to_string()))?;
            let edited = changes.apply(&target);
            let feedback = format!("Edited contact: {edited}");
            book.replace(&target, edited)?;
            CommandOutcome::mutated(feedback)
        }
        Command::Delete(DeleteTarget::Index(index)) => {
            let target = book
                .displayed_at(index)
                .cloned()
                .ok_or_else(|| ContactsError::Logic(MESSAGE_INVALID_INDEX.to_string()))?;
            let removed = book.remove(&target)?;
            CommandOutcome::mutated(format!("Deleted contact: {removed}"))
        }
        Command::Delete(DeleteTarget::Criteria(criteria)) => {
            let removed = book.remove_matching(&ContactPredicate::from_criteria(&criteria));
            if removed.is_empty() {
                CommandOutcome::unchanged(MESSAGE_NO_MATCHES_TO_DELETE)
            } else {
                CommandOutcome::mutated(format!("Deleted {} contacts.", removed.len()))
            }
        }
        Command::Find(criteria) => {
            book.set_filter(ContactPredicate::from_criteria(&criteria));
            CommandOutcome::unchanged(format!("{} contacts listed!", book.displayed().len()))
        }
        Command::List => {
            book.clear_filter();
            CommandOutcome::unchanged("Listed all contacts")
        }
        Command::Import(path) => import(&path, book)?,
        Command::Export => {
            if book.is_empty() {
                return Err(ContactsError::Logic(MESSAGE_EMPTY_EXPORT.to_string()));
            }
            write_contacts(&context.export_path, book.contacts())?;
            CommandOutcome::unchanged(format!(
                "Exported {} contacts to {}",
                book.len(),
                context.export_path.display()
            ))
        }
        Command::Select(faculty) => select(&faculty, book)?,
        Command::Help => CommandOutcome::unchanged(help_text()),
        Command::Exit => CommandOutcome {
            feedback: "Exiting CampusBook as requested ...".to_string(),
            mutated: false,
            exit: true,
        },
    };

    if outcome.mutated {
        log::info!("{}", outcome.feedback);
    }
    Ok(outcome)
}

fn import(path: &std::path::Path, book: &mut AddressBook) -> Result<CommandOutcome> {
    let outcomes = read_contacts(path)?;
    let mut contacts = Vec::with_capacity(outcomes.len());
    let mut invalid = 0;
    for outcome in outcomes {
        match outcome {
            RowOutcome::Decoded(contact) => contacts.push(contact),
            RowOutcome::Rejected { line, reason } => {
                log::warn!("skipping line {line} of {}: {reason}", path.display());
                invalid += 1;
            }
        }
    }

    let (added, duplicates) = book.add_all(contacts);
    if added > 0 {
        book.clear_filter();
    }
    let feedback = format!(
        "Imported {added} contact(s). Skipped {duplicates} duplicate(s) and {invalid} invalid row(s)."
    );
    Ok(if added > 0 {
        CommandOutcome::mutated(feedback)
    } else {
        CommandOutcome::unchanged(feedback)
    })
}

fn select(faculty: &str, book: &mut AddressBook) -> Result<CommandOutcome> {
    let admins = faculty_admins(faculty)?;
    let mut lines = vec![format!("Added faculty admin contacts for {faculty}.")];
    let mut added = 0;
    for admin in admins {
        if book.has_contact(&admin) {
            lines.push(format!("Skipping duplicate contact: {}", admin.name()));
        } else {
            book.add(admin)?;
            added += 1;
        }
    }
    let feedback = lines.join("\n");
    Ok(if added > 0 {
        CommandOutcome::mutated(feedback)
    } else {
        CommandOutcome::unchanged(feedback)
    })
}

fn help_text() -> String {
    [
        "Commands:",
        USAGE_ADD,
        USAGE_EDIT,
        USAGE_DELETE,
        USAGE_FIND,
        "list",
        USAGE_IMPORT,
        "export",
        USAGE_SELECT,
        "help",
        "exit",
    ]
    .join("\n  ")
}

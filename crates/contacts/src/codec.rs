//! CSV import and export of contacts.
//!
//! Files carry a header row followed by one contact per row:
//! `Name,Phone Number,Email,Address,Tags,Modules,Faculties,Favorites`.
//! Multi-valued cells join their values with `|`.

mod rows;
mod table;

use std::fs;
use std::path::Path;

use crate::error::{io_error_at, Result};
use crate::model::Contact;
use crate::storage::write_atomic;

pub use table::{decode_contacts, encode_contacts, RowOutcome, HEADER, VALUE_SEPARATOR};

// ---------------------------------------------------------------------------
// File access
// ---------------------------------------------------------------------------

/// Writes `contacts` to `path` as a contact table, replacing any existing file.
pub fn write_contacts(path: &Path, contacts: &[Contact]) -> Result<()> {
    let text = encode_contacts(contacts)?;
    write_atomic(path, text.as_bytes())?;
    log::debug!(
        "exported {} contacts to {}",
        contacts.len(),
        path.display()
    );
    Ok(())
}

/// Reads the contact table at `path`.
///
/// Row-level problems are reported per row; only an unreadable file or a
/// broken quote structure fails the whole read.
pub fn read_contacts(path: &Path) -> Result<Vec<RowOutcome>> {
    let text = fs::read_to_string(path).map_err(|error| io_error_at(path, "read", error))?;
    let outcomes = decode_contacts(&text)?;
    let rejected = outcomes
        .iter()
        .filter(|outcome| outcome.contact().is_none())
        .count();
    if rejected > 0 {
        log::warn!(
            "{} of {} rows in {} could not be decoded",
            rejected,
            outcomes.len(),
            path.display()
        );
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactsError;
    use crate::model::test_support::{contact, names};

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("exports").join("contacts.csv");
        let contacts = vec![
            contact("Alice", &["friends"], &["CS2103T"], &["Computing"], true),
            contact("Bob", &[], &[], &[], false),
        ];

        write_contacts(&path, &contacts).expect("write");
        let outcomes = read_contacts(&path).expect("read");
        let read = outcomes
            .iter()
            .filter_map(RowOutcome::contact)
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(names(&read), vec!["Alice", "Bob"]);
        assert_eq!(read, contacts);
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("contacts.csv");
        fs::write(&path, "stale").expect("seed file");

        write_contacts(&path, &[contact("Carl", &[], &[], &[], false)]).expect("write");
        let text = fs::read_to_string(&path).expect("read back");
        assert!(text.starts_with("Name,Phone Number"));
        assert!(!text.contains("stale"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.csv");
        match read_contacts(&path) {
            Err(ContactsError::Io(error)) => {
                assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
                assert!(error.to_string().contains("absent.csv"));
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn broken_quotes_fail_whole_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.csv");
        fs::write(&path, "Name\n\"Alice,94351253\n").expect("seed file");
        assert!(matches!(read_contacts(&path), Err(ContactsError::Codec(_))));
    }
}

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_error_at, ContactsError, Result};
use crate::model::{Address, Contact, Email, Faculty, Favorite, Module, Name, Phone, Tag};

use super::{write_atomic, ContactStorage};

/// Stores the book as `{"contacts": [...]}` in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonContactStorage {
    path: PathBuf,
}

impl JsonContactStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactStorage for JsonContactStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<Vec<Contact>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no saved contacts at {}", self.path.display());
                return Ok(None);
            }
            Err(error) => return Err(io_error_at(&self.path, "read", error)),
        };

        let stored: StoredBook = serde_json::from_slice(&bytes).map_err(|error| {
            ContactsError::Storage(format!(
                "failed to parse {}: {error}",
                self.path.display()
            ))
        })?;

        let contacts = stored
            .contacts
            .into_iter()
            .map(StoredContact::into_contact)
            .collect::<Result<Vec<_>>>()
            .map_err(|error| {
                ContactsError::Storage(format!(
                    "invalid contact in {}: {error}",
                    self.path.display()
                ))
            })?;

        log::debug!(
            "loaded {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(Some(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> Result<()> {
        let stored = StoredBook {
            contacts: contacts.iter().map(StoredContact::from).collect(),
        };
        let serialized = serde_json::to_vec_pretty(&stored)
            .map_err(|error| ContactsError::Storage(format!("serialize error: {error}")))?;
        write_atomic(&self.path, &serialized)?;
        log::debug!(
            "saved {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct StoredBook {
    #[serde(default)]
    contacts: Vec<StoredContact>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredContact {
    name: String,
    phone: String,
    email: String,
    address: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    modules: Vec<String>,
    #[serde(default)]
    faculties: Vec<String>,
    #[serde(default)]
    favorite: bool,
}

impl From<&Contact> for StoredContact {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name().to_string(),
            phone: contact.phone().to_string(),
            email: contact.email().to_string(),
            address: contact.address().to_string(),
            tags: contact.tags().iter().map(ToString::to_string).collect(),
            modules: contact.modules().iter().map(ToString::to_string).collect(),
            faculties: contact.faculties().iter().map(ToString::to_string).collect(),
            favorite: contact.is_favorite(),
        }
    }
}

impl StoredContact {
    fn into_contact(self) -> Result<Contact> {
        Ok(Contact::new(
            Name::parse(&self.name)?,
            Phone::parse(&self.phone)?,
            Email::parse(&self.email)?,
            Address::parse(&self.address)?,
            parse_all(&self.tags, Tag::parse)?,
            parse_all(&self.modules, Module::parse)?,
            parse_all(&self.faculties, Faculty::parse)?,
            Favorite::new(self.favorite),
        ))
    }
}

fn parse_all<T, F>(values: &[String], parse: F) -> Result<BTreeSet<T>>
where
    T: Ord,
    F: Fn(&str) -> Result<T>,
{
    values.iter().map(|value| parse(value)).collect()
}

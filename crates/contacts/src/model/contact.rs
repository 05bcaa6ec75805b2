//! The contact record.

use std::collections::BTreeSet;
use std::fmt;

use super::fields::{Address, Email, Faculty, Favorite, Module, Name, Phone, Tag};

/// A contact in the address book.
///
/// Contacts are immutable once built; an edit produces a new contact that
/// replaces the old one (see [`ContactChanges`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    modules: BTreeSet<Module>,
    faculties: BTreeSet<Faculty>,
    favorite: Favorite,
}

impl Contact {
    /// Builds a contact from already validated fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
        modules: BTreeSet<Module>,
        faculties: BTreeSet<Faculty>,
        favorite: Favorite,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            modules,
            faculties,
            favorite,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn modules(&self) -> &BTreeSet<Module> {
        &self.modules
    }

    pub fn faculties(&self) -> &BTreeSet<Faculty> {
        &self.faculties
    }

    pub fn favorite(&self) -> Favorite {
        self.favorite
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite.is_favorite()
    }

    /// Returns true if both contacts have the same name (case-sensitive).
    ///
    /// This is the duplicate rule used by add, import and select.
    pub fn is_same_contact(&self, other: &Contact) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        write_set(f, "Tags", &self.tags)?;
        write_set(f, "Modules", &self.modules)?;
        write_set(f, "Faculties", &self.faculties)?;
        if self.is_favorite() {
            f.write_str("; Favorite")?;
        }
        Ok(())
    }
}

fn write_set<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    values: &BTreeSet<T>,
) -> fmt::Result {
    if values.is_empty() {
        return Ok(());
    }
    write!(f, "; {label}: ")?;
    for value in values {
        write!(f, "[{value}]")?;
    }
    Ok(())
}

/// Field replacements for an edit.
///
/// `None` keeps the current value. A `Some` set replaces the whole set, so an
/// empty set clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactChanges {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
    pub modules: Option<BTreeSet<Module>>,
    pub faculties: Option<BTreeSet<Faculty>>,
    pub favorite: Option<Favorite>,
}

impl ContactChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds the edited contact; `original` is left untouched.
    pub fn apply(&self, original: &Contact) -> Contact {
        Contact {
            name: self.name.clone().unwrap_or_else(|| original.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| original.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| original.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| original.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| original.tags.clone()),
            modules: self
                .modules
                .clone()
                .unwrap_or_else(|| original.modules.clone()),
            faculties: self
                .faculties
                .clone()
                .unwrap_or_else(|| original.faculties.clone()),
            favorite: self.favorite.unwrap_or(original.favorite),
        }
    }
}

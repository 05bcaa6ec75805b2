//! Validated scalar fields of a contact.
//!
//! Every type here can only be built through its `parse` constructor, which
//! rejects values that break the field's format with
//! [`ContactsError::Validation`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ContactsError, Result};

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9 ]*[A-Za-z0-9])?$").expect("valid name regex"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]{2,}(-[A-Za-z0-9]+)*$",
    )
    .expect("valid email regex")
});

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S(?s:.*\S)?$").expect("valid address regex"));

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

static MODULE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,3}[0-9]{4}[A-Z]?$").expect("valid module regex"));

static FACULTY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]([A-Za-z ]*[A-Za-z])?$").expect("valid faculty regex"));

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and should not start or end with a space";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str =
    "Emails should be of the format local-part@domain, where the domain ends with a label of at least 2 characters";
pub const ADDRESS_CONSTRAINTS: &str =
    "Addresses can take any values, and they should not be blank or start or end with whitespace";
pub const TAG_CONSTRAINTS: &str = "Tag names should be alphanumeric";
pub const MODULE_CONSTRAINTS: &str =
    "Module names should consist of 2 to 3 uppercase letters, followed by 4 digits, and optionally ending with an uppercase letter";
pub const FACULTY_CONSTRAINTS: &str =
    "Faculty names should only contain alphabets and spaces, and should not start or end with a space";
pub const FAVORITE_CONSTRAINTS: &str = "Favorite should be either 'true' or 'false'";

fn create_like<T, F>(
    field: &'static str,
    constructor: F,
    pattern: &Regex,
    constraints: &str,
    value: &str,
) -> Result<T>
where
    F: FnOnce(String) -> T,
{
    if pattern.is_match(value) {
        Ok(constructor(value.to_string()))
    } else {
        Err(ContactsError::validation(field, constraints))
    }
}

// ---------------------------------------------------------------------------
// Scalar fields
// ---------------------------------------------------------------------------

/// Contact name; the identity of a contact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(value: &str) -> Result<Self> {
        create_like("name", Name, &NAME_PATTERN, NAME_CONSTRAINTS, value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: &str) -> Result<Self> {
        create_like("phone", Phone, &PHONE_PATTERN, PHONE_CONSTRAINTS, value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self> {
        create_like("email", Email, &EMAIL_PATTERN, EMAIL_CONSTRAINTS, value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn parse(value: &str) -> Result<Self> {
        create_like(
            "address",
            Address,
            &ADDRESS_PATTERN,
            ADDRESS_CONSTRAINTS,
            value,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Set members
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn parse(value: &str) -> Result<Self> {
        create_like("tag", Tag, &TAG_PATTERN, TAG_CONSTRAINTS, value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// University module code such as `CS2103T`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Module(String);

impl Module {
    pub fn parse(value: &str) -> Result<Self> {
        create_like("module", Module, &MODULE_PATTERN, MODULE_CONSTRAINTS, value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Faculty(String);

impl Faculty {
    pub fn parse(value: &str) -> Result<Self> {
        create_like(
            "faculty",
            Faculty,
            &FACULTY_PATTERN,
            FACULTY_CONSTRAINTS,
            value,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Favorite flag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Favorite(bool);

impl Favorite {
    pub const fn new(is_favorite: bool) -> Self {
        Self(is_favorite)
    }

    /// Parses the literal `true` or `false`.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "true" => Ok(Self(true)),
            "false" => Ok(Self(false)),
            _ => Err(ContactsError::validation("favorite", FAVORITE_CONSTRAINTS)),
        }
    }

    pub fn is_favorite(self) -> bool {
        self.0
    }

    pub fn as_str(self) -> &'static str {
        if self.0 {
            "true"
        } else {
            "false"
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Name, Phone, Email, Address, Tag, Module, Faculty, Favorite);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid<T: fmt::Debug>(result: Result<T>, expected_field: &str) {
        match result {
            Err(ContactsError::Validation { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected validation error for {expected_field}, got {other:?}"),
        }
    }

    #[test]
    fn name_accepts_alphanumerics_and_spaces() {
        assert!(Name::parse("Alice Pauline").is_ok());
        assert!(Name::parse("Peter the 2nd").is_ok());
        assert_invalid(Name::parse(""), "name");
        assert_invalid(Name::parse(" Alice"), "name");
        assert_invalid(Name::parse("Alice*"), "name");
        assert_invalid(Name::parse("Alice "), "name");
        assert!(Name::parse("A").is_ok());
        assert!(Name::parse("Alice  Tan").is_ok());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::parse("911").is_ok());
        assert!(Phone::parse("94351253").is_ok());
        assert_invalid(Phone::parse("91"), "phone");
        assert_invalid(Phone::parse("9435 1253"), "phone");
        assert_invalid(Phone::parse("phone"), "phone");
    }

    #[test]
    fn email_checks_local_part_and_domain() {
        assert!(Email::parse("alice@example.com").is_ok());
        assert!(Email::parse("sci_admin@example.com").is_ok());
        assert!(Email::parse("a+b.c-d@my-host.edu.sg").is_ok());
        assert_invalid(Email::parse("alice"), "email");
        assert_invalid(Email::parse("alice@e"), "email");
        assert_invalid(Email::parse("_alice@example.com"), "email");
        assert_invalid(Email::parse("alice@-example.com"), "email");
    }

    #[test]
    fn address_rejects_surrounding_whitespace() {
        assert!(Address::parse("123 Jurong West Ave 6, #08-111").is_ok());
        assert_invalid(Address::parse(""), "address");
        assert_invalid(Address::parse(" Blk 30"), "address");
        assert_invalid(Address::parse("Blk 30 "), "address");
        assert_invalid(Address::parse("Blk 30\n"), "address");
        assert!(Address::parse("#").is_ok());
        assert!(Address::parse("Blk 30\nUnit \"B\"").is_ok());
    }

    #[test]
    fn module_code_format() {
        assert!(Module::parse("CS2103T").is_ok());
        assert!(Module::parse("GEH1001").is_ok());
        assert!(Module::parse("MA1521").is_ok());
        assert_invalid(Module::parse("cs2103t"), "module");
        assert_invalid(Module::parse("C2103"), "module");
        assert_invalid(Module::parse("CS2103TT"), "module");
    }

    #[test]
    fn faculty_and_tag_formats() {
        assert!(Faculty::parse("Computing").is_ok());
        assert!(Faculty::parse("Arts and Social Sciences").is_ok());
        assert_invalid(Faculty::parse("SoC-1"), "faculty");
        assert_invalid(Faculty::parse(" Computing"), "faculty");
        assert_invalid(Faculty::parse("Computing "), "faculty");
        assert_invalid(Faculty::parse(" "), "faculty");
        assert!(Tag::parse("friends").is_ok());
        assert_invalid(Tag::parse("best friend"), "tag");
    }

    #[test]
    fn favorite_parses_exact_literals() {
        assert!(Favorite::parse("true").expect("true").is_favorite());
        assert!(!Favorite::parse("false").expect("false").is_favorite());
        assert_invalid(Favorite::parse("TRUE"), "favorite");
        assert_invalid(Favorite::parse("yes"), "favorite");
        assert!(!Favorite::default().is_favorite());
    }
}

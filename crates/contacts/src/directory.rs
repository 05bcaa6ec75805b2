//! Built-in directory of faculty admin contacts used by `select`.

use std::collections::BTreeSet;

use crate::error::{ContactsError, Result};
use crate::model::{Address, Contact, Email, Faculty, Favorite, Module, Name, Phone, Tag};

struct FacultyAdmin {
    faculty: &'static str,
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    module: Option<&'static str>,
}

const FACULTY_ADMINS: [FacultyAdmin; 7] = [
    FacultyAdmin {
        faculty: "Science",
        name: "Science Admin",
        phone: "81234567",
        email: "sci_admin@example.com",
        address: "Science Block S1",
        module: None,
    },
    FacultyAdmin {
        faculty: "Business",
        name: "Business Admin",
        phone: "82345678",
        email: "biz_admin@example.com",
        address: "Business School Mochtar Riady Building",
        module: None,
    },
    FacultyAdmin {
        faculty: "Arts",
        name: "Arts Admin",
        phone: "83456789",
        email: "fass_admin@example.com",
        address: "Faculty of Arts and Social Sciences",
        module: None,
    },
    FacultyAdmin {
        faculty: "Computing",
        name: "Computing Admin",
        phone: "84567890",
        email: "soc_admin@example.com",
        address: "School of Computing COM1",
        module: Some("MA1521"),
    },
    FacultyAdmin {
        faculty: "Engineering",
        name: "Engineering Admin",
        phone: "85678901",
        email: "eng_admin@example.com",
        address: "Faculty of Engineering",
        module: Some("EG1311"),
    },
    FacultyAdmin {
        faculty: "Law",
        name: "Law Admin",
        phone: "86789012",
        email: "law_admin@example.com",
        address: "Faculty of Law",
        module: None,
    },
    FacultyAdmin {
        faculty: "Medicine",
        name: "Medicine Admin",
        phone: "87890123",
        email: "med_admin@example.com",
        address: "Yong Loo Lin School of Medicine",
        module: None,
    },
];

/// Faculty names in directory order.
pub fn available_faculties() -> Vec<&'static str> {
    FACULTY_ADMINS.iter().map(|admin| admin.faculty).collect()
}

/// Returns the admin contacts for `faculty` (case-insensitive), or a `Logic`
/// error listing the known faculties.
pub fn faculty_admins(faculty: &str) -> Result<Vec<Contact>> {
    let wanted = faculty.trim();
    let admins = FACULTY_ADMINS
        .iter()
        .filter(|admin| admin.faculty.eq_ignore_ascii_case(wanted))
        .map(FacultyAdmin::to_contact)
        .collect::<Result<Vec<_>>>()?;

    if admins.is_empty() {
        return Err(ContactsError::Logic(format!(
            "Invalid faculty specified. Please choose from the following:\n{}",
            available_faculties().join(", ")
        )));
    }
    Ok(admins)
}

impl FacultyAdmin {
    fn to_contact(&self) -> Result<Contact> {
        let modules = match self.module {
            Some(code) => BTreeSet::from([Module::parse(code)?]),
            None => BTreeSet::new(),
        };
        Ok(Contact::new(
            Name::parse(self.name)?,
            Phone::parse(self.phone)?,
            Email::parse(self.email)?,
            Address::parse(self.address)?,
            BTreeSet::from([Tag::parse("admin")?]),
            modules,
            BTreeSet::from([Faculty::parse(self.faculty)?]),
            Favorite::default(),
        ))
    }
}

//! Contact book engine for CampusBook.
//!
//! This crate provides the core contact functionality:
//! - Validated contact records (name, phone, email, address, tags, modules, faculties)
//! - Criteria parsing and predicate matching shared by search and batch delete
//! - CSV import/export with pipe-delimited multi-valued cells
//! - A favorite-first address book that keeps its ordering under every mutation
//! - The text command layer and a JSON storage adapter

pub mod book;
pub mod codec;
pub mod command;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod query;
pub mod storage;

// Re-export main types
pub use book::{partition_favorites, AddressBook, BookEvent};
pub use codec::{read_contacts, write_contacts, RowOutcome};
pub use command::{execute, parse_command, Command, CommandContext, CommandOutcome};
pub use config::ContactsConfig;
pub use error::{ContactsError, Result};
pub use model::{Address, Contact, Email, Faculty, Favorite, Module, Name, Phone, Tag};
pub use query::{ContactPredicate, CriteriaField, CriteriaGroup, CriteriaParser, MarkerPolicy};
pub use storage::{ContactStorage, JsonContactStorage};

//! The in-memory contact collection and its ordering rule.

mod address_book;
mod partition;

pub use address_book::{AddressBook, BookEvent, MESSAGE_DUPLICATE_CONTACT};
pub use partition::partition_favorites;

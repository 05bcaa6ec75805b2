//! Text commands over the address book.

mod executor;
pub mod parser;
pub mod types;

pub use executor::{execute, MESSAGE_EMPTY_EXPORT, MESSAGE_INVALID_INDEX, MESSAGE_NO_MATCHES_TO_DELETE};
pub use parser::parse_command;
pub use types::{Command, CommandContext, CommandOutcome, DeleteTarget};

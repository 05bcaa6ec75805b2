use std::path::PathBuf;

use crate::config::ContactsConfig;
use crate::model::{Contact, ContactChanges};
use crate::query::CriteriaGroup;

pub const COMMAND_ADD: &str = "add";
pub const COMMAND_EDIT: &str = "edit";
pub const COMMAND_DELETE: &str = "delete";
pub const COMMAND_FIND: &str = "find";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_IMPORT: &str = "import";
pub const COMMAND_EXPORT: &str = "export";
pub const COMMAND_SELECT: &str = "select";
pub const COMMAND_HELP: &str = "help";
pub const COMMAND_EXIT: &str = "exit";

pub const USAGE_ADD: &str = "add n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]... [m/MODULE]... \
     [f/FACULTY]... [fav/true|false]";
pub const USAGE_EDIT: &str = "edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]... \
     [m/MODULE]... [f/FACULTY]... [fav/true|false]";
pub const USAGE_DELETE: &str = "delete INDEX | delete [n/NAME...] [t/TAG...] [m/MODULE...] [f/FACULTY...]";
pub const USAGE_FIND: &str = "find [n/NAME...] [t/TAG...] [m/MODULE...] [f/FACULTY...]";
pub const USAGE_IMPORT: &str = "import PATH_TO_FILE.csv";
pub const USAGE_SELECT: &str = "select FACULTY";

/// A parsed command, ready to run against an address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Contact),
    /// `index` is zero-based into the displayed list.
    Edit {
        index: usize,
        changes: ContactChanges,
    },
    Delete(DeleteTarget),
    Find(CriteriaGroup),
    List,
    Import(PathBuf),
    Export,
    Select(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// Zero-based position in the displayed list.
    Index(usize),
    /// Every contact in the book matching the criteria.
    Criteria(CriteriaGroup),
}

/// Settings a command needs beyond the book itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub export_path: PathBuf,
}

impl CommandContext {
    pub fn new(export_path: impl Into<PathBuf>) -> Self {
        Self {
            export_path: export_path.into(),
        }
    }
}

impl From<&ContactsConfig> for CommandContext {
    fn from(config: &ContactsConfig) -> Self {
        Self::new(config.export_path.clone())
    }
}

/// What a successful command reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub feedback: String,
    /// The stored contacts changed and should be saved.
    pub mutated: bool,
    pub exit: bool,
}

impl CommandOutcome {
    pub fn unchanged(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            mutated: false,
            exit: false,
        }
    }

    pub fn mutated(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            mutated: true,
            exit: false,
        }
    }
}

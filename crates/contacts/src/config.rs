use std::path::PathBuf;

use crate::query::MarkerPolicy;

pub const DATA_PATH_VAR: &str = "CAMPUSBOOK_DATA_PATH";
pub const EXPORT_PATH_VAR: &str = "CAMPUSBOOK_EXPORT_PATH";
pub const IMPLICIT_NAME_SEARCH_VAR: &str = "CAMPUSBOOK_IMPLICIT_NAME_SEARCH";

pub const EXPORT_FILENAME: &str = "CampusBook_contacts.csv";

/// Runtime settings for a CampusBook session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsConfig {
    /// JSON file the book is loaded from and saved to.
    pub data_path: PathBuf,
    /// Destination of `export`.
    pub export_path: PathBuf,
    /// Lets `find` treat markerless text as name keywords.
    pub implicit_name_search: bool,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            export_path: default_export_path(),
            implicit_name_search: false,
        }
    }
}

impl ContactsConfig {
    /// Reads settings from the process environment, falling back to the
    /// platform data and download directories.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            data_path: non_empty(DATA_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_data_path),
            export_path: non_empty(EXPORT_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_export_path),
            implicit_name_search: non_empty(IMPLICIT_NAME_SEARCH_VAR)
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }

    /// Marker policy for `find`.
    pub fn find_policy(&self) -> MarkerPolicy {
        if self.implicit_name_search {
            MarkerPolicy::ImplicitName
        } else {
            MarkerPolicy::Required
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("campusbook"))
        .unwrap_or_else(|| PathBuf::from("data"))
        .join("addressbook.json")
}

fn default_export_path() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(EXPORT_FILENAME)
}

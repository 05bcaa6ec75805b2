//! Persistence of the address book between sessions.

mod json;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{io_error_at, Result};
use crate::model::Contact;

pub use json::JsonContactStorage;

/// Loads and saves the whole contact collection.
pub trait ContactStorage {
    /// Location of the backing file.
    fn path(&self) -> &Path;

    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<Contact>>>;

    fn save(&self, contacts: &[Contact]) -> Result<()>;
}

/// Writes `bytes` to `path` through a sibling temp file and a rename, creating
/// parent directories as needed. The temp file is removed if any step fails.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|error| io_error_at(parent, "create directory", error))?;
    }

    let tmp_path = temp_path_for(path);
    let result = write_and_rename(&tmp_path, path, bytes);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// `book.json` becomes `book.json.tmp`, so targets differing only by
/// extension never share a temp file.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_and_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    {
        let mut output =
            File::create(tmp_path).map_err(|error| io_error_at(tmp_path, "create", error))?;
        output
            .write_all(bytes)
            .and_then(|()| output.sync_all())
            .map_err(|error| io_error_at(tmp_path, "write", error))?;
    }

    fs::rename(tmp_path, path).map_err(|error| io_error_at(path, "finalize", error))?;
    Ok(())
}

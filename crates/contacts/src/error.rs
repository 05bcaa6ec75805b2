use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ContactsError {
    /// Malformed command text. The command is not executed.
    #[error("Invalid command format: {0}")]
    Format(String),

    /// A field value broke its format constraint.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The command was well formed but cannot be applied to the current book.
    #[error("{0}")]
    Logic(String),

    #[error("Malformed table: {0}")]
    Codec(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactsError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactsError>;

/// Wraps an I/O error with the path it happened on, keeping the `Io` variant.
pub fn io_error_at(path: &Path, action: &str, error: std::io::Error) -> ContactsError {
    ContactsError::Io(std::io::Error::new(
        error.kind(),
        format!("failed to {action} {}: {error}", path.display()),
    ))
}

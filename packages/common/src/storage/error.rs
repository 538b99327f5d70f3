use std::fmt;

/// Errors that can occur during object store operations.
#[derive(Debug)]
pub enum StorageError {
    /// The store rejected a write (quota, permissions, transport failure).
    Write(String),
    /// The store rejected a removal.
    Remove(String),
    /// Backend construction or configuration failed.
    Config(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write(msg) => write!(f, "object write failed: {msg}"),
            Self::Remove(msg) => write!(f, "object removal failed: {msg}"),
            Self::Config(msg) => write!(f, "storage configuration error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

//! Error taxonomy for the configuration registry

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::types::EntryType;

/// Errors raised by registration, lookup and persistence.
///
/// A vetoed change is not an error; see [`crate::registry::ChangeOutcome`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An entry with this name is already registered.
    #[error("entry '{0}' is already registered")]
    DuplicateEntry(String),

    /// No entry with this name is registered.
    #[error("entry '{0}' is not registered")]
    UnknownEntry(String),

    /// A value could not be parsed for the entry's declared type.
    #[error("cannot parse '{value}' as {expected} for entry '{name}'")]
    Parse {
        name: String,
        value: String,
        expected: EntryType,
    },

    /// A typed accessor was used on an entry of another type.
    #[error("entry '{name}' holds a {actual} value, not {expected}")]
    TypeMismatch {
        name: String,
        expected: EntryType,
        actual: EntryType,
    },

    /// A descriptor could not be built.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// A file system operation failed.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation table could not be parsed.
    #[error("invalid translation file {path}: {message}")]
    Translations { path: PathBuf, message: String },

    /// The configuration document is structurally invalid.
    #[error("malformed configuration document: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The configuration document could not be written.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] quick_xml::SeError),
}

impl RegistryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

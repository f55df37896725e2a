use core_perms::PermsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors for loading and saving permission documents
#[derive(Error, Debug)]
pub enum Error {
    /// The document parsed but its permissions are invalid
    #[error(transparent)]
    Perms(#[from] PermsError),

    /// Failed to parse YAML
    #[error("YAML parsing failed: {0}")]
    YamlParseError(String),

    /// Failed to parse TOML
    #[error("TOML parsing failed: {0}")]
    TomlParseError(String),

    /// Failed to write a document
    #[error("Serialization failed: {0}")]
    SerializeError(String),

    /// File extension is not one of the supported formats
    #[error("Unsupported document format: {}", .0.display())]
    UnknownFormat(PathBuf),

    /// Reading or writing the document failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

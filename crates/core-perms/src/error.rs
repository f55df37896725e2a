//! Error types for core-perms

use alloc::string::String;
use core::fmt;

/// Result type alias for permission operations
pub type Result<T> = core::result::Result<T, PermsError>;

/// Errors that can occur in permission operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermsError {
    /// Malformed permission text
    Parse(String),

    /// Operation not allowed for the given permission
    /// (negative coverage target, negative grant, negative revoke)
    InvalidOperation(String),

    /// Input shape that is neither a permission string nor a list of them
    UnsupportedInput(String),

    /// Serialization error
    SerializationError(String),

    // ===== Size limits =====
    /// Permission text exceeds the maximum length
    PermissionTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        length: usize,
    },

    /// Permission has too many segments
    PathTooDeep {
        /// Maximum allowed segments
        max: usize,
        /// Actual segment count
        depth: usize,
    },

    /// Parsed set exceeds the maximum number of entries
    TooManyEntries {
        /// Maximum allowed entries
        max: usize,
        /// Attempted number of entries
        attempted: usize,
    },
}

impl fmt::Display for PermsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Invalid permission: {}", msg),
            Self::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            Self::UnsupportedInput(msg) => write!(f, "Cannot process data type: {}", msg),
            Self::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            Self::PermissionTooLong { max, length } => write!(
                f,
                "Permission exceeds maximum {} characters (length: {})",
                max, length
            ),
            Self::PathTooDeep { max, depth } => write!(
                f,
                "Permission exceeds maximum {} segments (depth: {})",
                max, depth
            ),
            Self::TooManyEntries { max, attempted } => write!(
                f,
                "Permission set exceeds maximum {} entries (attempted: {})",
                max, attempted
            ),
        }
    }
}

impl core::error::Error for PermsError {}

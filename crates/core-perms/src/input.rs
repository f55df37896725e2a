//! Input accepted by the mutating and parsing entry points.
//!
//! Callers hand permissions over in whatever shape they hold them: a
//! permission-list string, a list of strings, parsed paths or a whole set.
//! [`PermissionInput`] closes over those shapes and normalizes them to a list
//! of paths before any algorithm runs.

use crate::error::Result;
use crate::path::PermissionPath;
use crate::set::PermissionSet;
use crate::PERMS_DELIMITER;
use alloc::string::String;
use alloc::vec::Vec;

/// One or many permissions, in any of the supported shapes
#[derive(Debug, Clone, PartialEq)]
pub enum PermissionInput {
    /// Permission-list string, e.g. `"document.4,!document.4.edit"`
    Text(String),
    /// One permission string per element
    TextList(Vec<String>),
    /// A single parsed permission
    Path(PermissionPath),
    /// Several parsed permissions
    PathList(Vec<PermissionPath>),
    /// Every entry of an existing set, in order
    Set(PermissionSet),
}

impl PermissionInput {
    /// Normalize into an ordered list of paths
    ///
    /// An empty permission-list string is the empty list, so an empty set
    /// formats and parses back to itself.
    ///
    /// # Errors
    ///
    /// Returns the first parse error encountered; no partial list is returned.
    pub fn into_paths(self) -> Result<Vec<PermissionPath>> {
        match self {
            Self::Text(text) if text.is_empty() => Ok(Vec::new()),
            Self::Text(text) => text.split(PERMS_DELIMITER).map(PermissionPath::parse).collect(),
            Self::TextList(list) => list.iter().map(|p| PermissionPath::parse(p)).collect(),
            Self::Path(path) => Ok(alloc::vec![path]),
            Self::PathList(paths) => Ok(paths),
            Self::Set(set) => Ok(set.into_entries()),
        }
    }
}

impl From<&str> for PermissionInput {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for PermissionInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for PermissionInput {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Vec<String>> for PermissionInput {
    fn from(list: Vec<String>) -> Self {
        Self::TextList(list)
    }
}

impl From<Vec<&str>> for PermissionInput {
    fn from(list: Vec<&str>) -> Self {
        Self::TextList(list.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for PermissionInput {
    fn from(list: &[&str]) -> Self {
        Self::TextList(list.iter().copied().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PermissionInput {
    fn from(list: [&str; N]) -> Self {
        Self::TextList(list.into_iter().map(String::from).collect())
    }
}

impl From<PermissionPath> for PermissionInput {
    fn from(path: PermissionPath) -> Self {
        Self::Path(path)
    }
}

impl From<&PermissionPath> for PermissionInput {
    fn from(path: &PermissionPath) -> Self {
        Self::Path(path.clone())
    }
}

impl From<Vec<PermissionPath>> for PermissionInput {
    fn from(paths: Vec<PermissionPath>) -> Self {
        Self::PathList(paths)
    }
}

impl From<&[PermissionPath]> for PermissionInput {
    fn from(paths: &[PermissionPath]) -> Self {
        Self::PathList(paths.to_vec())
    }
}

impl From<PermissionSet> for PermissionInput {
    fn from(set: PermissionSet) -> Self {
        Self::Set(set)
    }
}

impl From<&PermissionSet> for PermissionInput {
    fn from(set: &PermissionSet) -> Self {
        Self::Set(set.clone())
    }
}

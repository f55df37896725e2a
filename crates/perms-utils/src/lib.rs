// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # perms-utils
//!
//! Loading and saving permission sets as configuration documents.
//!
//! A document carries a single `permissions` key whose value is either a
//! permission-list string or an array of permission strings:
//!
//! ```toml
//! permissions = ["document.4", "!document.4.edit"]
//! ```
//!
//! ```yaml
//! permissions: "document.4,!document.4.edit"
//! ```
//!
//! Sets are returned exactly as written. Use `grant`/`revoke` on the result
//! to normalize it.

#![forbid(unsafe_code)]

pub mod error;

/// Document key holding the permission list
pub const PERMISSIONS_KEY: &str = "permissions";

pub mod parser {
    //! Format-specific document parsers
    use crate::error::{Error, Result};
    use crate::PERMISSIONS_KEY;
    use core_perms::{PermissionInput, PermissionSet, PermsError};
    use serde::Serialize;

    /// Trait for permission document parsers (extensible to other formats)
    pub trait PermissionSetParser {
        /// Parse a permission set from a document
        fn parse(&self, input: &str) -> Result<PermissionSet>;

        /// Render a permission set as a document
        fn render(&self, set: &PermissionSet) -> Result<String>;
    }

    #[derive(Serialize)]
    struct Document<'a> {
        permissions: &'a PermissionSet,
    }

    fn missing_key() -> Error {
        PermsError::UnsupportedInput(format!("document has no `{}` key", PERMISSIONS_KEY)).into()
    }

    fn unsupported(kind: &str) -> Error {
        PermsError::UnsupportedInput(format!(
            "`{}` must be a string or a list of strings, found {}",
            PERMISSIONS_KEY, kind
        ))
        .into()
    }

    fn build(input: PermissionInput) -> Result<PermissionSet> {
        let set = PermissionSet::parse(input)?;
        tracing::debug!(entries = set.len(), "Loaded permission document");
        Ok(set)
    }

    /// TOML parser implementation
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TomlParser;

    impl PermissionSetParser for TomlParser {
        fn parse(&self, input: &str) -> Result<PermissionSet> {
            let table: toml::Table =
                toml::from_str(input).map_err(|e| Error::TomlParseError(e.to_string()))?;
            let value = table.get(PERMISSIONS_KEY).ok_or_else(missing_key)?;

            let input = match value {
                toml::Value::String(text) => PermissionInput::Text(text.clone()),
                toml::Value::Array(items) => PermissionInput::TextList(
                    items
                        .iter()
                        .map(|item| match item {
                            toml::Value::String(text) => Ok(text.clone()),
                            other => Err(unsupported(other.type_str())),
                        })
                        .collect::<Result<Vec<_>>>()?,
                ),
                other => return Err(unsupported(other.type_str())),
            };
            build(input)
        }

        fn render(&self, set: &PermissionSet) -> Result<String> {
            toml::to_string(&Document { permissions: set })
                .map_err(|e| Error::SerializeError(format!("TOML: {}", e)))
        }
    }

    /// YAML parser implementation
    #[derive(Debug, Clone, Copy, Default)]
    pub struct YamlParser;

    fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
        match value {
            serde_yaml::Value::Null => "null",
            serde_yaml::Value::Bool(_) => "boolean",
            serde_yaml::Value::Number(_) => "number",
            serde_yaml::Value::String(_) => "string",
            serde_yaml::Value::Sequence(_) => "sequence",
            serde_yaml::Value::Mapping(_) => "mapping",
            serde_yaml::Value::Tagged(_) => "tagged value",
        }
    }

    impl PermissionSetParser for YamlParser {
        fn parse(&self, input: &str) -> Result<PermissionSet> {
            let document: serde_yaml::Value =
                serde_yaml::from_str(input).map_err(|e| Error::YamlParseError(e.to_string()))?;
            let value = document.get(PERMISSIONS_KEY).ok_or_else(missing_key)?;

            let input = match value {
                serde_yaml::Value::String(text) => PermissionInput::Text(text.clone()),
                serde_yaml::Value::Sequence(items) => PermissionInput::TextList(
                    items
                        .iter()
                        .map(|item| match item {
                            serde_yaml::Value::String(text) => Ok(text.clone()),
                            other => Err(unsupported(yaml_kind(other))),
                        })
                        .collect::<Result<Vec<_>>>()?,
                ),
                other => return Err(unsupported(yaml_kind(other))),
            };
            build(input)
        }

        fn render(&self, set: &PermissionSet) -> Result<String> {
            serde_yaml::to_string(&Document { permissions: set })
                .map_err(|e| Error::SerializeError(format!("YAML: {}", e)))
        }
    }
}

pub mod file {
    //! Loading documents from disk, format chosen by extension
    use crate::error::{Error, Result};
    use crate::parser::{PermissionSetParser, TomlParser, YamlParser};
    use core_perms::PermissionSet;
    use std::path::Path;

    /// Supported document formats
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Format {
        /// `.toml`
        Toml,
        /// `.yaml` / `.yml`
        Yaml,
    }

    impl Format {
        /// Pick the format from a file extension
        pub fn from_path(path: &Path) -> Result<Self> {
            let ext = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_ascii_lowercase);
            match ext.as_deref() {
                Some("toml") => Ok(Self::Toml),
                Some("yaml" | "yml") => Ok(Self::Yaml),
                _ => Err(Error::UnknownFormat(path.to_path_buf())),
            }
        }

        fn parser(self) -> &'static dyn PermissionSetParser {
            match self {
                Self::Toml => &TomlParser,
                Self::Yaml => &YamlParser,
            }
        }
    }

    /// Load a permission set from a `.toml`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<PermissionSet> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        tracing::debug!(path = %path.display(), ?format, "Loading permission document");

        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        format.parser().parse(&text)
    }

    /// Write a permission set to a file in the format its extension names
    pub fn save(path: impl AsRef<Path>, set: &PermissionSet) -> Result<()> {
        let path = path.as_ref();
        let text = Format::from_path(path)?.parser().render(set)?;
        std::fs::write(path, text).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Re-export commonly used types
pub use error::{Error, Result};
pub use file::{load, save, Format};
pub use parser::{PermissionSetParser, TomlParser, YamlParser};

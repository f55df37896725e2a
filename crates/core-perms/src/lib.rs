// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # core-perms
//!
//! Hierarchical, dot-delimited permissions with zero dependencies on I/O.
//!
//! This crate provides the core domain logic for prefix-based permissions:
//! - [`PermissionPath`]: one permission identifier (`document.4.view`, `!document.4.edit`)
//! - [`PermissionSet`]: a self-normalizing collection supporting `has`, `grant` and `revoke`
//! - [`SetAuthorizer`]: the deny-wins evaluation over a slice of entries
//!
//! A grant on a prefix implies a grant on every descendant unless a denial
//! speaks about the target. Denials always win, whatever their specificity.
//!
//! ```
//! use core_perms::PermissionSet;
//!
//! # fn main() -> core_perms::Result<()> {
//! let mut perms = PermissionSet::new();
//! perms.grant("document.4")?;
//! perms.revoke("document.4.edit")?;
//!
//! assert!(perms.has("document.4.view")?);
//! assert!(!perms.has("document.4.edit")?);
//! assert_eq!(perms.to_string(), "document.4,!document.4.edit");
//! # Ok(())
//! # }
//! ```
//!
//! ## Limits
//!
//! - MAX_PERMISSION_LENGTH = 256
//! - MAX_PATH_DEPTH = 64
//! - MAX_ENTRIES_PER_SET = 1024

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod authorizer;
pub mod builder;
pub mod error;
pub mod input;
pub mod path;
pub mod set;

pub use authorizer::{Authorizer, SetAuthorizer};
pub use builder::PermissionSetBuilder;
/// Re-export commonly used types
pub use error::{PermsError, Result};
pub use input::PermissionInput;
pub use path::{Coverage, PermissionPath, ToPermissionPath};
pub use set::PermissionSet;

/// Separates permissions inside a permission-list string
pub const PERMS_DELIMITER: char = ',';

/// Separates segments inside a single permission
pub const PERMS_SUBDELIMITER: char = '.';

/// Leading marker of a denial
pub const PERMS_NEGATOR: char = '!';

/// Trailing segment accepted (and dropped) by the parser
pub const PERMS_WILDCARD: &str = "*";

/// Maximum length of a single permission in wire form
pub const MAX_PERMISSION_LENGTH: usize = 256;

/// Maximum number of segments in a permission
pub const MAX_PATH_DEPTH: usize = 64;

/// Maximum number of entries accepted when parsing a set
pub const MAX_ENTRIES_PER_SET: usize = 1024;

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # dotperm
//!
//! Hierarchical dot-delimited permissions with deny-wins matching.
//!
//! This crate provides a unified API over the workspace:
//!
//! - **Permission model**: paths, sets, grant/revoke normalization (`no_std`)
//! - **Documents**: loading and saving sets as TOML or YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use dotperm::PermissionSet;
//!
//! let mut perms = PermissionSet::parse("test.test2,!test.test2.subtest").unwrap();
//! assert!(!perms.has("test.test2.subtest").unwrap());
//!
//! perms.grant("test.test2.subtest").unwrap();
//! assert_eq!(perms.to_string(), "test.test2");
//! ```
//!
//! ## Architecture
//!
//! This facade crate re-exports the following modules:
//!
//! - [`perms`] - Permission paths, sets and authorization (from `core-perms`)
//! - [`utils`] - TOML/YAML document loading (from `perms-utils`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Permission model module.
///
/// Re-exports `core_perms`.
pub mod perms {
    pub use core_perms::*;
}

/// Document loading module.
///
/// Re-exports `perms_utils` for TOML and YAML permission documents.
pub mod utils {
    pub use perms_utils::*;
}

// Convenience re-exports at root level
pub use core_perms::{PermissionInput, PermissionPath, PermissionSet, PermsError};

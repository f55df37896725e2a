//! Deny-wins evaluation over a slice of permission entries
//!
//! The evaluation is kept apart from [`PermissionSet`](crate::PermissionSet)
//! so it can run over any borrowed slice of entries, and so callers can depend
//! on the [`Authorizer`] trait instead of a concrete collection.
//!
//! ## Semantics
//!
//! - An entry speaks about a target when its path is a prefix of the target's
//! - Any speaking denial rejects the target, wherever it sits in the slice
//! - Otherwise the target is allowed when at least one grant speaks about it
//!
//! Specificity never overrides polarity: `!document` rejects
//! `document.4.view` even next to an explicit `document.4.view` grant.

use crate::error::{PermsError, Result};
use crate::path::{Coverage, PermissionPath};
use alloc::format;

/// Evaluates `has` queries over borrowed entries
///
/// ## Example
///
/// ```
/// use core_perms::{PermissionPath, SetAuthorizer};
///
/// let entries = vec![
///     PermissionPath::parse("document.4").unwrap(),
///     PermissionPath::parse("!document.4.edit").unwrap(),
/// ];
///
/// let authorizer = SetAuthorizer::new(&entries);
/// let view = PermissionPath::parse("document.4.view").unwrap();
/// let edit = PermissionPath::parse("document.4.edit").unwrap();
/// assert!(authorizer.has(&view).unwrap());
/// assert!(!authorizer.has(&edit).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SetAuthorizer<'a> {
    entries: &'a [PermissionPath],
}

impl<'a> SetAuthorizer<'a> {
    /// Create a new authorizer over the given entries
    #[must_use]
    pub const fn new(entries: &'a [PermissionPath]) -> Self {
        Self { entries }
    }

    /// Check whether `target` is granted
    ///
    /// Scans every entry. The first denial returns `false`; a grant only marks
    /// the target as touched, since a later entry may still deny it.
    ///
    /// # Errors
    ///
    /// Returns `PermsError::InvalidOperation` if `target` is a denial, even
    /// when there are no entries to scan.
    pub fn has(&self, target: &PermissionPath) -> Result<bool> {
        ensure_positive(target)?;

        let mut touched = false;
        for entry in self.entries {
            match entry.covers(target)? {
                Coverage::Denied => {
                    tracing::trace!(%target, denied_by = %entry, "permission denied");
                    return Ok(false);
                }
                Coverage::Covered => touched = true,
                Coverage::Missing => {}
            }
        }

        Ok(touched)
    }

    /// Entries that grant `target`
    ///
    /// Useful for auditing which rules back a decision. A denial may still
    /// override all of them; see [`SetAuthorizer::denying_entries`].
    ///
    /// # Errors
    ///
    /// Returns `PermsError::InvalidOperation` if `target` is a denial.
    pub fn covering_entries(
        &self,
        target: &'a PermissionPath,
    ) -> Result<impl Iterator<Item = &'a PermissionPath> + 'a> {
        ensure_positive(target)?;
        Ok(self
            .entries
            .iter()
            .filter(move |entry| matches!(entry.covers(target), Ok(Coverage::Covered))))
    }

    /// Entries that deny `target`
    ///
    /// # Errors
    ///
    /// Returns `PermsError::InvalidOperation` if `target` is a denial.
    pub fn denying_entries(
        &self,
        target: &'a PermissionPath,
    ) -> Result<impl Iterator<Item = &'a PermissionPath> + 'a> {
        ensure_positive(target)?;
        Ok(self
            .entries
            .iter()
            .filter(move |entry| matches!(entry.covers(target), Ok(Coverage::Denied))))
    }

    /// Get the number of entries being evaluated
    #[must_use]
    pub const fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

fn ensure_positive(target: &PermissionPath) -> Result<()> {
    if target.is_positive() {
        Ok(())
    } else {
        Err(PermsError::InvalidOperation(format!(
            "cannot check coverage of denied permission `{}`",
            target
        )))
    }
}

/// Trait for types that can answer permission queries
pub trait Authorizer {
    /// Check whether `target` is granted
    ///
    /// # Errors
    ///
    /// Returns `PermsError::InvalidOperation` if `target` is a denial.
    fn has(&self, target: &PermissionPath) -> Result<bool>;
}

impl<'a> Authorizer for SetAuthorizer<'a> {
    fn has(&self, target: &PermissionPath) -> Result<bool> {
        SetAuthorizer::has(self, target)
    }
}

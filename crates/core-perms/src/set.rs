//! Self-normalizing permission sets
//!
//! A [`PermissionSet`] is an ordered list of [`PermissionPath`] entries.
//! `grant` and `revoke` keep it minimal: an entry made redundant by a
//! broader one is pruned, and revoking a path under a broader grant punches
//! a hole with a denial instead of dropping the grant.
//!
//! ## Normalization rules
//!
//! `grant(p)`:
//! 1. drop the exact denial of `p`
//! 2. stop if `p` is already granted
//! 3. drop every entry at or below `p`, grants and denials alike
//! 4. append `p`
//!
//! `revoke(p)`:
//! 1. drop the exact grant of `p`
//! 2. drop every entry at or below `p`
//! 3. stop if the exact denial of `p` is present
//! 4. append the denial of `p` if a broader entry still grants it
//!
//! Both validate the whole input before touching any entry, so a call with
//! one malformed or negative permission leaves the set unchanged.

use crate::authorizer::{Authorizer, SetAuthorizer};
use crate::error::{PermsError, Result};
use crate::input::PermissionInput;
use crate::path::{PermissionPath, ToPermissionPath};
use crate::{MAX_ENTRIES_PER_SET, PERMS_DELIMITER};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered, normalized collection of permissions
///
/// Equality compares the entries as a set: order and repeated entries are
/// ignored, so `"a,b"`, `"b,a"` and `"a,a,b"` are all equal.
#[derive(Debug, Clone, Default)]
pub struct PermissionSet {
    entries: Vec<PermissionPath>,
}

impl PermissionSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a set from any supported input, keeping entries as given
    ///
    /// Parsing does not normalize: `"a,a.b"` yields two entries.
    ///
    /// # Errors
    ///
    /// - Any parse error from the individual permissions
    /// - `PermsError::TooManyEntries` above `MAX_ENTRIES_PER_SET`
    ///
    /// # Example
    ///
    /// ```
    /// use core_perms::PermissionSet;
    ///
    /// let perms = PermissionSet::parse("test.test2,!test.test2.subtest").unwrap();
    /// assert_eq!(perms.len(), 2);
    /// assert!(perms.has("test.test2.subtestyes").unwrap());
    /// assert!(!perms.has("test.test2.subtest").unwrap());
    /// ```
    pub fn parse(input: impl Into<PermissionInput>) -> Result<Self> {
        let input = input.into();
        // Reject oversized lists before any entry is parsed
        match &input {
            PermissionInput::Text(text) if !text.is_empty() => {
                check_entry_count(text.matches(PERMS_DELIMITER).count() + 1)?;
            }
            PermissionInput::TextList(list) => check_entry_count(list.len())?,
            PermissionInput::PathList(paths) => check_entry_count(paths.len())?,
            _ => {}
        }

        let entries = input.into_paths()?;
        check_entry_count(entries.len())?;
        Ok(Self { entries })
    }

    // ===== Accessors =====

    /// Get the entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[PermissionPath] {
        &self.entries
    }

    /// Iterate over the entries in insertion order
    pub fn iter(&self) -> core::slice::Iter<'_, PermissionPath> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the set holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<PermissionPath> {
        self.entries
    }

    /// Authorizer borrowing this set's entries
    #[must_use]
    pub fn authorizer(&self) -> SetAuthorizer<'_> {
        SetAuthorizer::new(&self.entries)
    }

    // ===== Queries =====

    /// Check whether `target` is granted
    ///
    /// This method delegates to [`SetAuthorizer::has`]: any denial speaking
    /// about the target wins, otherwise at least one grant must speak about it.
    ///
    /// # Errors
    ///
    /// - Parse error if `target` is malformed text
    /// - `PermsError::InvalidOperation` if `target` is a denial
    pub fn has<T: ToPermissionPath + ?Sized>(&self, target: &T) -> Result<bool> {
        let target = target.to_permission_path()?;
        self.authorizer().has(&target)
    }

    /// Check whether an entry with exactly these segments and polarity exists
    ///
    /// # Errors
    ///
    /// Parse error if `target` is malformed text.
    pub fn exact_match<T: ToPermissionPath + ?Sized>(&self, target: &T) -> Result<bool> {
        let target = target.to_permission_path()?;
        Ok(self.contains_exact(&target))
    }

    /// Entries that grant `target`
    ///
    /// # Errors
    ///
    /// Returns `PermsError::InvalidOperation` if `target` is a denial.
    pub fn covering_entries<'a>(
        &'a self,
        target: &'a PermissionPath,
    ) -> Result<impl Iterator<Item = &'a PermissionPath> + 'a> {
        SetAuthorizer::new(&self.entries).covering_entries(target)
    }

    // ===== Mutation =====

    /// Grant one or many permissions
    ///
    /// Granting a broader permission removes every more precise entry beneath
    /// it, denials included. Granting something already granted is a no-op.
    ///
    /// # Errors
    ///
    /// - Parse error for malformed input
    /// - `PermsError::InvalidOperation` if any permission is a denial
    ///
    /// On error the set is left unchanged.
    pub fn grant(&mut self, input: impl Into<PermissionInput>) -> Result<()> {
        for perm in positive_paths(input.into(), "grant")? {
            if self.remove(&perm.negated()) {
                tracing::debug!(permission = %perm, "lifted exact denial");
            }

            if self.authorizer().has(&perm)? {
                tracing::debug!(permission = %perm, "already granted");
                continue;
            }

            let pruned = self.prune_under(&perm);
            if pruned > 0 {
                tracing::debug!(permission = %perm, pruned, "pruned entries under grant");
            }

            self.entries.push(perm);
        }

        Ok(())
    }

    /// Revoke one or many permissions
    ///
    /// Revoking drops every entry at or below the revoked path. When a broader
    /// grant still covers the path, a denial is appended to exclude it.
    ///
    /// # Errors
    ///
    /// - Parse error for malformed input
    /// - `PermsError::InvalidOperation` if any permission is a denial
    ///
    /// On error the set is left unchanged.
    pub fn revoke(&mut self, input: impl Into<PermissionInput>) -> Result<()> {
        for perm in positive_paths(input.into(), "revoke")? {
            self.remove(&perm);

            let pruned = self.prune_under(&perm);
            if pruned > 0 {
                tracing::debug!(permission = %perm, pruned, "pruned entries under revoke");
            }

            let denial = perm.negated();
            if self.contains_exact(&denial) {
                continue;
            }

            if self.authorizer().has(&perm)? {
                tracing::debug!(permission = %denial, "added denial under broader grant");
                self.entries.push(denial);
            }
        }

        Ok(())
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn contains_exact(&self, perm: &PermissionPath) -> bool {
        self.entries.iter().any(|e| e.exact_match(perm))
    }

    /// Removes exact matches of `perm`; returns whether any was present
    fn remove(&mut self, perm: &PermissionPath) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !e.exact_match(perm));
        self.entries.len() != before
    }

    /// Removes every entry at or below `perm`, whatever its polarity
    fn prune_under(&mut self, perm: &PermissionPath) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !e.is_descendant_or_equal(perm));
        before - self.entries.len()
    }
}

fn positive_paths(input: PermissionInput, operation: &str) -> Result<Vec<PermissionPath>> {
    let paths = input.into_paths()?;
    if let Some(negative) = paths.iter().find(|p| !p.is_positive()) {
        return Err(PermsError::InvalidOperation(format!(
            "cannot {} a negative permission `{}`",
            operation, negative
        )));
    }
    Ok(paths)
}

fn check_entry_count(count: usize) -> Result<()> {
    if count > MAX_ENTRIES_PER_SET {
        return Err(PermsError::TooManyEntries {
            max: MAX_ENTRIES_PER_SET,
            attempted: count,
        });
    }
    Ok(())
}

impl Authorizer for PermissionSet {
    fn has(&self, target: &PermissionPath) -> Result<bool> {
        self.authorizer().has(target)
    }
}

impl PartialEq for PermissionSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().all(|e| other.contains_exact(e))
            && other.entries.iter().all(|e| self.contains_exact(e))
    }
}

impl Eq for PermissionSet {}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PERMS_DELIMITER)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl FromStr for PermissionSet {
    type Err = PermsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = &'a PermissionPath;
    type IntoIter = core::slice::Iter<'a, PermissionPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for PermissionSet {
    type Item = PermissionPath;
    type IntoIter = alloc::vec::IntoIter<PermissionPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for PermissionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts a permission-list string or a sequence of permission strings
struct PermissionSetVisitor;

impl<'de> Visitor<'de> for PermissionSetVisitor {
    type Value = PermissionSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a permission-list string or a sequence of permission strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> core::result::Result<Self::Value, E> {
        PermissionSet::parse(v).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> core::result::Result<Self::Value, E> {
        PermissionSet::parse(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::new();
        while let Some(path) = seq.next_element::<PermissionPath>()? {
            entries.push(path);
            check_entry_count(entries.len()).map_err(de::Error::custom)?;
        }
        Ok(PermissionSet { entries })
    }
}

impl<'de> Deserialize<'de> for PermissionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        deserializer.deserialize_any(PermissionSetVisitor)
    }
}

//! Builder pattern for ergonomic permission set construction

use crate::error::Result;
use crate::input::PermissionInput;
use crate::set::PermissionSet;
use alloc::vec::Vec;

#[derive(Debug, Clone)]
enum Step {
    Grant(PermissionInput),
    Revoke(PermissionInput),
}

/// Builder for creating a normalized `PermissionSet` with a fluent API
///
/// Steps are replayed through [`PermissionSet::grant`] and
/// [`PermissionSet::revoke`] in the order they were added, so the result is
/// the same normalized set those calls would produce.
///
/// # Examples
///
/// ```
/// use core_perms::PermissionSetBuilder;
///
/// # fn example() -> Result<(), core_perms::PermsError> {
/// let perms = PermissionSetBuilder::new()
///     .grant("document.4.view")
///     .grant("document.4.edit")
///     .grant("document.4")
///     .revoke("document.4.edit")
///     .build()?;
///
/// assert_eq!(perms.to_string(), "document.4,!document.4.edit");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PermissionSetBuilder {
    base: PermissionSet,
    steps: Vec<Step>,
}

impl PermissionSetBuilder {
    /// Create a new builder starting from an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder whose steps apply on top of an existing set
    #[must_use]
    pub fn from_set(base: PermissionSet) -> Self {
        Self {
            base,
            steps: Vec::new(),
        }
    }

    /// Queue a grant
    #[must_use]
    pub fn grant(mut self, input: impl Into<PermissionInput>) -> Self {
        self.steps.push(Step::Grant(input.into()));
        self
    }

    /// Queue a revoke
    #[must_use]
    pub fn revoke(mut self, input: impl Into<PermissionInput>) -> Self {
        self.steps.push(Step::Revoke(input.into()));
        self
    }

    /// Apply every queued step and return the set
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a step. Steps after it are not applied.
    pub fn build(self) -> Result<PermissionSet> {
        let mut set = self.base;
        for step in self.steps {
            match step {
                Step::Grant(input) => set.grant(input)?,
                Step::Revoke(input) => set.revoke(input)?,
            }
        }
        Ok(set)
    }
}

//! Permission paths and the pairwise relations between them.
//!
//! A permission is written as dot-separated segments, most general first:
//! - `document.4.view` - grants `view` on document `4`
//! - `!document.4.edit` - denies `edit` on document `4`
//! - `document.4.*` - trailing wildcards are accepted and dropped, so this is `document.4`
//!
//! Every higher-level decision is built from three relations:
//! [`PermissionPath::covers`], [`PermissionPath::is_descendant_or_equal`] and
//! [`PermissionPath::exact_match`].

use crate::error::{PermsError, Result};
use crate::{
    MAX_PATH_DEPTH, MAX_PERMISSION_LENGTH, PERMS_DELIMITER, PERMS_NEGATOR, PERMS_SUBDELIMITER,
    PERMS_WILDCARD,
};
use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Outcome of asking whether a rule speaks about a target permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coverage {
    /// The rule is a prefix of the target and grants it
    Covered,
    /// The rule does not speak about the target
    Missing,
    /// The rule is a prefix of the target and denies it
    Denied,
}

impl Coverage {
    /// `true` for [`Coverage::Covered`]
    #[must_use]
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }

    /// `true` for [`Coverage::Denied`]
    #[must_use]
    pub const fn is_denied(self) -> bool {
        matches!(self, Self::Denied)
    }
}

/// One permission identifier: ordered segments plus a polarity.
///
/// Values are immutable. Flipping the polarity produces a new value, so a
/// path shared between several sets can never be changed through one of them.
///
/// Serialized as its wire string (`"!document.4.edit"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionPath {
    segments: Vec<String>,
    is_positive: bool,
}

impl PermissionPath {
    /// Create a permission from its segments
    ///
    /// # Errors
    ///
    /// - `PermsError::Parse` if there are no segments, the last segment is `*`,
    ///   a segment is empty, or a segment contains one of `.`, `!`, `,`
    /// - `PermsError::PathTooDeep` if there are more than `MAX_PATH_DEPTH` segments
    /// - `PermsError::PermissionTooLong` if the wire form exceeds `MAX_PERMISSION_LENGTH`
    pub fn new<I, S>(segments: I, is_positive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        validate_segments(&segments, is_positive)?;
        Ok(Self {
            segments,
            is_positive,
        })
    }

    /// Parse a permission from its wire form
    ///
    /// # Errors
    ///
    /// Same as [`PermissionPath::new`]; the length limit is checked on the raw
    /// text before it is split.
    ///
    /// # Example
    ///
    /// ```
    /// use core_perms::PermissionPath;
    ///
    /// let p = PermissionPath::parse("!document.4.*").unwrap();
    /// assert!(!p.is_positive());
    /// assert_eq!(p.segments(), ["document", "4"]);
    /// assert_eq!(p.to_string(), "!document.4");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        if text.len() > MAX_PERMISSION_LENGTH {
            return Err(PermsError::PermissionTooLong {
                max: MAX_PERMISSION_LENGTH,
                length: text.len(),
            });
        }

        let (is_positive, body) = match text.strip_prefix(PERMS_NEGATOR) {
            Some(rest) => (false, rest),
            None => (true, text),
        };

        let mut segments: Vec<&str> = body.split(PERMS_SUBDELIMITER).collect();
        while segments.last() == Some(&PERMS_WILDCARD) {
            segments.pop();
        }

        Self::new(segments, is_positive)
    }

    /// Get the segments, most general first
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// `true` for a grant, `false` for a denial
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.is_positive
    }

    /// Same path with the opposite polarity
    #[must_use]
    pub fn negated(&self) -> Self {
        self.with_polarity(!self.is_positive)
    }

    /// Same path with the given polarity
    #[must_use]
    pub fn with_polarity(&self, is_positive: bool) -> Self {
        Self {
            segments: self.segments.clone(),
            is_positive,
        }
    }

    /// Check whether this rule speaks about `target`, and how
    ///
    /// The rule speaks about the target only when its segments are a prefix
    /// of (or equal to) the target's. A speaking denial yields
    /// [`Coverage::Denied`], a speaking grant [`Coverage::Covered`].
    ///
    /// # Errors
    ///
    /// Returns `PermsError::InvalidOperation` if `target` is a denial: coverage
    /// is only defined against a concrete positive request.
    pub fn covers(&self, target: &PermissionPath) -> Result<Coverage> {
        if !target.is_positive {
            return Err(PermsError::InvalidOperation(format!(
                "cannot check coverage of denied permission `{}`",
                target
            )));
        }

        // A longer rule is more specific than the target and says nothing about it
        if self.segments.len() > target.segments.len()
            || !target.segments.starts_with(&self.segments)
        {
            return Ok(Coverage::Missing);
        }

        if self.is_positive {
            Ok(Coverage::Covered)
        } else {
            Ok(Coverage::Denied)
        }
    }

    /// `true` if `ancestor`'s segments are a prefix of (or equal to) this path's
    ///
    /// Polarity is ignored. The relation is reflexive.
    #[must_use]
    pub fn is_descendant_or_equal(&self, ancestor: &PermissionPath) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }

    /// `true` if both segments and polarity are identical
    #[must_use]
    pub fn exact_match(&self, other: &PermissionPath) -> bool {
        self.is_positive == other.is_positive && self.segments == other.segments
    }
}

fn validate_segments(segments: &[String], is_positive: bool) -> Result<()> {
    if segments.is_empty() {
        return Err(PermsError::Parse("permission has no segments".to_string()));
    }

    // A trailing `*` would be dropped when the wire form is parsed again
    if segments.last().map(String::as_str) == Some(PERMS_WILDCARD) {
        return Err(PermsError::Parse(
            "trailing wildcard is not a segment".to_string(),
        ));
    }

    if segments.len() > MAX_PATH_DEPTH {
        return Err(PermsError::PathTooDeep {
            max: MAX_PATH_DEPTH,
            depth: segments.len(),
        });
    }

    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(PermsError::Parse(format!("empty segment at position {}", i)));
        }
        if let Some(c) = segment.chars().find(|c| is_reserved(*c)) {
            return Err(PermsError::Parse(format!(
                "segment `{}` contains reserved character `{}`",
                segment, c
            )));
        }
    }

    // Negator + segments + one delimiter between each pair
    let length = usize::from(!is_positive)
        + segments.iter().map(String::len).sum::<usize>()
        + (segments.len() - 1);
    if length > MAX_PERMISSION_LENGTH {
        return Err(PermsError::PermissionTooLong {
            max: MAX_PERMISSION_LENGTH,
            length,
        });
    }

    Ok(())
}

const fn is_reserved(c: char) -> bool {
    c == PERMS_SUBDELIMITER || c == PERMS_NEGATOR || c == PERMS_DELIMITER
}

impl fmt::Display for PermissionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_positive {
            write!(f, "{}", PERMS_NEGATOR)?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PERMS_SUBDELIMITER)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for PermissionPath {
    type Err = PermsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PermissionPath {
    type Error = PermsError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for PermissionPath {
    type Error = PermsError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<PermissionPath> for String {
    fn from(path: PermissionPath) -> Self {
        path.to_string()
    }
}

/// Anything that can be read as a single permission: parsed text or an existing path.
///
/// Lets query methods accept `"document.4"` and `&path` alike without cloning
/// already-parsed paths.
pub trait ToPermissionPath {
    /// Borrow or parse the permission
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed text.
    fn to_permission_path(&self) -> Result<Cow<'_, PermissionPath>>;
}

impl ToPermissionPath for PermissionPath {
    fn to_permission_path(&self) -> Result<Cow<'_, PermissionPath>> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToPermissionPath for str {
    fn to_permission_path(&self) -> Result<Cow<'_, PermissionPath>> {
        PermissionPath::parse(self).map(Cow::Owned)
    }
}

impl ToPermissionPath for String {
    fn to_permission_path(&self) -> Result<Cow<'_, PermissionPath>> {
        self.as_str().to_permission_path()
    }
}

impl<T: ToPermissionPath + ?Sized> ToPermissionPath for &T {
    fn to_permission_path(&self) -> Result<Cow<'_, PermissionPath>> {
        (**self).to_permission_path()
    }
}

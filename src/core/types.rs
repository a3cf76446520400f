//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`BranchName`] - Validated branch name
//! - [`CommitHash`] - Fixed-length lowercase hex commit identifier
//! - [`StashId`] - Sequential stash identifier, rendered `stash@{n}`
//! - [`UtcTimestamp`] - UTC timestamp with a git-log display format
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use gitlings::core::types::{BranchName, CommitHash};
//!
//! let branch = BranchName::new("feature/login").unwrap();
//! assert_eq!(branch.as_str(), "feature/login");
//!
//! let hash = CommitHash::new("a1b2c3d").unwrap();
//! assert_eq!(hash.as_str(), "a1b2c3d");
//!
//! assert!(BranchName::new("invalid..name").is_err());
//! assert!(CommitHash::new("NOT-HEX").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid commit hash: {0}")]
    InvalidCommitHash(String),
}

/// A validated branch name.
///
/// Branch names follow a subset of Git's refname rules:
/// - Cannot be empty or exactly `@`
/// - Cannot start with `.` or `-`
/// - Cannot end with `.lock` or `/`
/// - Cannot contain `..`, `@{`, `//`, whitespace, or control characters
/// - Cannot contain `~`, `^`, `:`, `\`, `?`, `*`, `[`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates the
    /// refname rules above.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        let invalid = |reason: &str| TypeError::InvalidBranchName(reason.to_string());

        if name.is_empty() {
            return Err(invalid("branch name cannot be empty"));
        }
        if name == "@" {
            return Err(invalid("branch name cannot be '@' (reserved)"));
        }
        if name.starts_with('.') || name.starts_with('-') {
            return Err(invalid("branch name cannot start with '.' or '-'"));
        }
        if name.ends_with(".lock") || name.ends_with('/') {
            return Err(invalid("branch name cannot end with '.lock' or '/'"));
        }
        for pattern in ["..", "@{", "//"] {
            if name.contains(pattern) {
                return Err(TypeError::InvalidBranchName(format!(
                    "branch name cannot contain '{pattern}'"
                )));
            }
        }
        const INVALID_CHARS: [char; 7] = ['~', '^', ':', '\\', '?', '*', '['];
        for c in name.chars() {
            if c.is_whitespace() || c.is_ascii_control() || INVALID_CHARS.contains(&c) {
                return Err(invalid("branch name contains an invalid character"));
            }
        }
        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BranchName> for String {
    fn from(value: BranchName) -> Self {
        value.0
    }
}

/// A simulated commit identifier.
///
/// Always lowercase hexadecimal; the length is fixed by the hash source
/// that produced it (see [`crate::core::hash`]). Collisions are not
/// handled - hashes are identifiers for display, not content addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitHash(String);

impl CommitHash {
    /// Create a new validated commit hash.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidCommitHash` if the value is empty or
    /// contains anything but lowercase hex digits.
    pub fn new(hash: impl Into<String>) -> Result<Self, TypeError> {
        let hash = hash.into();
        if hash.is_empty() {
            return Err(TypeError::InvalidCommitHash(
                "commit hash cannot be empty".to_string(),
            ));
        }
        if !hash
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        {
            return Err(TypeError::InvalidCommitHash(format!(
                "'{hash}' is not lowercase hex"
            )));
        }
        Ok(Self(hash))
    }

    /// The all-zeros sentinel of the given length, used where no commit
    /// exists yet (e.g. tagging an empty history).
    pub fn zeros(length: usize) -> Self {
        Self("0".repeat(length.max(1)))
    }

    /// Internal constructor for values already known to be lowercase hex.
    pub(crate) fn from_raw(hash: String) -> Self {
        debug_assert!(Self::new(hash.clone()).is_ok());
        Self(hash)
    }

    /// Get the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash length in characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the hash is empty (never, by construction).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CommitHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CommitHash {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommitHash> for String {
    fn from(value: CommitHash) -> Self {
        value.0
    }
}

/// A sequential stash identifier.
///
/// Rendered in the reflog style `stash@{n}`. The index comes from a
/// monotone per-repository counter, so an id is never reused even after
/// earlier stashes are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StashId(usize);

impl StashId {
    /// Create a stash id from its sequence number.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The sequence number.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for StashId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stash@{{{}}}", self.0)
    }
}

/// A UTC timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Create a timestamp from a chrono DateTime.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt)
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }

    /// Render in the `git log` date style, e.g. `Mon Jan 05 14:30:00 2026`.
    pub fn git_log_format(&self) -> String {
        self.0.format("%a %b %d %H:%M:%S %Y").to_string()
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod branch_name {
        use super::*;

        #[test]
        fn accepts_typical_names() {
            for name in ["main", "dev", "feature/login", "user@feature", "v1.2"] {
                assert!(BranchName::new(name).is_ok(), "rejected '{name}'");
            }
        }

        #[test]
        fn rejects_invalid_names() {
            for name in [
                "", "@", ".hidden", "-flag", "bad..name", "x.lock", "trail/", "a//b", "a@{b",
                "has space", "ca^ret",
            ] {
                assert!(BranchName::new(name).is_err(), "accepted '{name}'");
            }
        }

        #[test]
        fn serde_roundtrip() {
            let branch = BranchName::new("feature/login").unwrap();
            let json = serde_json::to_string(&branch).unwrap();
            let parsed: BranchName = serde_json::from_str(&json).unwrap();
            assert_eq!(branch, parsed);
        }

        #[test]
        fn serde_rejects_invalid() {
            let result: Result<BranchName, _> = serde_json::from_str("\"bad..name\"");
            assert!(result.is_err());
        }
    }

    mod commit_hash {
        use super::*;

        #[test]
        fn accepts_lowercase_hex() {
            let hash = CommitHash::new("a1b2c3d").unwrap();
            assert_eq!(hash.len(), 7);
            assert_eq!(hash.to_string(), "a1b2c3d");
        }

        #[test]
        fn rejects_uppercase_and_non_hex() {
            assert!(CommitHash::new("A1B2C3D").is_err());
            assert!(CommitHash::new("xyz1234").is_err());
            assert!(CommitHash::new("").is_err());
        }

        #[test]
        fn zeros_sentinel() {
            assert_eq!(CommitHash::zeros(7).as_str(), "0000000");
        }
    }

    mod stash_id {
        use super::*;

        #[test]
        fn display_uses_reflog_syntax() {
            assert_eq!(StashId::new(0).to_string(), "stash@{0}");
            assert_eq!(StashId::new(12).to_string(), "stash@{12}");
        }
    }

    mod utc_timestamp {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn git_log_format_shape() {
            let dt = chrono::Utc.with_ymd_and_hms(2026, 1, 5, 14, 30, 0).unwrap();
            let ts = UtcTimestamp::from_datetime(dt);
            assert_eq!(ts.git_log_format(), "Mon Jan 05 14:30:00 2026");
        }
    }
}

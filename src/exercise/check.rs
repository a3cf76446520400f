//! exercise::check
//!
//! Verification check declarations.
//!
//! Authors write checks as `"<check-id> @ <description>"`. The id side
//! is a closed, parameterized grammar resolved to [`CheckKind`] when
//! the exercise record is constructed - an unknown or malformed id is
//! a load-time error, never a silent verify-time `false`.

use serde::{Deserialize, Serialize};

use super::ExerciseError;

/// What a check inspects. Parameters ride after a `:` in the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    /// `repo-initialized` - the repository has been initialized.
    RepoInitialized,
    /// `file-exists:<path>` - the path is a working-directory key.
    FileExists(String),
    /// `commit-prefix:<prefix>` - some commit message contains the prefix.
    CommitPrefix(String),
    /// `command-run:<needle>` - some raw command input contains the needle.
    CommandRun(String),
    /// `conflict-resolved` - the conflict state is Resolved.
    ConflictResolved,
}

impl CheckKind {
    /// Resolve a check-id string.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::UnknownCheckId` for ids outside the
    /// closed set and `ExerciseError::MissingCheckParameter` when a
    /// parameterized id has an empty parameter.
    pub fn parse(id: &str) -> Result<Self, ExerciseError> {
        match id.split_once(':') {
            None => match id {
                "repo-initialized" => Ok(CheckKind::RepoInitialized),
                "conflict-resolved" => Ok(CheckKind::ConflictResolved),
                other => Err(ExerciseError::UnknownCheckId(other.to_string())),
            },
            Some((kind, parameter)) => {
                let parameter = parameter.trim();
                if parameter.is_empty() {
                    return Err(ExerciseError::MissingCheckParameter(kind.to_string()));
                }
                match kind {
                    "file-exists" => Ok(CheckKind::FileExists(parameter.to_string())),
                    "commit-prefix" => Ok(CheckKind::CommitPrefix(parameter.to_string())),
                    "command-run" => Ok(CheckKind::CommandRun(parameter.to_string())),
                    other => Err(ExerciseError::UnknownCheckId(other.to_string())),
                }
            }
        }
    }

    /// The id string this kind parses from.
    pub fn id(&self) -> String {
        match self {
            CheckKind::RepoInitialized => "repo-initialized".to_string(),
            CheckKind::FileExists(path) => format!("file-exists:{path}"),
            CheckKind::CommitPrefix(prefix) => format!("commit-prefix:{prefix}"),
            CheckKind::CommandRun(needle) => format!("command-run:{needle}"),
            CheckKind::ConflictResolved => "conflict-resolved".to_string(),
        }
    }
}

/// One resolved check: what to inspect plus the learner-facing
/// description used as the key in verification results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Check {
    /// Resolved predicate.
    pub kind: CheckKind,
    /// Human-readable description, shown to the learner.
    pub description: String,
}

impl Check {
    /// Parse one `"<check-id> @ <description>"` declaration. Split once
    /// on `@`, both sides trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::MalformedCheck` when the separator is
    /// missing, plus any [`CheckKind::parse`] error.
    pub fn parse(declaration: &str) -> Result<Self, ExerciseError> {
        let Some((id, description)) = declaration.split_once('@') else {
            return Err(ExerciseError::MalformedCheck(declaration.to_string()));
        };
        Ok(Self {
            kind: CheckKind::parse(id.trim())?,
            description: description.trim().to_string(),
        })
    }

    /// Render back to the declaration form.
    pub fn declaration(&self) -> String {
        format!("{} @ {}", self.kind.id(), self.description)
    }
}

impl TryFrom<String> for Check {
    type Error = ExerciseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Check> for String {
    fn from(value: Check) -> Self {
        value.declaration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod check_kind {
        use super::*;

        #[test]
        fn parses_the_closed_set() {
            assert_eq!(
                CheckKind::parse("repo-initialized").unwrap(),
                CheckKind::RepoInitialized
            );
            assert_eq!(
                CheckKind::parse("conflict-resolved").unwrap(),
                CheckKind::ConflictResolved
            );
            assert_eq!(
                CheckKind::parse("file-exists:hello.txt").unwrap(),
                CheckKind::FileExists("hello.txt".to_string())
            );
            assert_eq!(
                CheckKind::parse("commit-prefix:feat:").unwrap(),
                CheckKind::CommitPrefix("feat:".to_string())
            );
            assert_eq!(
                CheckKind::parse("command-run:merge").unwrap(),
                CheckKind::CommandRun("merge".to_string())
            );
        }

        #[test]
        fn parameter_keeps_interior_colons() {
            // commit-prefix:feat: splits at the first colon only.
            let kind = CheckKind::parse("commit-prefix:feat:").unwrap();
            assert_eq!(kind, CheckKind::CommitPrefix("feat:".to_string()));
        }

        #[test]
        fn unknown_ids_fail_at_load() {
            assert!(matches!(
                CheckKind::parse("branch-count"),
                Err(ExerciseError::UnknownCheckId(_))
            ));
            assert!(matches!(
                CheckKind::parse("mystery:param"),
                Err(ExerciseError::UnknownCheckId(_))
            ));
        }

        #[test]
        fn empty_parameter_fails_at_load() {
            assert!(matches!(
                CheckKind::parse("file-exists:"),
                Err(ExerciseError::MissingCheckParameter(_))
            ));
        }

        #[test]
        fn id_roundtrips() {
            for id in [
                "repo-initialized",
                "file-exists:hello.txt",
                "commit-prefix:feat:",
                "command-run:merge",
                "conflict-resolved",
            ] {
                assert_eq!(CheckKind::parse(id).unwrap().id(), id);
            }
        }
    }

    mod check {
        use super::*;

        #[test]
        fn splits_once_on_at_and_trims() {
            let check = Check::parse("  file-exists:hello.txt @ hello.txt exists  ").unwrap();
            assert_eq!(check.kind, CheckKind::FileExists("hello.txt".to_string()));
            assert_eq!(check.description, "hello.txt exists");
        }

        #[test]
        fn missing_separator_is_malformed() {
            assert!(matches!(
                Check::parse("repo-initialized"),
                Err(ExerciseError::MalformedCheck(_))
            ));
        }

        #[test]
        fn serde_roundtrip() {
            let check = Check::parse("command-run:merge @ ran a merge").unwrap();
            let json = serde_json::to_string(&check).unwrap();
            assert_eq!(json, "\"command-run:merge @ ran a merge\"");
            let parsed: Check = serde_json::from_str(&json).unwrap();
            assert_eq!(check, parsed);
        }
    }
}

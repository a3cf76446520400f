//! exercise
//!
//! Normalized exercise records, as handed over by the content-loading
//! collaborator. Loading from disk (metadata files, description text)
//! is out of scope here; this module validates the record and resolves
//! its check declarations.
//!
//! Invalid metadata is the one hard failure surface of the engine, and
//! it is the loader's to surface: [`Exercise::new`] returns
//! [`ExerciseError`] instead of deferring problems to verify time.

pub mod check;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use check::{Check, CheckKind};

/// Errors from exercise record validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExerciseError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("malformed check declaration (expected '<id> @ <description>'): {0}")]
    MalformedCheck(String),

    #[error("unknown check id: {0}")]
    UnknownCheckId(String),

    #[error("check id '{0}' requires a parameter")]
    MissingCheckParameter(String),
}

/// One tutorial exercise: identity, learner-facing text, and the
/// ordered checks that decide completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable identifier, also the sort key for session ordering.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Full description shown when the exercise starts.
    pub description: String,
    /// Progressive hints, in reveal order.
    pub hints: Vec<String>,
    checks: Vec<Check>,
}

impl Exercise {
    /// Build a validated exercise from a normalized record.
    ///
    /// Check declarations are resolved eagerly; declaration order is
    /// preserved and drives the order of verification results.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::MissingField` for an empty id or name,
    /// and check resolution errors for bad declarations.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        hints: Vec<String>,
        check_declarations: &[String],
    ) -> Result<Self, ExerciseError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ExerciseError::MissingField("id"));
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ExerciseError::MissingField("name"));
        }
        let checks = check_declarations
            .iter()
            .map(|declaration| Check::parse(declaration))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id,
            name,
            description: description.into(),
            hints,
            checks,
        })
    }

    /// The resolved checks, in declaration order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }
}

//! engine::verify
//!
//! Evaluate an exercise's checks against the simulated repository and
//! the command history.
//!
//! # Invariants
//!
//! - Never mutates repository state or history
//! - Total: every resolved check evaluates to a bool, no errors
//! - Results preserve check declaration order

use indexmap::IndexMap;
use tracing::trace;

use crate::core::repo::{ConflictState, RepositoryState};
use crate::engine::history::CommandHistory;
use crate::exercise::{CheckKind, Exercise};

/// Evaluate every check of `exercise`, keyed by description in
/// declaration order.
pub fn verify(
    exercise: &Exercise,
    repo: &RepositoryState,
    history: &CommandHistory,
) -> IndexMap<String, bool> {
    exercise
        .checks()
        .iter()
        .map(|check| {
            let passed = evaluate(&check.kind, repo, history);
            trace!(check = %check.kind.id(), passed, "evaluated check");
            (check.description.clone(), passed)
        })
        .collect()
}

fn evaluate(kind: &CheckKind, repo: &RepositoryState, history: &CommandHistory) -> bool {
    match kind {
        CheckKind::RepoInitialized => repo.initialized(),
        CheckKind::FileExists(path) => repo.working_dir().contains_key(path.as_str()),
        CheckKind::CommitPrefix(prefix) => repo
            .commits()
            .iter()
            .any(|commit| commit.message.contains(prefix.as_str())),
        CheckKind::CommandRun(needle) => {
            history.inputs().any(|input| input.contains(needle.as_str()))
        }
        CheckKind::ConflictResolved => repo.conflict() == ConflictState::Resolved,
    }
}

//! tag - list tags or bind one to the latest commit.

use crate::core::config::SimConfig;
use crate::core::repo::{RepositoryState, Tag};
use crate::core::types::{CommitHash, UtcTimestamp};

/// Handle `tag [<name>]`.
///
/// Without arguments, lists tag names in creation order. With a name,
/// creates or overwrites a tag bound to the latest commit hash (zero
/// sentinel on an empty history).
pub fn run(repo: &mut RepositoryState, args: &[&str], config: &SimConfig) -> String {
    let Some(name) = args.first() else {
        return repo.tags().keys().cloned().collect::<Vec<_>>().join("\n");
    };
    let commit = repo
        .latest_commit()
        .map(|commit| commit.hash.clone())
        .unwrap_or_else(|| CommitHash::zeros(config.hash_length));
    repo.set_tag(
        *name,
        Tag {
            commit,
            created_at: UtcTimestamp::now(),
        },
    );
    format!("Created tag '{name}'")
}

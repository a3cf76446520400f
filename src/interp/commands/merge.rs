//! merge - fast-forward and no-ff merge transcripts.

use crate::core::hash::HashSource;
use crate::core::repo::{ConflictState, RepositoryState};

/// Handle `merge <branch> [--abort|--no-ff]`.
///
/// The branch-exists check runs before any flag handling, so
/// `merge --abort` without a branch argument reports the flag token as
/// an unknown branch. An unresolved conflict refuses every form.
pub fn run(repo: &mut RepositoryState, args: &[&str], hashes: &mut dyn HashSource) -> String {
    let Some(name) = args.first() else {
        return "fatal: branch name required for merge".to_string();
    };
    if !repo.contains_branch(name) {
        return format!("fatal: branch '{name}' not found.");
    }
    if repo.conflict() == ConflictState::Unresolved {
        return "error: Merging is not possible because you have unmerged files.".to_string();
    }
    if args.contains(&"--abort") {
        return "Merge aborted.".to_string();
    }
    if args.contains(&"--no-ff") {
        let hash = hashes.next_hash();
        let message = format!(
            "Merge branch '{name}' into {current}",
            current = repo.current_branch()
        );
        repo.record_merge_commit(hash, message);
        return "Merge made by the 'ort' strategy.\n 1 file changed, 1 insertion(+)".to_string();
    }
    // Fast-forward synthesizes no commit record.
    "Updating abc123..def456\nFast-forward".to_string()
}

//! reset, revert, cherry-pick - history rewrite and canned recovery.

use crate::core::config::SimConfig;
use crate::core::repo::RepositoryState;
use crate::core::types::CommitHash;

/// Handle `reset --hard [HEAD~1] | --soft`.
///
/// Only `--hard HEAD~1` mutates: it pops the most recent commit and
/// names whatever is left at HEAD. Every other accepted form is a
/// generic message.
pub fn reset(repo: &mut RepositoryState, args: &[&str], config: &SimConfig) -> String {
    match args {
        [] => "fatal: option required".to_string(),
        ["--hard", "HEAD~1", ..] => {
            repo.pop_commit();
            head_position(repo, config)
        }
        ["--hard", ..] => head_position(repo, config),
        ["--soft", ..] => "Reset to previous commit (changes staged)".to_string(),
        [flag, ..] => format!("{} reset: '{flag}' is not a valid option", config.program),
    }
}

/// `HEAD is now at <hash> <message>` for the latest commit, or the
/// zero sentinel when the history is empty.
fn head_position(repo: &RepositoryState, config: &SimConfig) -> String {
    match repo.latest_commit() {
        Some(commit) => format!("HEAD is now at {} {}", commit.hash, commit.message),
        None => format!("HEAD is now at {}", CommitHash::zeros(config.hash_length)),
    }
}

/// Handle `revert <commit>`. Always succeeds with a canned transcript;
/// the referenced commit is never located or removed.
pub fn revert(repo: &RepositoryState, args: &[&str]) -> String {
    let Some(commit_id) = args.first() else {
        return "fatal: commit id required".to_string();
    };
    format!(
        "[{} abc123] Revert \"{commit_id}\"\n 1 file changed, 1 deletion(-)",
        repo.current_branch()
    )
}

/// Handle `cherry-pick <commit>`. Always succeeds with a canned
/// transcript; the referenced commit is never looked up.
pub fn cherry_pick(repo: &RepositoryState, args: &[&str]) -> String {
    let Some(commit_id) = args.first() else {
        return "fatal: commit id required".to_string();
    };
    format!(
        "[{} abc123] {commit_id}\n 1 file changed, 1 insertion(+)",
        repo.current_branch()
    )
}

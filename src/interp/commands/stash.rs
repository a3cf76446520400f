//! stash - snapshot working-directory names under sequential ids.

use crate::core::config::SimConfig;
use crate::core::repo::RepositoryState;

/// Handle `stash [list|apply|drop]`.
pub fn run(repo: &mut RepositoryState, args: &[&str], config: &SimConfig) -> String {
    match args {
        [] => save(repo),
        ["list", ..] => list(repo),
        ["apply", ..] => {
            "On branch main\nChanges not staged for commit:\n\tmodified:   file.txt".to_string()
        }
        ["drop", ..] => drop(repo),
        [sub, ..] => format!("{} stash: '{sub}' is not a valid subcommand", config.program),
    }
}

fn save(repo: &mut RepositoryState) -> String {
    repo.push_stash();
    format!(
        "Saved working directory and index state WIP on {}: abc123 Commit message",
        repo.current_branch()
    )
}

fn list(repo: &RepositoryState) -> String {
    repo.stashes()
        .iter()
        .map(|stash| format!("{}: WIP on {}: abc123 Commit message", stash.id, stash.branch))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes the most recently created stash. Ids are never reused: the
/// sequence counter keeps counting past dropped entries.
fn drop(repo: &mut RepositoryState) -> String {
    match repo.pop_stash() {
        Some(stash) => format!("Dropped refs/{}", stash.id),
        None => "No stash entries found.".to_string(),
    }
}

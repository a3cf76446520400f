//! checkout - switch branches, optionally creating them.

use crate::core::repo::RepositoryState;
use crate::core::types::BranchName;

/// Handle `checkout [-b] <branch>`.
pub fn run(repo: &mut RepositoryState, args: &[&str]) -> String {
    match args {
        [] => "error: pathspec is required for checkout command.".to_string(),
        ["-b"] => "fatal: branch name required".to_string(),
        ["-b", name, ..] => create_and_switch(repo, name),
        [name, ..] => switch(repo, name),
    }
}

fn create_and_switch(repo: &mut RepositoryState, name: &str) -> String {
    let Ok(branch) = BranchName::new(name) else {
        return format!("fatal: '{name}' is not a valid branch name.");
    };
    if !repo.add_branch(branch) {
        return format!("fatal: A branch named '{name}' already exists.");
    }
    repo.switch_branch(name);
    format!("Switched to a new branch '{name}'")
}

fn switch(repo: &mut RepositoryState, name: &str) -> String {
    if !repo.switch_branch(name) {
        return format!("error: pathspec '{name}' did not match any file(s) known to git.");
    }
    format!("Switched to branch '{name}'")
}

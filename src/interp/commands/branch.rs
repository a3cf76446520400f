//! branch - list, create, and delete branches.

use crate::core::repo::RepositoryState;
use crate::core::types::BranchName;

/// Handle `branch [args...]`.
pub fn run(repo: &mut RepositoryState, args: &[&str]) -> String {
    match args {
        [] => list(repo),
        ["-d", rest @ ..] => delete(repo, rest, false),
        ["-D", rest @ ..] => delete(repo, rest, true),
        [name, ..] => create(repo, name),
    }
}

/// List all branches, the checked-out one prefixed `*`.
fn list(repo: &RepositoryState) -> String {
    repo.branches()
        .iter()
        .map(|branch| {
            let prefix = if branch == repo.current_branch() {
                '*'
            } else {
                ' '
            };
            format!("{prefix} {branch}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Delete a branch. The checked-out branch is refused in both the `-d`
/// and `-D` forms - force only changes the success wording.
fn delete(repo: &mut RepositoryState, rest: &[&str], forced: bool) -> String {
    let Some(name) = rest.first() else {
        return "fatal: branch name required".to_string();
    };
    if repo.current_branch().as_str() == *name {
        return format!("error: Cannot delete branch '{name}' checked out at '...'");
    }
    if !repo.remove_branch(name) {
        return format!("error: branch '{name}' not found.");
    }
    if forced {
        format!("Deleted branch {name} (forced).")
    } else {
        format!("Deleted branch {name}.")
    }
}

fn create(repo: &mut RepositoryState, name: &str) -> String {
    let Ok(branch) = BranchName::new(name) else {
        return format!("fatal: '{name}' is not a valid branch name.");
    };
    if !repo.add_branch(branch) {
        return format!("fatal: A branch named '{name}' already exists.");
    }
    format!("Created new branch '{name}'.")
}

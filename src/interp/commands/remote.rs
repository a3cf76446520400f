//! remote, push, pull, fetch - the simulated network surface.
//!
//! Nothing here performs I/O; "remote" behavior is canned transcript
//! text plus bookkeeping in the remote table.

use crate::core::config::SimConfig;
use crate::core::repo::{Remote, RepositoryState};

/// Handle `remote [-v | add <name> <url>]`.
pub fn remote(repo: &mut RepositoryState, args: &[&str], config: &SimConfig) -> String {
    match args {
        [] | ["-v", ..] => list(repo),
        ["add", name, url, ..] => {
            repo.set_remote(
                *name,
                Remote {
                    url: (*url).to_string(),
                    branches: Vec::new(),
                },
            );
            String::new()
        }
        ["add", ..] => format!("usage: {} remote add <name> <url>", config.program),
        [sub, ..] => format!("{} remote: '{sub}' is not a valid subcommand.", config.program),
    }
}

/// Each remote listed twice, once per transfer direction.
fn list(repo: &RepositoryState) -> String {
    let mut lines = Vec::with_capacity(repo.remotes().len() * 2);
    for (name, remote) in repo.remotes() {
        lines.push(format!("{name}\t{} (fetch)", remote.url));
        lines.push(format!("{name}\t{} (push)", remote.url));
    }
    lines.join("\n")
}

/// Handle `push [-u <remote> <branch> | --force | -f]`.
pub fn push(repo: &RepositoryState, args: &[&str]) -> String {
    if repo.remotes().is_empty() {
        return "fatal: No configured push destination.".to_string();
    }

    if let Some(index) = args.iter().position(|arg| *arg == "-u") {
        let (remote, branch) = match (args.get(index + 1), args.get(index + 2)) {
            (Some(remote), Some(branch)) => ((*remote).to_string(), (*branch).to_string()),
            _ => ("origin".to_string(), repo.current_branch().to_string()),
        };
        return format!(
            "Branch '{branch}' set up to track remote branch '{branch}' from '{remote}'."
        );
    }

    let branch = repo.current_branch();
    if args.contains(&"--force") || args.contains(&"-f") {
        return format!(" + {branch} -> {branch} (forced update)");
    }

    format!(
        "Counting objects: 3, done.\n\
         Writing objects: 100% (3/3), 256 bytes | 256.00 KiB/s, done.\n\
         To github.com:example/repo.git\n\
         \x20  abc123..def456  {branch} -> {branch}"
    )
}

/// `pull` always reports the same successful transfer.
pub fn pull() -> String {
    "remote: Enumerating objects: 5, done.\n\
     remote: Counting objects: 100% (5/5), done.\n\
     Merge made by the 'ort' strategy."
        .to_string()
}

/// `fetch` always reports the same successful transfer.
pub fn fetch() -> String {
    "remote: Enumerating objects: 5, done.\n\
     remote: Counting objects: 100% (5/5), done."
        .to_string()
}

//! log and status - read-only history and worktree reports.

use crate::core::config::SimConfig;
use crate::core::repo::RepositoryState;

/// Handle `log [--oneline]`. Entries are rendered most recent first.
pub fn log(repo: &RepositoryState, args: &[&str], config: &SimConfig) -> String {
    if repo.commits().is_empty() {
        return format!(
            "fatal: your current branch '{}' does not have any commits yet",
            repo.current_branch()
        );
    }

    if args.contains(&"--oneline") {
        return repo
            .commits()
            .iter()
            .rev()
            .map(|commit| format!("{} {}", commit.hash, commit.message))
            .collect::<Vec<_>>()
            .join("\n");
    }

    repo.commits()
        .iter()
        .rev()
        .map(|commit| {
            format!(
                "commit {}\nAuthor: {} <{}>\nDate:   {}\n\n    {}",
                commit.hash,
                config.author_name,
                config.author_email,
                commit.created_at.git_log_format(),
                commit.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Handle `status`.
///
/// Sections in order: staged ("to be committed"), then working-dir
/// paths not staged ("not staged for commit"). A separate
/// tracked/untracked dimension is not modeled, so there is no
/// untracked section.
pub fn status(repo: &RepositoryState, config: &SimConfig) -> String {
    if !repo.initialized() {
        return "fatal: not a git repository (or any of the parent directories)".to_string();
    }

    let prog = &config.program;
    let mut lines = vec![format!("On branch {}", repo.current_branch())];

    if !repo.staged().is_empty() {
        lines.push("Changes to be committed:".to_string());
        lines.push(format!("  (use \"{prog} restore --staged <file>...\" to unstage)"));
        lines.extend(repo.staged().iter().map(|path| format!("\tnew file:   {path}")));
    }

    let unstaged: Vec<&String> = repo
        .working_dir()
        .keys()
        .filter(|path| !repo.staged().contains(path.as_str()))
        .collect();
    if !unstaged.is_empty() {
        lines.push("\nChanges not staged for commit:".to_string());
        lines.push(format!(
            "  (use \"{prog} add <file>...\" to update what will be committed)"
        ));
        lines.extend(unstaged.iter().map(|path| format!("\tmodified:   {path}")));
    }

    lines.join("\n")
}

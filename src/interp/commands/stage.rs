//! add and commit - staging area and commit creation.

use crate::core::hash::HashSource;
use crate::core::repo::RepositoryState;

/// Fallback message when `-m` is absent or has no text.
const DEFAULT_MESSAGE: &str = "Update files";

/// Handle `add [. | <path>...]`.
///
/// `.` stages every working-directory path; named paths are staged only
/// when they exist, unknown names are silently ignored. Successful
/// staging produces no output.
pub fn add(repo: &mut RepositoryState, args: &[&str]) -> String {
    match args {
        [] => "Nothing specified, nothing added.".to_string(),
        [".", ..] => {
            repo.stage_all();
            String::new()
        }
        paths => {
            for path in paths {
                repo.stage(path);
            }
            String::new()
        }
    }
}

/// Handle `commit [-m <text>...]`.
pub fn commit(repo: &mut RepositoryState, args: &[&str], hashes: &mut dyn HashSource) -> String {
    if repo.staged().is_empty() {
        return "nothing to commit, working tree clean".to_string();
    }
    let message = message_from_args(args);
    let hash = hashes.next_hash();
    let branch = repo.current_branch().clone();
    let changed = repo.commit_staged(hash.clone(), message.clone());
    format!("[{branch} {hash}] {message}\n {changed} files changed")
}

/// The commit message is everything after `-m`, joined with single
/// spaces. Tokenization has no quoting, so one surrounding pair of
/// double quotes is trimmed to keep `-m "feat: x"` readable.
fn message_from_args(args: &[&str]) -> String {
    let Some(index) = args.iter().position(|arg| *arg == "-m") else {
        return DEFAULT_MESSAGE.to_string();
    };
    let rest = &args[index + 1..];
    if rest.is_empty() {
        return DEFAULT_MESSAGE.to_string();
    }
    let joined = rest.join(" ");
    strip_quote_pair(&joined).to_string()
}

fn strip_quote_pair(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

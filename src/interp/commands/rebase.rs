//! rebase - fixed transcripts; no commit reordering happens.

/// The interactive rebase todo-list template, as an editor would show it.
const INTERACTIVE_TODO: &str = "\npick abc123 First commit\npick def456 Second commit\n\n\
# Rebase xyz789 onto abc123 (2 commands)\n\
#\n\
# Commands:\n\
# p, pick <commit> = use commit\n\
# r, reword <commit> = use commit, but edit the commit message\n\
# e, edit <commit> = use commit, but stop for amending\n\
# s, squash <commit> = use commit, but meld into previous commit\n\
# f, fixup <commit> = like \"squash\", but discard this commit's log message\n\
# x, exec <command> = run command (the rest of the line) using shell\n\
# b, break = stop here (continue rebase later with 'git rebase --continue')\n\
# d, drop <commit> = remove commit\n\
# l, label <label> = label current HEAD with a name\n\
# t, reset <label> = reset HEAD to a label\n\
# m, merge [-C <commit> | -c <commit>] <label> [# <oneline>]\n";

/// Handle `rebase <branch> | --abort | --continue | -i`.
pub fn run(args: &[&str]) -> String {
    if args.is_empty() {
        return "fatal: branch name required for rebase".to_string();
    }
    if args.contains(&"--abort") {
        return "Rebase aborted.".to_string();
    }
    if args.contains(&"--continue") {
        return "Successfully rebased and updated refs/heads/main.".to_string();
    }
    if args.contains(&"-i") {
        return INTERACTIVE_TODO.to_string();
    }
    format!("Successfully rebased and updated refs/heads/{}.", args[0])
}

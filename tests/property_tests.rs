//! Property-based tests for the interpreter and core types.
//!
//! These use proptest to verify invariants hold across randomly
//! generated inputs - most importantly that no command line, however
//! malformed, can make the interpreter panic.

use proptest::prelude::*;

use gitlings::core::config::SimConfig;
use gitlings::core::hash::{HashSource, RandomHashes, SequentialHashes};
use gitlings::core::repo::RepositoryState;
use gitlings::interp::CommandInterpreter;

/// Strategy for a single command-line token (no whitespace).
fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[!-~]{1,12}").expect("valid regex")
}

/// Strategy for an arbitrary command line starting with the program name.
fn program_line() -> impl Strategy<Value = String> {
    proptest::collection::vec(token(), 0..6)
        .prop_map(|tokens| format!("git {}", tokens.join(" ")))
}

fn interpreter() -> CommandInterpreter {
    let config = SimConfig::default();
    let hashes = Box::new(SequentialHashes::new(config.hash_length));
    CommandInterpreter::with_hash_source(config, hashes)
}

proptest! {
    /// Any input line at all produces text, never a panic.
    #[test]
    fn execute_never_panics_on_arbitrary_input(line in "\\PC{0,80}") {
        let mut interp = interpreter();
        let _ = interp.execute(&line);
    }

    /// Lines addressed to the program exercise the verb handlers and
    /// still never panic, across a whole session of them.
    #[test]
    fn execute_never_panics_on_program_lines(lines in proptest::collection::vec(program_line(), 1..20)) {
        let mut interp = interpreter();
        for line in &lines {
            let _ = interp.execute(line);
        }
    }

    /// Inputs that do not start with the program name echo the first
    /// token back in the exact rejection shape.
    #[test]
    fn wrong_program_rejection_shape(first in "[a-z]{1,10}", rest in "[a-z ]{0,20}") {
        prop_assume!(first != "git");
        let mut interp = interpreter();
        let line = format!("{first} {rest}");
        let output = interp.execute(&line);
        prop_assert_eq!(output, format!("git: '{first}' is not a git command."));
    }

    /// Random hashes are always lowercase hex of the configured length.
    #[test]
    fn random_hashes_are_fixed_length_lowercase_hex(length in 4usize..=32) {
        let mut source = RandomHashes::new(length);
        for _ in 0..8 {
            let hash = source.next_hash();
            prop_assert_eq!(hash.len(), length);
            prop_assert!(hash
                .as_str()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    /// Stash ids stay strictly increasing under any interleaving of
    /// saves and drops.
    #[test]
    fn stash_ids_are_strictly_monotone(ops in proptest::collection::vec(any::<bool>(), 1..40)) {
        let mut repo = RepositoryState::new();
        let mut last_id = None;
        for save in ops {
            if save {
                let id = repo.push_stash();
                if let Some(previous) = last_id {
                    prop_assert!(id.index() > previous);
                }
                last_id = Some(id.index());
            } else {
                repo.pop_stash();
            }
        }
    }

    /// Creating a branch then listing always shows it exactly once
    /// (creation of an existing name is refused, so "main" still lists
    /// once), and the current branch is always marked.
    #[test]
    fn branch_create_then_list(name in "[a-z][a-z0-9_-]{0,12}") {
        let mut interp = interpreter();
        interp.execute(&format!("git branch {name}"));
        let listing = interp.execute("git branch");
        let occurrences = listing
            .lines()
            .filter_map(|line| line.get(2..))
            .filter(|rest| *rest == name)
            .count();
        prop_assert_eq!(occurrences, 1);
        prop_assert!(listing.lines().any(|line| line.starts_with("* ")));
    }
}

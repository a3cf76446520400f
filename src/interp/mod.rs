//! interp
//!
//! The command interpreter: tokenize a raw line, dispatch to a verb
//! handler, mutate the simulated repository, return transcript text.
//!
//! # Contract
//!
//! `execute` tokenizes on whitespace only - no quoting or escaping.
//! Every input, however malformed, produces text: missing program name,
//! missing verb, unknown verb, unknown flag, and missing arguments all
//! yield descriptive transcripts, never an error or a panic.
//!
//! The literal output strings are load-bearing for downstream display
//! and verification; handlers reproduce them exactly.

pub mod commands;
pub mod verb;

use tracing::debug;

use crate::core::config::SimConfig;
use crate::core::hash::{HashSource, RandomHashes};
use crate::core::repo::RepositoryState;

pub use verb::Verb;

/// Interprets simulated commands against an owned [`RepositoryState`].
pub struct CommandInterpreter {
    repo: RepositoryState,
    config: SimConfig,
    hashes: Box<dyn HashSource>,
}

impl std::fmt::Debug for CommandInterpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandInterpreter")
            .field("repo", &self.repo)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CommandInterpreter {
    /// Create an interpreter over a fresh repository, with randomized
    /// commit hashes of the configured length.
    pub fn new(config: SimConfig) -> Self {
        let hashes = Box::new(RandomHashes::new(config.hash_length));
        Self::with_hash_source(config, hashes)
    }

    /// Create an interpreter with an explicit hash source. Tests use
    /// this with [`crate::core::hash::SequentialHashes`] to make
    /// transcripts deterministic.
    pub fn with_hash_source(config: SimConfig, hashes: Box<dyn HashSource>) -> Self {
        Self {
            repo: RepositoryState::new(),
            config,
            hashes,
        }
    }

    /// The simulated repository.
    pub fn repo(&self) -> &RepositoryState {
        &self.repo
    }

    /// Mutable access to the repository - the seam for exercise setup
    /// (pre-seeding files, staging a conflict scenario).
    pub fn repo_mut(&mut self) -> &mut RepositoryState {
        &mut self.repo
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Execute one raw command line, returning the transcript text.
    pub fn execute(&mut self, line: &str) -> String {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&program) = tokens.first() else {
            return String::new();
        };

        let prog = &self.config.program;
        if program != prog {
            return format!("{prog}: '{program}' is not a {prog} command.");
        }

        let Some(&verb_token) = tokens.get(1) else {
            return format!("usage: {prog} <command> [<args>]");
        };

        let Some(verb) = Verb::parse(verb_token) else {
            return format!("{prog}: '{verb_token}' is not a simulated command.");
        };

        debug!(verb = verb.as_str(), "dispatching simulated command");
        let args = &tokens[2..];
        self.dispatch(verb, args)
    }

    fn dispatch(&mut self, verb: Verb, args: &[&str]) -> String {
        let repo = &mut self.repo;
        let config = &self.config;
        match verb {
            Verb::Init => commands::init::init(repo, config),
            Verb::Clone => commands::init::clone(args),
            Verb::Branch => commands::branch::run(repo, args),
            Verb::Checkout => commands::checkout::run(repo, args),
            Verb::Merge => commands::merge::run(repo, args, &mut *self.hashes),
            Verb::Remote => commands::remote::remote(repo, args, config),
            Verb::Push => commands::remote::push(repo, args),
            Verb::Pull => commands::remote::pull(),
            Verb::Fetch => commands::remote::fetch(),
            Verb::Add => commands::stage::add(repo, args),
            Verb::Commit => commands::stage::commit(repo, args, &mut *self.hashes),
            Verb::Log => commands::log::log(repo, args, config),
            Verb::Status => commands::log::status(repo, config),
            Verb::Reset => commands::reset::reset(repo, args, config),
            Verb::Revert => commands::reset::revert(repo, args),
            Verb::Tag => commands::tag::run(repo, args, config),
            Verb::Rebase => commands::rebase::run(args),
            Verb::Stash => commands::stash::run(repo, args, config),
            Verb::CherryPick => commands::reset::cherry_pick(repo, args),
        }
    }
}

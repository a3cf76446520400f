//! interp::commands
//!
//! One module per command family. Every handler is a pure mutator of
//! [`crate::core::repo::RepositoryState`] plus a returned transcript
//! string; none performs I/O and none can fail - malformed input maps
//! to descriptive text.

pub mod branch;
pub mod checkout;
pub mod init;
pub mod log;
pub mod merge;
pub mod rebase;
pub mod remote;
pub mod reset;
pub mod stage;
pub mod stash;
pub mod tag;

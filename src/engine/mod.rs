//! engine
//!
//! Session orchestration over the interpreter and the simulated
//! repository: command history, check evaluation, and the exercise
//! runner.
//!
//! # Invariants
//!
//! - History is append-only and ordered by issuance
//! - Verification never mutates repository state or history
//! - Each exercise attempt gets a fresh repository, interpreter, and
//!   history; nothing crosses exercise boundaries

pub mod history;
pub mod runner;
pub mod verify;

pub use history::{CommandHistory, HistoryEntry};
pub use runner::{ExerciseRunner, LessonPhase};
pub use verify::verify;

//! engine::runner
//!
//! The exercise runner - the single entry point the presentation layer
//! talks to.
//!
//! # Lifecycle
//!
//! Each exercise attempt owns a fresh repository, interpreter, and
//! history. The active attempt moves through:
//!
//! ```text
//! NotStarted -> InProgress (first execute) -> Verified (each verify,
//! re-enterable) -> fresh NotStarted on a successful advance
//! ```
//!
//! A successful `advance()` is the completion signal for the finished
//! exercise. At the last exercise, `advance()` reports failure without
//! moving the index and the runner settles in `AllCompleted`.

use indexmap::IndexMap;
use tracing::debug;

use crate::core::config::SimConfig;
use crate::core::repo::RepositoryState;
use crate::engine::history::CommandHistory;
use crate::engine::verify;
use crate::exercise::Exercise;
use crate::interp::CommandInterpreter;

/// Where the active exercise attempt is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonPhase {
    /// No command has been executed against this attempt yet.
    NotStarted,
    /// At least one command has been executed.
    InProgress,
    /// Verification has run at least once. Non-terminal: more commands
    /// may follow and re-verification is allowed.
    Verified,
    /// `advance()` was called at the final exercise; the session is over.
    AllCompleted,
}

/// Sequences exercises and owns the per-attempt simulation state.
#[derive(Debug)]
pub struct ExerciseRunner {
    exercises: Vec<Exercise>,
    index: usize,
    interpreter: CommandInterpreter,
    history: CommandHistory,
    phase: LessonPhase,
    config: SimConfig,
}

impl ExerciseRunner {
    /// Create a runner over the given exercises with default
    /// configuration.
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self::with_config(exercises, SimConfig::default())
    }

    /// Create a runner with explicit configuration.
    ///
    /// Exercises are sorted by id so session order is deterministic
    /// regardless of how the content loader discovered them.
    pub fn with_config(mut exercises: Vec<Exercise>, config: SimConfig) -> Self {
        exercises.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            exercises,
            index: 0,
            interpreter: CommandInterpreter::new(config.clone()),
            history: CommandHistory::new(),
            phase: LessonPhase::NotStarted,
            config,
        }
    }

    /// The active exercise, or `None` when the sequence is empty.
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.index)
    }

    /// The active attempt's lifecycle phase.
    pub fn phase(&self) -> LessonPhase {
        self.phase
    }

    /// The active attempt's command history.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// The active attempt's repository state.
    pub fn repo(&self) -> &RepositoryState {
        self.interpreter.repo()
    }

    /// Mutable repository access - the seam for exercise setup
    /// (pre-seeding files, staging a conflict).
    pub fn repo_mut(&mut self) -> &mut RepositoryState {
        self.interpreter.repo_mut()
    }

    /// Execute one raw command line against the active attempt,
    /// recording it in history.
    pub fn execute(&mut self, line: &str) -> String {
        let output = self.interpreter.execute(line);
        self.history.record(line, output.clone());
        if self.phase == LessonPhase::NotStarted {
            self.phase = LessonPhase::InProgress;
        }
        output
    }

    /// Evaluate the active exercise's checks. Returns an empty map when
    /// no exercise is active. Repository state and history are left
    /// untouched; only the lifecycle phase moves to `Verified`.
    pub fn verify(&mut self) -> IndexMap<String, bool> {
        let Some(exercise) = self.exercises.get(self.index) else {
            return IndexMap::new();
        };
        let results = verify::verify(exercise, self.interpreter.repo(), &self.history);
        if self.phase != LessonPhase::AllCompleted {
            self.phase = LessonPhase::Verified;
        }
        results
    }

    /// Move to the next exercise with a fresh attempt. Returns `false`
    /// at the last exercise (index unchanged, phase `AllCompleted`).
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.exercises.len() {
            self.index += 1;
            debug!(exercise = %self.exercises[self.index].id, "advancing to next exercise");
            self.reset_attempt();
            true
        } else {
            debug!("advance past final exercise; session complete");
            self.phase = LessonPhase::AllCompleted;
            false
        }
    }

    fn reset_attempt(&mut self) {
        self.interpreter = CommandInterpreter::new(self.config.clone());
        self.history = CommandHistory::new();
        self.phase = LessonPhase::NotStarted;
    }
}

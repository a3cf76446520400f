//! engine::history
//!
//! Append-only log of executed commands and their transcripts.

use serde::{Deserialize, Serialize};

/// One executed command: raw input and the transcript it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The raw command line as typed.
    pub input: String,
    /// The transcript text returned by the interpreter.
    pub output: String,
}

/// Append-only command history for one exercise attempt.
///
/// Entries are ordered by issuance; nothing is ever removed or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHistory {
    entries: Vec<HistoryEntry>,
}

impl CommandHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one executed command.
    pub fn record(&mut self, input: impl Into<String>, output: impl Into<String>) {
        self.entries.push(HistoryEntry {
            input: input.into(),
            output: output.into(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterate over raw inputs, oldest first.
    pub fn inputs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.input.as_str())
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been executed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! core::hash
//!
//! Injectable commit-hash generation.
//!
//! Hashes are identifiers for transcript display, not content addresses,
//! so the default source draws from a non-cryptographic randomness pool
//! (UUID v4 bytes). Tests substitute [`SequentialHashes`] to make
//! transcripts deterministic.

use uuid::Uuid;

use super::types::CommitHash;

/// A source of fresh commit hashes.
///
/// Implementations must always emit lowercase hex of the length they
/// were configured with. They need not be reproducible.
pub trait HashSource {
    /// Produce the next commit hash.
    fn next_hash(&mut self) -> CommitHash;
}

/// The default randomized hash source.
#[derive(Debug, Clone)]
pub struct RandomHashes {
    length: usize,
}

impl RandomHashes {
    /// Create a source emitting hashes of `length` hex characters.
    ///
    /// Lengths outside the UUID-backed 1..=32 range are clamped.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(1, 32),
        }
    }
}

impl HashSource for RandomHashes {
    fn next_hash(&mut self) -> CommitHash {
        let mut hex = hex::encode(Uuid::new_v4().as_bytes());
        hex.truncate(self.length);
        CommitHash::from_raw(hex)
    }
}

/// A deterministic counting hash source.
///
/// Emits `0000001`, `0000002`, ... zero-padded to the configured
/// length. Intended for tests and reproducible demo sessions.
#[derive(Debug, Clone)]
pub struct SequentialHashes {
    next: u64,
    length: usize,
}

impl SequentialHashes {
    /// Create a source emitting hashes of `length` hex characters.
    pub fn new(length: usize) -> Self {
        Self {
            next: 0,
            length: length.clamp(1, 16),
        }
    }
}

impl HashSource for SequentialHashes {
    fn next_hash(&mut self) -> CommitHash {
        self.next += 1;
        let mut hex = format!("{:0>width$x}", self.next, width = self.length);
        hex.truncate(self.length);
        CommitHash::from_raw(hex)
    }
}

//! core::repo
//!
//! The mutable data model of one simulated repository.
//!
//! # Invariants
//!
//! - `current_branch` is always a member of `branches`
//! - `staged` is always a subset of the working-directory paths
//! - `commits` is append-only except for the explicit history-rewrite
//!   operation ([`RepositoryState::pop_commit`])
//! - Stash ids come from a monotone counter and are never reused
//!
//! All mutation goes through methods; none of them performs I/O and the
//! model never touches a real repository.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::types::{BranchName, CommitHash, StashId, UtcTimestamp};

/// Whether an in-progress merge conflict has been resolved.
///
/// A fresh repository starts `Resolved` (nothing blocks merging).
/// Exercises that stage a conflict scenario call
/// [`RepositoryState::begin_conflict`]; no simulated command flips the
/// state on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictState {
    /// Unmerged files are present; merging is refused.
    Unresolved,
    /// No conflict, or a previously staged conflict has been resolved.
    Resolved,
}

/// A simulated commit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Display identifier, fixed-length lowercase hex.
    pub hash: CommitHash,
    /// Commit message.
    pub message: String,
    /// Snapshot of the staged paths at commit time.
    pub files: Vec<String>,
    /// Branch that was checked out when the commit was made.
    pub branch: BranchName,
    /// True for commits synthesized by `merge --no-ff`.
    pub is_merge: bool,
    /// Creation time.
    pub created_at: UtcTimestamp,
}

/// A simulated stash entry: working-directory path names, detached from
/// the commit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stash {
    /// Sequential identifier, rendered `stash@{n}`.
    pub id: StashId,
    /// Branch that was checked out when the stash was created.
    pub branch: BranchName,
    /// Snapshot of the working-directory path names.
    pub files: Vec<String>,
}

/// A configured remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    /// Remote URL as given.
    pub url: String,
    /// Branches known to exist on the remote.
    pub branches: Vec<BranchName>,
}

/// A tag bound to a commit hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Hash of the latest commit at tag time, or the zero sentinel.
    pub commit: CommitHash,
    /// Creation time.
    pub created_at: UtcTimestamp,
}

/// The mutable state of one simulated repository.
///
/// Created fresh when an exercise attempt begins and discarded when the
/// runner advances; nothing crosses exercise boundaries.
#[derive(Debug, Clone)]
pub struct RepositoryState {
    initialized: bool,
    branches: IndexSet<BranchName>,
    current_branch: BranchName,
    staged: IndexSet<String>,
    working_dir: IndexMap<String, String>,
    commits: Vec<Commit>,
    remotes: IndexMap<String, Remote>,
    tags: IndexMap<String, Tag>,
    stashes: Vec<Stash>,
    stash_seq: usize,
    conflict: ConflictState,
}

/// The branch every fresh repository starts on.
pub const DEFAULT_BRANCH: &str = "main";

impl Default for RepositoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryState {
    /// Create an uninitialized repository on the default branch.
    pub fn new() -> Self {
        let main = BranchName::new(DEFAULT_BRANCH).expect("default branch name is valid");
        let mut branches = IndexSet::new();
        branches.insert(main.clone());
        Self {
            initialized: false,
            branches,
            current_branch: main,
            staged: IndexSet::new(),
            working_dir: IndexMap::new(),
            commits: Vec::new(),
            remotes: IndexMap::new(),
            tags: IndexMap::new(),
            stashes: Vec::new(),
            stash_seq: 0,
            conflict: ConflictState::Resolved,
        }
    }

    // ---- read access ----

    /// Whether `init` has run.
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// All branches, in creation order.
    pub fn branches(&self) -> &IndexSet<BranchName> {
        &self.branches
    }

    /// The checked-out branch. Always a member of [`Self::branches`].
    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    /// Staged paths, in staging order.
    pub fn staged(&self) -> &IndexSet<String> {
        &self.staged
    }

    /// Working-directory contents, path to opaque text.
    pub fn working_dir(&self) -> &IndexMap<String, String> {
        &self.working_dir
    }

    /// Commit history, oldest first.
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// The most recent commit, if any.
    pub fn latest_commit(&self) -> Option<&Commit> {
        self.commits.last()
    }

    /// Configured remotes, in registration order.
    pub fn remotes(&self) -> &IndexMap<String, Remote> {
        &self.remotes
    }

    /// Tags, in creation order.
    pub fn tags(&self) -> &IndexMap<String, Tag> {
        &self.tags
    }

    /// Stash entries, oldest first.
    pub fn stashes(&self) -> &[Stash] {
        &self.stashes
    }

    /// Current conflict state.
    pub fn conflict(&self) -> ConflictState {
        self.conflict
    }

    /// Whether a branch with this exact name exists.
    pub fn contains_branch(&self, name: &str) -> bool {
        self.branches.iter().any(|b| b.as_str() == name)
    }

    // ---- initialization ----

    /// Mark the repository initialized.
    pub fn initialize(&mut self) {
        self.initialized = true;
    }

    /// Seed the deterministic sample data that makes transcripts feel
    /// like a lived-in repository: one `origin` remote and a small
    /// fixed working set. Called at most once, on first `init`.
    pub fn seed_sample_data(&mut self) {
        let known = ["main", "develop"]
            .iter()
            .filter_map(|name| BranchName::new(*name).ok())
            .collect();
        self.remotes.insert(
            "origin".to_string(),
            Remote {
                url: "https://github.com/example/repo.git".to_string(),
                branches: known,
            },
        );
        self.working_dir
            .insert("README.md".to_string(), "Sample content".to_string());
        self.working_dir
            .insert("src/main.rs".to_string(), "fn main() {}".to_string());
        self.working_dir
            .insert(".gitignore".to_string(), "*.log\ntarget/".to_string());
    }

    // ---- working directory and staging ----

    /// Add or replace a working-directory file.
    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.working_dir.insert(path.into(), content.into());
    }

    /// Stage one path. Returns false when the path is unknown or
    /// already staged (`staged ⊆ working_dir` always holds).
    pub fn stage(&mut self, path: &str) -> bool {
        if !self.working_dir.contains_key(path) {
            return false;
        }
        self.staged.insert(path.to_string())
    }

    /// Stage every working-directory path not already staged.
    pub fn stage_all(&mut self) {
        let paths: Vec<String> = self.working_dir.keys().cloned().collect();
        for path in paths {
            self.staged.insert(path);
        }
    }

    // ---- commits ----

    /// Record a commit from the staged set, clearing the staging area.
    /// Returns the number of files captured.
    pub fn commit_staged(&mut self, hash: CommitHash, message: String) -> usize {
        let files: Vec<String> = self.staged.iter().cloned().collect();
        let count = files.len();
        self.commits.push(Commit {
            hash,
            message,
            files,
            branch: self.current_branch.clone(),
            is_merge: false,
            created_at: UtcTimestamp::now(),
        });
        self.staged.clear();
        count
    }

    /// Record a merge commit. Captures no files and leaves staging alone.
    pub fn record_merge_commit(&mut self, hash: CommitHash, message: String) {
        self.commits.push(Commit {
            hash,
            message,
            files: Vec::new(),
            branch: self.current_branch.clone(),
            is_merge: true,
            created_at: UtcTimestamp::now(),
        });
    }

    /// Drop the most recent commit (history rewrite). Returns it.
    pub fn pop_commit(&mut self) -> Option<Commit> {
        self.commits.pop()
    }

    // ---- branches ----

    /// Add a branch. Returns false if it already existed.
    pub fn add_branch(&mut self, name: BranchName) -> bool {
        self.branches.insert(name)
    }

    /// Remove a branch by name. Refuses the checked-out branch so the
    /// `current_branch ∈ branches` invariant cannot break. Returns
    /// whether a branch was removed.
    pub fn remove_branch(&mut self, name: &str) -> bool {
        if self.current_branch.as_str() == name {
            return false;
        }
        match self.branches.iter().position(|b| b.as_str() == name) {
            Some(index) => {
                self.branches.shift_remove_index(index);
                true
            }
            None => false,
        }
    }

    /// Switch to an existing branch. Returns false if it does not exist.
    pub fn switch_branch(&mut self, name: &str) -> bool {
        match self.branches.iter().find(|b| b.as_str() == name) {
            Some(branch) => {
                self.current_branch = branch.clone();
                true
            }
            None => false,
        }
    }

    // ---- remotes and tags ----

    /// Register or replace a remote.
    pub fn set_remote(&mut self, name: impl Into<String>, remote: Remote) {
        self.remotes.insert(name.into(), remote);
    }

    /// Create or overwrite a tag.
    pub fn set_tag(&mut self, name: impl Into<String>, tag: Tag) {
        self.tags.insert(name.into(), tag);
    }

    // ---- stashes ----

    /// Snapshot the working-directory path names as a new stash entry.
    /// Ids are drawn from the monotone sequence counter.
    pub fn push_stash(&mut self) -> StashId {
        let id = StashId::new(self.stash_seq);
        self.stash_seq += 1;
        self.stashes.push(Stash {
            id,
            branch: self.current_branch.clone(),
            files: self.working_dir.keys().cloned().collect(),
        });
        id
    }

    /// Remove and return the most recently created stash.
    pub fn pop_stash(&mut self) -> Option<Stash> {
        self.stashes.pop()
    }

    // ---- conflicts ----

    /// Stage an unresolved conflict. The authoring seam for exercises
    /// that open in a conflicted state; `merge` refuses until
    /// [`Self::resolve_conflict`] is called.
    pub fn begin_conflict(&mut self) {
        self.conflict = ConflictState::Unresolved;
    }

    /// Mark the staged conflict resolved.
    pub fn resolve_conflict(&mut self) {
        self.conflict = ConflictState::Resolved;
    }
}

//! interp::verb
//!
//! The closed set of simulated command verbs.
//!
//! Dispatch goes through this enum rather than an open string table so
//! the compiler checks that every verb has a handler.

/// A recognized command verb (the second token of a command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Init,
    Clone,
    Branch,
    Checkout,
    Merge,
    Remote,
    Push,
    Pull,
    Fetch,
    Add,
    Commit,
    Log,
    Status,
    Reset,
    Revert,
    Tag,
    Rebase,
    Stash,
    CherryPick,
}

impl Verb {
    /// Every recognized verb.
    pub const ALL: [Verb; 19] = [
        Verb::Init,
        Verb::Clone,
        Verb::Branch,
        Verb::Checkout,
        Verb::Merge,
        Verb::Remote,
        Verb::Push,
        Verb::Pull,
        Verb::Fetch,
        Verb::Add,
        Verb::Commit,
        Verb::Log,
        Verb::Status,
        Verb::Reset,
        Verb::Revert,
        Verb::Tag,
        Verb::Rebase,
        Verb::Stash,
        Verb::CherryPick,
    ];

    /// Parse a verb token. Returns `None` for anything unrecognized.
    pub fn parse(token: &str) -> Option<Self> {
        let verb = match token {
            "init" => Verb::Init,
            "clone" => Verb::Clone,
            "branch" => Verb::Branch,
            "checkout" => Verb::Checkout,
            "merge" => Verb::Merge,
            "remote" => Verb::Remote,
            "push" => Verb::Push,
            "pull" => Verb::Pull,
            "fetch" => Verb::Fetch,
            "add" => Verb::Add,
            "commit" => Verb::Commit,
            "log" => Verb::Log,
            "status" => Verb::Status,
            "reset" => Verb::Reset,
            "revert" => Verb::Revert,
            "tag" => Verb::Tag,
            "rebase" => Verb::Rebase,
            "stash" => Verb::Stash,
            "cherry-pick" => Verb::CherryPick,
            _ => return None,
        };
        Some(verb)
    }

    /// The token spelling of this verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Init => "init",
            Verb::Clone => "clone",
            Verb::Branch => "branch",
            Verb::Checkout => "checkout",
            Verb::Merge => "merge",
            Verb::Remote => "remote",
            Verb::Push => "push",
            Verb::Pull => "pull",
            Verb::Fetch => "fetch",
            Verb::Add => "add",
            Verb::Commit => "commit",
            Verb::Log => "log",
            Verb::Status => "status",
            Verb::Reset => "reset",
            Verb::Revert => "revert",
            Verb::Tag => "tag",
            Verb::Rebase => "rebase",
            Verb::Stash => "stash",
            Verb::CherryPick => "cherry-pick",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

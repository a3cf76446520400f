//! Snapshot tests for the load-bearing multi-line transcripts.
//!
//! The literal wording of these outputs is part of the engine's
//! contract with downstream display and verification, so they are
//! pinned as inline snapshots.

use gitlings::core::config::SimConfig;
use gitlings::core::hash::SequentialHashes;
use gitlings::interp::CommandInterpreter;

fn session() -> CommandInterpreter {
    let config = SimConfig::default();
    let hashes = Box::new(SequentialHashes::new(config.hash_length));
    CommandInterpreter::with_hash_source(config, hashes)
}

#[test]
fn clone_transcript() {
    let mut interp = session();
    insta::assert_snapshot!(
        interp.execute("git clone https://github.com/example/widgets.git"),
        @r"
    Cloning into 'widgets'...
    remote: Enumerating objects: 100, done.
    Receiving objects: 100% (100/100), 1.23 MiB | 2.56 MiB/s, done.
    "
    );
}

#[test]
fn push_default_transcript() {
    let mut interp = session();
    interp.execute("git init");
    insta::assert_snapshot!(
        interp.execute("git push"),
        @r"
    Counting objects: 3, done.
    Writing objects: 100% (3/3), 256 bytes | 256.00 KiB/s, done.
    To github.com:example/repo.git
       abc123..def456  main -> main
    "
    );
}

#[test]
fn pull_transcript() {
    let mut interp = session();
    insta::assert_snapshot!(
        interp.execute("git pull"),
        @r"
    remote: Enumerating objects: 5, done.
    remote: Counting objects: 100% (5/5), done.
    Merge made by the 'ort' strategy.
    "
    );
}

#[test]
fn fetch_transcript() {
    let mut interp = session();
    insta::assert_snapshot!(
        interp.execute("git fetch"),
        @r"
    remote: Enumerating objects: 5, done.
    remote: Counting objects: 100% (5/5), done.
    "
    );
}

#[test]
fn commit_transcript() {
    let mut interp = session();
    interp.execute("git init");
    interp.execute("git add .");
    insta::assert_snapshot!(
        interp.execute("git commit -m \"feat: first\""),
        @r"
    [main 0000001] feat: first
     3 files changed
    "
    );
}

#[test]
fn merge_no_ff_transcript() {
    let mut interp = session();
    interp.execute("git branch dev");
    insta::assert_snapshot!(
        interp.execute("git merge dev --no-ff"),
        @r"
    Merge made by the 'ort' strategy.
     1 file changed, 1 insertion(+)
    "
    );
}

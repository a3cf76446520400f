//! init and clone - repository bootstrap transcripts.

use crate::core::config::SimConfig;
use crate::core::repo::RepositoryState;

/// Initialize the simulated repository.
///
/// The first call flips the initialized flag and, unless disabled in
/// the configuration, seeds the sample remote and working files.
/// Later calls report reinitialization and change nothing.
pub fn init(repo: &mut RepositoryState, config: &SimConfig) -> String {
    if repo.initialized() {
        return "Reinitialized existing Git repository in .git/".to_string();
    }
    repo.initialize();
    if config.seed_sample_data {
        repo.seed_sample_data();
    }
    "Initialized empty Git repository in .git/".to_string()
}

/// Pretend to clone a repository.
///
/// Derives a display name from the URL (last path segment, trailing
/// `.git` stripped) and returns a canned transfer transcript. No state
/// is created.
pub fn clone(args: &[&str]) -> String {
    let Some(&url) = args.first() else {
        return "fatal: You must specify a repository to clone.".to_string();
    };
    let name = url.rsplit('/').next().unwrap_or(url);
    let name = name.strip_suffix(".git").unwrap_or(name);
    format!(
        "Cloning into '{name}'...\n\
         remote: Enumerating objects: 100, done.\n\
         Receiving objects: 100% (100/100), 1.23 MiB | 2.56 MiB/s, done."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    mod init {
        use super::*;

        #[test]
        fn first_init_seeds_sample_data() {
            let mut repo = RepositoryState::new();
            let out = init(&mut repo, &SimConfig::default());
            assert_eq!(out, "Initialized empty Git repository in .git/");
            assert!(repo.initialized());
            assert!(repo.remotes().contains_key("origin"));
            assert_eq!(repo.working_dir().len(), 3);
        }

        #[test]
        fn reinit_changes_nothing() {
            let mut repo = RepositoryState::new();
            let config = SimConfig::default();
            init(&mut repo, &config);
            let files_before = repo.working_dir().len();
            let out = init(&mut repo, &config);
            assert_eq!(out, "Reinitialized existing Git repository in .git/");
            assert_eq!(repo.working_dir().len(), files_before);
        }

        #[test]
        fn seeding_can_be_disabled() {
            let mut repo = RepositoryState::new();
            let config = SimConfig {
                seed_sample_data: false,
                ..Default::default()
            };
            init(&mut repo, &config);
            assert!(repo.initialized());
            assert!(repo.working_dir().is_empty());
            assert!(repo.remotes().is_empty());
        }
    }

    mod clone {
        use super::*;

        #[test]
        fn requires_a_url() {
            assert_eq!(clone(&[]), "fatal: You must specify a repository to clone.");
        }

        #[test]
        fn derives_name_from_url() {
            let out = clone(&["https://github.com/example/widgets.git"]);
            assert!(out.starts_with("Cloning into 'widgets'..."));
        }

        #[test]
        fn keeps_name_without_git_suffix() {
            let out = clone(&["https://github.com/example/widgets"]);
            assert!(out.starts_with("Cloning into 'widgets'..."));
        }
    }
}

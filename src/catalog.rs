//! Local checkout of the feature catalog

use crate::command_ext::command_extensions::*;
use crate::error::{FeatureError, Result};
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;

/// Make sure a working copy of the catalog exists at the root, cloning the
/// upstream repository on first use and fast-forwarding it when requested
pub fn ensure_catalog(root: &Path, upstream: &str, update: bool) -> Result<()> {
    if !root.exists() {
        log::debug!("Creating feature root {:?}", root);

        std::fs::DirBuilder::new()
            .recursive(true)
            .mode(0o755)
            .create(root)
            .map_err(|err| FeatureError::Filesystem {
                path: root.to_path_buf(),
                source: err,
            })?;
    }

    if !root.join(".git").exists() {
        println!("Cloning feature repository, please wait...");

        Command::new("git")
            .args(["clone", upstream])
            .arg(root)
            .run_checked()?;
    }

    if update {
        println!("Updating feature repository, please wait...");

        Command::new("git")
            .arg("-C")
            .arg(root)
            .args(["pull", "--ff-only"])
            .run_checked()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[test]
    fn existing_checkout_is_a_noop() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join(".git")).unwrap();

        // .git present and no update requested, nothing to do
        let result = ensure_catalog(root.path(), "/nonexistent/upstream", false);
        assert!(result.is_ok(), "result is err: {}", result.unwrap_err());
    }

    #[test]
    fn creates_root_and_clones() {
        let tempdir = tempfile::tempdir().unwrap();
        let upstream = fixtures::git_repo(tempdir.path());
        let root = tempdir.path().join("nested").join("features");

        let result = ensure_catalog(&root, upstream.to_str().unwrap(), false);
        assert!(result.is_ok(), "result is err: {}", result.unwrap_err());
        assert!(root.join(".git").is_dir());
    }

    #[test]
    fn update_fast_forwards() {
        let tempdir = tempfile::tempdir().unwrap();
        let upstream = fixtures::git_repo(tempdir.path());
        let root = tempdir.path().join("features");

        ensure_catalog(&root, upstream.to_str().unwrap(), false).unwrap();

        let result = ensure_catalog(&root, upstream.to_str().unwrap(), true);
        assert!(result.is_ok(), "result is err: {}", result.unwrap_err());
    }

    #[test]
    fn failed_clone_aborts() {
        let tempdir = tempfile::tempdir().unwrap();
        let root = tempdir.path().join("features");

        let result = ensure_catalog(&root, "/nonexistent/upstream", false);
        assert!(matches!(result, Err(FeatureError::ExitStatus { .. })));
    }

    #[test]
    fn update_fails_outside_a_repository() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join(".git")).unwrap();

        // fake .git directory so the pull runs and git rejects it
        let result = ensure_catalog(root.path(), "/nonexistent/upstream", true);
        assert!(matches!(result, Err(FeatureError::ExitStatus { .. })));
    }
}

//! Persisting declared environment variables for future login shells

use crate::error::{FeatureError, Result};
use crate::manifest::FeatureManifest;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Write the manifest's containerEnv mapping as a profile fragment so the
/// variables survive shell restarts
///
/// The file is overwritten whole on reinstall. Values are written verbatim,
/// quoting is the manifest author's responsibility.
pub fn persist_environment(manifest: &FeatureManifest, profile_dir: &Path) -> Result<Option<PathBuf>> {
    if manifest.container_env.is_empty() {
        return Ok(None);
    }

    println!("Setting environment variables...");

    let profile = profile_dir.join(format!("devcontainer-{}.sh", manifest.id));
    println!("Creating profile file {:?}", profile);

    let mut contents = String::new();
    for (key, value) in &manifest.container_env {
        // infallible, writing into a String
        let _ = writeln!(contents, "export {}={}", key, value);
    }

    std::fs::write(&profile, contents).map_err(|err| FeatureError::Filesystem {
        path: profile.clone(),
        source: err,
    })?;

    Ok(Some(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_with_env(env: &[(&str, &str)]) -> FeatureManifest {
        FeatureManifest {
            id: "node".to_string(),
            container_env: env
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_mapping_is_a_noop() {
        let tempdir = tempfile::tempdir().unwrap();

        let written = persist_environment(&manifest_with_env(&[]), tempdir.path()).unwrap();
        assert_eq!(written, None);
        assert_eq!(std::fs::read_dir(tempdir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_one_export_per_entry() {
        let tempdir = tempfile::tempdir().unwrap();
        let manifest = manifest_with_env(&[("FOO", "bar"), ("BAZ", "qux")]);

        let written = persist_environment(&manifest, tempdir.path())
            .unwrap()
            .unwrap();
        assert_eq!(written, tempdir.path().join("devcontainer-node.sh"));

        let contents = std::fs::read_to_string(&written).unwrap();
        let mut lines: Vec<&str> = contents.lines().collect();
        lines.sort();

        assert_eq!(lines, vec!["export BAZ=qux", "export FOO=bar"]);
    }

    #[test]
    fn reinstall_overwrites_previous_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let profile = tempdir.path().join("devcontainer-node.sh");
        std::fs::write(&profile, "export STALE=1\n").unwrap();

        persist_environment(&manifest_with_env(&[("FOO", "bar")]), tempdir.path()).unwrap();

        let contents = std::fs::read_to_string(&profile).unwrap();
        assert_eq!(contents, "export FOO=bar\n");
    }

    #[test]
    fn unwritable_directory_fails() {
        let manifest = manifest_with_env(&[("FOO", "bar")]);

        let result = persist_environment(&manifest, Path::new("/nonexistent/profile.d"));
        assert!(matches!(result, Err(FeatureError::Filesystem { .. })));
    }
}

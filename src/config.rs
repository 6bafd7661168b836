use crate::cli::Cli;
use crate::vars;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration for one installation run, built once from the CLI and
/// passed by parameter into the pipeline
#[derive(Debug, Clone)]
pub struct Config {
    /// Feature to install, matches a subdirectory under `src/` in the catalog
    pub feature: String,

    /// Local checkout of the feature catalog
    pub feature_root: PathBuf,

    /// Fast-forward the catalog before installing
    pub update: bool,

    /// Upstream repository the catalog is cloned from
    pub catalog_url: String,

    /// File whose existence means common-utils is already installed
    pub marker_file: PathBuf,

    /// Directory where profile fragments are written
    pub profile_dir: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = shellexpand::full(&cli.root)
            .with_context(|| format!("failed to expand feature root {:?}", cli.root))?;

        Ok(Self {
            feature: cli.feature.clone(),
            feature_root: PathBuf::from(root.as_ref()),
            update: cli.update,
            catalog_url: vars::CATALOG_URL.to_string(),
            marker_file: PathBuf::from(vars::COMMON_UTILS_MARKER),
            profile_dir: PathBuf::from(vars::PROFILE_DIR),
        })
    }
}

//! The installation pipeline
//!
//! Five stages run in a fixed order, each one a precondition of the next:
//! catalog sync, manifest resolution, common-utils bootstrap, install script
//! execution, environment persistence. The first failure aborts the run and
//! whatever the earlier stages did stays on the host.

use crate::error::{FeatureError, Result};
use crate::{bootstrap, catalog, environment, manifest, script};
use crate::config::Config;

/// Install a single feature from the catalog
pub fn install_feature(config: &Config) -> Result<()> {
    // install scripts assume full privileges, refuse anything else before
    // touching the filesystem
    if users::get_effective_uid() != 0 {
        return Err(FeatureError::NotRoot);
    }

    catalog::ensure_catalog(&config.feature_root, &config.catalog_url, config.update)?;

    log::info!("Feature root {:?}", config.feature_root);

    let manifest = manifest::resolve(&config.feature_root, &config.feature)?;

    bootstrap::ensure_common_utils(&config.feature_root, &config.marker_file)?;

    println!("Installing requested feature, please wait...");
    script::run_install_script(&config.feature_root, &config.feature)?;

    environment::persist_environment(&manifest, &config.profile_dir)?;

    println!("Feature installed successfully. Restart your shell to apply the changes.");

    Ok(())
}

//! File containing constants

/// Prefix env var name with proper prefix
#[macro_export]
macro_rules! ENV_VAR_PREFIX {
    ($($args:literal),*) => {
        concat!(env!("CARGO_PKG_NAME_UPPERCASE"), "_", $($args),*)
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Canonical upstream feature catalog
pub const CATALOG_URL: &str = "https://github.com/devcontainers/features";

/// Directory inside the catalog holding one subdirectory per feature
pub const CATALOG_SRC_DIR: &str = "src";

/// Manifest file inside each feature subdirectory
pub const MANIFEST_FILE: &str = "devcontainer-feature.json";

/// Install script inside each feature subdirectory
pub const INSTALL_SCRIPT: &str = "install.sh";

/// Feature that must be installed before any other feature
pub const COMMON_UTILS_ID: &str = "common-utils";

/// This file existing is a signal that common-utils was already installed,
/// left behind by the script itself
pub const COMMON_UTILS_MARKER: &str = "/usr/local/etc/vscode-dev-containers/common";

/// Directory where generated profile fragments are written
pub const PROFILE_DIR: &str = "/etc/profile.d";

/// Default location of the local catalog checkout
pub const DEFAULT_FEATURE_ROOT: &str = "~/.features";

/// Override the catalog checkout location
pub const ENV_FEATURE_ROOT: &str = ENV_VAR_PREFIX!("ROOT");

/// Update the catalog before installing
pub const ENV_UPDATE: &str = ENV_VAR_PREFIX!("UPDATE");

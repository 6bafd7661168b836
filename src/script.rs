//! Running feature install scripts
//!
//! Scripts are arbitrary externally authored shell, they run synchronously
//! with the privileges, environment and stdio of this process and their side
//! effects on the host are accepted as-is.

use crate::command_ext::command_extensions::*;
use crate::error::{FeatureError, Result};
use crate::vars;
use std::path::Path;

/// Run `src/<feature>/install.sh` from the catalog to completion
pub fn run_install_script(root: &Path, feature: &str) -> Result<()> {
    let script = root
        .join(vars::CATALOG_SRC_DIR)
        .join(feature)
        .join(vars::INSTALL_SCRIPT);

    if !script.exists() {
        return Err(FeatureError::MissingScript(feature.to_string()));
    }

    log::debug!("Running install script {:?}", script);

    Command::new("bash").arg(&script).run_checked()
}

//! One-time install of the shared common-utils feature

use crate::error::Result;
use crate::script;
use crate::vars;
use std::path::Path;

/// Install common-utils unless the marker file says it already happened
///
/// The marker is written by the script itself on success, its presence is
/// treated as authoritative and never re-verified. A script that fails to
/// write it will be re-run on every invocation.
pub fn ensure_common_utils(root: &Path, marker: &Path) -> Result<()> {
    if marker.exists() {
        log::debug!("Marker {:?} exists, skipping common-utils", marker);
        return Ok(());
    }

    println!("Installing common utils feature, please wait...");

    script::run_install_script(root, vars::COMMON_UTILS_ID)
}

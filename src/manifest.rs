//! Reading and validating `devcontainer-feature.json` manifests

use crate::error::{FeatureError, Result};
use crate::vars;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One entry under `options` in the manifest
///
/// The default can be any JSON value so it is kept as-is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSpec {
    #[serde(rename = "type")]
    pub option_type: String,
    pub proposals: Vec<String>,
    pub default: serde_json::Value,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vscode {
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customizations {
    pub vscode: Vscode,
}

/// Declared metadata of a single feature
///
/// Parsing is deliberately permissive to match the upstream feature format,
/// unknown fields are ignored and missing fields fall back to empty values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureManifest {
    pub id: String,
    pub version: String,
    pub name: String,
    #[serde(rename = "documentationURL")]
    pub documentation_url: String,
    pub description: String,
    pub options: HashMap<String, OptionSpec>,
    pub init: bool,
    pub customizations: Customizations,
    #[serde(rename = "containerEnv")]
    pub container_env: HashMap<String, String>,
    #[serde(rename = "capAdd")]
    pub cap_add: Vec<String>,
    #[serde(rename = "securityOpt")]
    pub security_opt: Vec<String>,
    #[serde(rename = "installsAfter")]
    pub installs_after: Vec<String>,
}

impl FeatureManifest {
    pub fn from_str(feature: &str, input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|err| FeatureError::Manifest {
            id: feature.to_string(),
            source: err,
        })
    }
}

/// Load the manifest for a feature from the catalog checkout
///
/// A manifest is only accepted when its id matches the requested feature and
/// the install script exists next to it
pub fn resolve(root: &Path, feature: &str) -> Result<FeatureManifest> {
    if !root.exists() {
        return Err(FeatureError::RootNotFound(root.to_path_buf()));
    }

    let feature_dir = root.join(vars::CATALOG_SRC_DIR).join(feature);
    if !feature_dir.exists() {
        return Err(FeatureError::FeatureNotFound(feature.to_string()));
    }

    let manifest_path = feature_dir.join(vars::MANIFEST_FILE);
    let contents =
        std::fs::read_to_string(&manifest_path).map_err(|err| FeatureError::Filesystem {
            path: manifest_path.clone(),
            source: err,
        })?;

    let manifest = FeatureManifest::from_str(feature, &contents)?;

    if manifest.id != feature {
        return Err(FeatureError::ManifestIdMismatch {
            requested: feature.to_string(),
            found: manifest.id,
        });
    }

    if !feature_dir.join(vars::INSTALL_SCRIPT).exists() {
        return Err(FeatureError::MissingScript(feature.to_string()));
    }

    Ok(manifest)
}

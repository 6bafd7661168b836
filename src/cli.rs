use crate::vars;
use clap::Parser;

/// Install devcontainer features on the host system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Location to checkout the feature repository
    #[arg(short, long, env = vars::ENV_FEATURE_ROOT, default_value = vars::DEFAULT_FEATURE_ROOT)]
    pub root: String,

    /// Update the feature repository before installing
    #[arg(short, long, action, env = vars::ENV_UPDATE)]
    pub update: bool,

    /// Name of the feature to install, e.g. 'node' or 'go'
    pub feature: String,
}

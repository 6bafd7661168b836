//! Error taxonomy for the installation pipeline
//!
//! Every stage returns its error unmodified, the orchestrator never retries
//! or recovers, it prints the error and aborts.

use std::path::PathBuf;

pub type Result<T, E = FeatureError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("this command must be run as root")]
    NotRoot,

    #[error("filesystem error at {path:?}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("feature root {0:?} does not exist")]
    RootNotFound(PathBuf),

    #[error("feature {0} not found")]
    FeatureNotFound(String),

    #[error("feature {0} does not have an install script")]
    MissingScript(String),

    #[error("could not parse manifest for feature {id}")]
    Manifest {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("manifest id {found:?} does not match requested feature {requested:?}")]
    ManifestIdMismatch { requested: String, found: String },

    #[error("could not execute {command:?}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command {command:?} exited with code {code}")]
    ExitStatus { command: String, code: u8 },
}

use crate::error::{FeatureError, Result};
use std::process::{Command, ExitStatus};

#[allow(unused_imports)]
pub mod command_extensions {
    pub use super::{CommandExt, CommandOutputExt};
    pub use std::process::Command;
}

/// Simple extension trait to avoid duplicating code, allow easy conversion to `ExitCode`
pub trait CommandOutputExt {
    /// Convert into `std::process::ExitCode` easily consistantly
    ///
    /// Equal to `ExitCode::from(1)` in case of signal termination (or any exit code larger than 255)
    fn get_code(&self) -> u8;
}

impl CommandOutputExt for ExitStatus {
    fn get_code(&self) -> u8 {
        // the unwrap_or(1) s are cause even if conversion fails it still failed just termination
        // by signal is larger than 255 that u8 exit code on unix allows
        TryInto::<u8>::try_into(self.code().unwrap_or(1)).unwrap_or(1)
    }
}

pub trait CommandExt {
    /// Returns the command with all the arguments as a `String`
    fn get_full_command(&self) -> String;

    /// Logs command and status after running `Command::status`
    fn log_status(&mut self) -> std::io::Result<ExitStatus>;

    /// Runs the command to completion with inherited stdio, mapping spawn
    /// failures and non-zero exits into the pipeline error taxonomy
    fn run_checked(&mut self) -> Result<()>;
}

impl CommandExt for Command {
    fn get_full_command(&self) -> String {
        format!(
            "{} {}",
            self.get_program().to_string_lossy(),
            self.get_args()
                .collect::<Vec<_>>()
                .join(std::ffi::OsStr::new(" "))
                .to_string_lossy(),
        )
    }

    fn log_status(&mut self) -> std::io::Result<ExitStatus> {
        let status = self.status();

        match status.as_ref() {
            Ok(status) => log::debug!(
                "Command {:?} (status)\n  STATUS: {:?}",
                self.get_full_command(),
                status,
            ),
            Err(err) => log::debug!(
                "Command {:?} (status)\n  ERROR {:?}",
                self.get_full_command(),
                err,
            ),
        }

        status
    }

    fn run_checked(&mut self) -> Result<()> {
        match self.log_status() {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(FeatureError::ExitStatus {
                command: self.get_full_command(),
                code: status.get_code(),
            }),
            Err(err) => Err(FeatureError::Spawn {
                command: self.get_full_command(),
                source: err,
            }),
        }
    }
}

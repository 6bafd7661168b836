mod bootstrap;
mod catalog;
mod cli;
mod command_ext;
mod config;
mod environment;
mod error;
mod install;
mod manifest;
mod script;
mod vars;


use clap::Parser;
use config::Config;
use std::process::ExitCode;

pub use vars::{APP_NAME, VERSION};

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("Failed to initialize logger");

    let config = match Config::from_cli(&args) {
        Ok(x) => x,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match install::install_feature(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // single diagnostic line with the whole error chain
            eprintln!("Error: {:#}", anyhow::Error::from(err));
            ExitCode::FAILURE
        }
    }
}

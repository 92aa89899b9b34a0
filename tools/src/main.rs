use std::process::ExitCode;

use clap::Parser;

use crate::{
    cli::{CliCommand, CliSubcommand},
    config::FormsmithConfiguration,
    error::ToolError,
};

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tracing_setup;

fn main() -> ExitCode {
    let cli = CliCommand::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("formsmith: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: CliCommand) -> Result<(), ToolError> {
    let configuration = FormsmithConfiguration::load()?;
    tracing_setup::setup_tracing(configuration.log.as_deref())?;
    match cli.subcommand {
        CliSubcommand::Generate(args) => commands::generate(args, &configuration),
        CliSubcommand::Preview(args) => commands::preview(args, &configuration),
        CliSubcommand::Scaffold(args) => commands::scaffold(args, &configuration),
    }
}

use std::process::ExitCode;

use clap::Parser;
use log;
use pretty_env_logger;

mod bundle;
mod cli;
mod commands;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(cli.options.verbose.log_level_filter())
        .init();

    if let Err(e) = commands::inline(&cli.inline) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    return ExitCode::SUCCESS;
}

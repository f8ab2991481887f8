//! Daybook CLI - a small, CLI-first personal journal
//!
//! This is the command-line interface for Daybook. It resolves the journal
//! location, calls into `daybook-core`, and renders the results.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};

use daybook_core::DaybookError;

use crate::app::load_config;
use crate::cli::{Cli, Commands};
use crate::commands::entries::{
    handle_add, handle_delete, handle_list, handle_random, handle_search,
};
use crate::commands::init::handle_init;
use crate::commands::misc::handle_completions;
use crate::commands::stats::handle_stats;
use crate::errors::CliError;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Init(args) => handle_init(cli, args),
        Commands::Add(args) => handle_add(cli, &load_config()?, args),
        Commands::List(args) => handle_list(cli, &load_config()?, args),
        Commands::Search(args) => handle_search(cli, &load_config()?, args),
        Commands::Random(args) => handle_random(cli, &load_config()?, args),
        Commands::Delete(args) => handle_delete(cli, &load_config()?, args),
        Commands::Stats(command) => handle_stats(cli, &load_config()?, command),
        Commands::Completions(args) => handle_completions(args.shell),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "command failed");
        let err = match err.downcast::<DaybookError>() {
            Ok(core) => CliError::from(core).exit(),
            Err(other) => other,
        };
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

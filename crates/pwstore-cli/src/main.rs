//! pwstore CLI - a local, offline password store
//!
//! This is the command-line interface for pwstore. It drives the engine in
//! `pwstore-core` through interactive screens and a few scriptable commands.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use clap::Parser;
use pwstore_core::VaultError;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{generate, misc, session, status, strength};
use crate::errors::CliError;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui();

        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            exit_with(&ui_ctx, cli_err);
        }
        if let Some(cli_err) = e.downcast_ref::<VaultError>().and_then(CliError::from_vault) {
            exit_with(&ui_ctx, &cli_err);
        }

        print_error(&ui_ctx, &format!("{:#}", e), None);
        std::process::exit(1);
    }
}

fn exit_with(ui_ctx: &UiContext, err: &CliError) -> ! {
    print_error(ui_ctx, err.message(), err.hint());
    std::process::exit(err.exit_code());
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None => session::handle_session(ctx),
        Some(Commands::Generate(args)) => generate::handle_generate(ctx, args),
        Some(Commands::Strength) => strength::handle_strength(ctx),
        Some(Commands::Status) => status::handle_status(ctx),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
    }
}

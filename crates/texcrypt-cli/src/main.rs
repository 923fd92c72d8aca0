//! Texcrypt CLI - type a note, keep it encrypted at rest
//!
//! This is the command-line interface for Texcrypt. It resolves the note,
//! gets a passphrase, and hands the terminal to the core editor.

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

use crate::app::AppContext;
use crate::cli::Cli;
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::helpers::validate_note_name;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        let ui_ctx = UiContext::from_env();
        let code = match e.downcast_ref::<CliError>() {
            Some(cli_err) => {
                print_error(&ui_ctx, &cli_err.to_string(), cli_err.hint());
                cli_err.exit_code()
            }
            None => {
                print_error(&ui_ctx, &format!("{:#}", e), None);
                exit_codes::FAILURE
            }
        };
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Some(name) = cli.name.as_deref() {
        validate_note_name(name)?;
    }
    let ctx = AppContext::load(cli)?;

    if let Some(source) = ctx.cli().encrypt.as_deref() {
        return commands::handle_encrypt(&ctx, source);
    }
    if let Some(source) = ctx.cli().decrypt.as_deref() {
        return commands::handle_decrypt(&ctx, source);
    }

    let name = ctx
        .cli()
        .name
        .as_deref()
        .ok_or_else(|| CliError::invalid_input("Note name is required"))?;
    tracing::debug!(
        note = %ctx.note(name).path().display(),
        read_only = ctx.cli().read_only,
        "resolved note"
    );

    if ctx.cli().read_only {
        commands::handle_read(&ctx, name)
    } else {
        commands::handle_edit(&ctx, name)
    }
}

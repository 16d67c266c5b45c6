//! The interactive session: setup, login, then the main menu.

use pwstore_core::{Session, Vault, VaultError};

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::prompt::prompt_select;
use crate::ui::{badge, blank_line, header, Badge, UiContext};

use super::{entries, generate, login, rotate, setup};

const MENU: [&str; 5] = [
    "List entries",
    "Add entry",
    "Generate password",
    "Change master password",
    "Quit",
];

pub fn handle_session(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui();
    if !ui.is_interactive() {
        return Err(CliError::invalid_input(
            "The interactive session needs a terminal. In scripts use `pwstore generate`, `pwstore strength` or `pwstore status`.",
        )
        .into());
    }

    let store = ctx.store_path()?;
    let mut vault = ctx.open_vault()?;
    println!("{}", header(&ui, "unlock", Some(&store.display().to_string())));
    blank_line(&ui);

    if !vault.is_initialized() {
        setup::run_setup(&ui, &mut vault)?;
        blank_line(&ui);
    }
    let mut session = login::run_login(&ui, &vault)?;

    main_menu(ctx, &ui, &vault, &mut session)
}

fn main_menu(
    ctx: &AppContext,
    ui: &UiContext,
    vault: &Vault,
    session: &mut Session,
) -> anyhow::Result<()> {
    loop {
        blank_line(ui);
        if let Some(message) = session.take_error() {
            println!("{}", badge(ui, Badge::Err, &message));
        }

        let result = match prompt_select("What would you like to do?", &MENU)? {
            Some(0) => entries::run_browse(ui, vault, session),
            Some(1) => entries::run_add(ctx, ui, vault, session),
            Some(2) => generate::run_generator(ctx, ui),
            Some(3) => rotate::run_rotation(ui, vault, session),
            _ => return Ok(()),
        };
        keep_going(session, result)?;
    }
}

/// Park engine errors on the session for the next menu render. Fatal and
/// critical errors, and anything that is not an engine error, end the session.
fn keep_going(session: &mut Session, result: anyhow::Result<()>) -> anyhow::Result<()> {
    let Err(err) = result else {
        return Ok(());
    };
    match err.downcast_ref::<VaultError>() {
        Some(vault_err) if !vault_err.is_fatal() && !vault_err.is_critical() => {
            tracing::debug!(error = %vault_err, "screen failed");
            session.set_error(vault_err.to_string());
            Ok(())
        }
        _ => Err(err),
    }
}

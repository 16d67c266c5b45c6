//! Catalog screens: browse, detail view, delete, add.

use pwstore_core::codec::decode_label;
use pwstore_core::flows::{BrowseFlow, BrowseState};
use pwstore_core::validation::validate_confirmation;
use pwstore_core::{
    evaluate_strength, generate_password, EntryFields, Record, Session, Vault, VaultError,
};
use zeroize::Zeroizing;

use crate::app::AppContext;
use crate::ui::prompt::{
    prompt_confirm, prompt_fuzzy_select, prompt_input, prompt_secret, prompt_select,
};
use crate::ui::render::{entry_detail, entry_row, entry_table, strength};
use crate::ui::{badge, blank_line, divider, kv, receipt, Badge, UiContext};

use super::setup::report_recoverable;

pub fn run_browse(ui: &UiContext, vault: &Vault, session: &Session) -> anyhow::Result<()> {
    let mut flow = BrowseFlow::open(vault, session)?;
    let mut record: Option<Record> = None;

    loop {
        match flow.state().clone() {
            BrowseState::Listing => {
                record = None;
                if flow.entries().is_empty() {
                    println!("{}", badge(ui, Badge::Info, "No entries yet."));
                    return Ok(());
                }
                if !ui.mode.is_pretty() {
                    println!("{}", entry_table(ui, flow.entries()));
                }
                let items: Vec<String> = flow.entries().iter().map(entry_row).collect();
                match prompt_fuzzy_select("Entries (type to filter, Esc to go back)", &items)? {
                    Some(index) => flow.select(index)?,
                    None => flow.back(),
                }
            }
            BrowseState::Viewing { key, revealed } => {
                if record.is_none() {
                    match vault.show_entry(session, &key) {
                        Ok(opened) => record = Some(opened),
                        Err(err) => {
                            tracing::debug!(key = %key, error = %err, "entry unreadable");
                            let message = match err {
                                VaultError::NotFound(_) => "This entry no longer exists",
                                _ => "Could not read this entry",
                            };
                            println!("{}", badge(ui, Badge::Err, message));
                            flow.back();
                            flow.refresh(vault, session)?;
                            continue;
                        }
                    }
                }
                let Some(opened) = record.as_ref() else {
                    continue;
                };

                println!("{}", divider(ui));
                println!("{}", entry_detail(ui, &decode_label(&key), opened, revealed));
                if revealed {
                    let score = evaluate_strength(&opened.secret);
                    println!("{}", kv(ui, "Strength", &strength(ui, &score)));
                }

                let toggle = if revealed { "Hide password" } else { "Show password" };
                match prompt_select("Action", &[toggle, "Delete", "Back"])? {
                    Some(0) => {
                        flow.toggle_reveal()?;
                    }
                    Some(1) => flow.request_delete()?,
                    _ => flow.back(),
                }
            }
            BrowseState::ConfirmingDelete { key } => {
                let question = format!("Delete \"{}\"? This cannot be undone.", decode_label(&key));
                if prompt_confirm(&question, false)? {
                    record = None;
                    match flow.confirm_delete(vault, session) {
                        Ok(()) => println!("{}", badge(ui, Badge::Ok, "Entry deleted")),
                        Err(err) => println!("{}", badge(ui, Badge::Err, &err.to_string())),
                    }
                } else {
                    flow.back();
                }
            }
            BrowseState::Closed => return Ok(()),
        }
    }
}

pub fn run_add(
    ctx: &AppContext,
    ui: &UiContext,
    vault: &Vault,
    session: &Session,
) -> anyhow::Result<()> {
    let label = prompt_input("Site/Service name")?;
    let username = prompt_input("Username")?;
    let email = prompt_input("Email")?;
    let url = prompt_input("URL")?;

    let Some(secret) = choose_secret(ctx, ui)? else {
        return Ok(());
    };

    let fields = EntryFields {
        secret: secret.to_string(),
        username,
        email,
        url,
    };
    match vault.add_entry(session, &label, &fields) {
        Ok(key) => {
            blank_line(ui);
            println!("{}", receipt(ui, "Entry saved", &[("Key", key)]));
            Ok(())
        }
        Err(err) => report_recoverable(ui, err),
    }
}

/// Typed (with confirmation) or generated. `None` when the user backs out.
fn choose_secret(ctx: &AppContext, ui: &UiContext) -> anyhow::Result<Option<Zeroizing<String>>> {
    match prompt_select("Password", &["Enter a password", "Generate one"])? {
        Some(0) => loop {
            let password = prompt_secret("Password")?;
            let confirmation = prompt_secret("Confirm password")?;
            match validate_confirmation(&password, &confirmation) {
                Ok(()) => return Ok(Some(password)),
                Err(err) => println!("{}", badge(ui, Badge::Err, &err.to_string())),
            }
        },
        Some(_) => {
            let options = ctx.password_options()?;
            loop {
                let password =
                    Zeroizing::new(generate_password(&options).map_err(VaultError::from)?);
                println!("{}", kv(ui, "Generated", &password));
                println!(
                    "{}",
                    kv(ui, "Strength", &strength(ui, &evaluate_strength(&password)))
                );
                if prompt_confirm("Use this password?", true)? {
                    return Ok(Some(password));
                }
            }
        }
        None => Ok(None),
    }
}

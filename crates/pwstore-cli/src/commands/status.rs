use crate::app::AppContext;
use crate::errors::vault_error;
use crate::ui::{header, kv};

/// Prepare the store and report where it is. Never asks for a passphrase.
pub fn handle_status(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui();
    let path = ctx.store_path()?;
    let vault = ctx.open_vault()?;
    let entries = vault.gateway().store().list().map_err(vault_error)?.len();

    println!("{}", header(&ui, "status", None));
    println!("{}", kv(&ui, "Store", &path.display().to_string()));
    println!(
        "{}",
        kv(&ui, "Initialized", if vault.is_initialized() { "true" } else { "false" })
    );
    println!("{}", kv(&ui, "Entries", &entries.to_string()));
    Ok(())
}

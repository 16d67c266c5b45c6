use pwstore_core::flows::LoginFlow;
use pwstore_core::{Session, Vault};

use crate::ui::prompt::prompt_secret;
use crate::ui::{badge, Badge, UiContext};

use super::setup::report_recoverable;

/// Prompt until the master password opens the store. Retries are unlimited.
pub fn run_login(ui: &UiContext, vault: &Vault) -> anyhow::Result<Session> {
    let mut flow = LoginFlow::new();
    loop {
        let password = prompt_secret("Master password")?;
        match flow.submit(vault, &password) {
            Ok(session) => {
                tracing::debug!(failed_attempts = flow.failed_attempts(), "logged in");
                println!("{}", badge(ui, Badge::Ok, "Unlocked"));
                return Ok(session);
            }
            Err(err) => report_recoverable(ui, err)?,
        }
    }
}

//! First-run screens: master password, then validation phrase.

use pwstore_core::flows::{SetupFlow, SetupState};
use pwstore_core::validation::{MIN_MASTER_LEN, MIN_PHRASE_LEN};
use pwstore_core::{Vault, VaultError};

use crate::ui::prompt::prompt_secret;
use crate::ui::{badge, blank_line, hint, receipt, Badge, UiContext};

/// Print a recoverable error and keep going; anything else ends the flow.
pub fn report_recoverable(ui: &UiContext, err: VaultError) -> anyhow::Result<()> {
    if err.is_recoverable() {
        println!("{}", badge(ui, Badge::Err, &err.to_string()));
        Ok(())
    } else {
        Err(err.into())
    }
}

pub fn run_setup(ui: &UiContext, vault: &mut Vault) -> anyhow::Result<()> {
    println!("{}", badge(ui, Badge::Info, "No password store found. Let's create one."));
    let mut flow = SetupFlow::new();

    while !flow.is_complete() {
        blank_line(ui);
        let outcome = match flow.state() {
            SetupState::AwaitingMasterPassword => {
                println!(
                    "{}",
                    hint(
                        ui,
                        &format!(
                            "Use at least {} characters. A lost master password cannot be recovered.",
                            MIN_MASTER_LEN
                        )
                    )
                );
                let password = prompt_secret("Master password")?;
                let confirmation = prompt_secret("Confirm master password")?;
                flow.submit_master(&password, &confirmation)
            }
            SetupState::AwaitingPhrase => {
                println!(
                    "{}",
                    hint(
                        ui,
                        &format!(
                            "The validation phrase ({}+ characters) is used to check your master password.",
                            MIN_PHRASE_LEN
                        )
                    )
                );
                let phrase = prompt_secret("Validation phrase")?;
                flow.submit_phrase(vault, &phrase)
            }
            SetupState::Bootstrapped => break,
        };
        if let Err(err) = outcome {
            report_recoverable(ui, err)?;
        }
    }

    blank_line(ui);
    println!(
        "{}",
        receipt(ui, "Password store created", &[("Next", "log in with your master password".to_string())])
    );
    Ok(())
}

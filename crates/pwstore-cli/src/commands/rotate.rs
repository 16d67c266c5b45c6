//! Change-master-password screen.

use pwstore_core::codec::decode_label;
use pwstore_core::flows::{RotationFlow, RotationState};
use pwstore_core::{RotationOptions, RotationReport, Session, Vault};

use crate::errors::CliError;
use crate::ui::prompt::{prompt_confirm, prompt_secret};
use crate::ui::{badge, blank_line, hint, receipt, Badge, UiContext};

pub fn run_rotation(ui: &UiContext, vault: &Vault, session: &mut Session) -> anyhow::Result<()> {
    println!(
        "{}",
        hint(ui, "Every entry is re-encrypted under the new master password.")
    );
    let mut flow = RotationFlow::new(RotationOptions {
        reseal_entries: true,
    });

    while !flow.is_finished() {
        let outcome = match flow.state() {
            RotationState::EnteringCurrent => {
                let current = prompt_secret("Current master password")?;
                flow.submit_current(&current).map(|_| ())
            }
            RotationState::EnteringNew => {
                let new = prompt_secret("New master password")?;
                flow.submit_new(&new).map(|_| ())
            }
            RotationState::Confirming => {
                let confirmation = prompt_secret("Confirm new master password")?;
                flow.confirm(vault, session, &confirmation)
                    .map(|report| print_report(ui, &report))
            }
            RotationState::Done | RotationState::Cancelled | RotationState::Critical => break,
        };

        let Err(err) = outcome else {
            continue;
        };
        if err.is_critical() {
            return Err(CliError::Critical(err.to_string()).into());
        }
        println!("{}", badge(ui, Badge::Err, &err.to_string()));
        if flow.state() == RotationState::EnteringCurrent
            && !prompt_confirm("Try again?", true)?
        {
            flow.cancel();
        }
    }

    if flow.state() == RotationState::Cancelled {
        println!("{}", badge(ui, Badge::Info, "Master password unchanged"));
    }
    Ok(())
}

fn print_report(ui: &UiContext, report: &RotationReport) {
    blank_line(ui);
    println!(
        "{}",
        receipt(
            ui,
            "Master password changed",
            &[("Re-encrypted", report.resealed.len().to_string())]
        )
    );
    if report.is_complete() {
        return;
    }

    let mut stranded: Vec<String> = report.skipped.iter().map(|k| decode_label(k)).collect();
    stranded.extend(report.failed.iter().map(|(k, _)| decode_label(k)));
    if !stranded.is_empty() {
        println!(
            "{}",
            badge(
                ui,
                Badge::Warn,
                &format!(
                    "{} entries still need an earlier password: {}",
                    stranded.len(),
                    stranded.join(", ")
                )
            )
        );
    }
    if report.left_under_old > 0 {
        println!(
            "{}",
            badge(
                ui,
                Badge::Warn,
                &format!(
                    "{} entries were left under the previous password",
                    report.left_under_old
                )
            )
        );
    }
    if let Some(err) = &report.listing_error {
        println!(
            "{}",
            badge(ui, Badge::Warn, &format!("Entries were not re-encrypted: {}", err))
        );
    }
}

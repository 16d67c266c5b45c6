//! Interactive prompt primitives.
//!
//! Every prompt requires stdin to be a terminal and fails with a clear
//! error otherwise. Secrets come back wrapped in [`Zeroizing`].

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm, FuzzySelect, Input, Password, Select};
use zeroize::Zeroizing;

fn require_tty() -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive input required. Run pwstore on a TTY."
        ));
    }
    Ok(())
}

/// Prompt for a line of text. Empty input is allowed.
pub fn prompt_input(prompt: &str) -> anyhow::Result<String> {
    require_tty()?;
    let theme = ColorfulTheme::default();
    let value = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Prompt for a hidden secret. Empty input is allowed so the caller can
/// report it as a validation error.
pub fn prompt_secret(prompt: &str) -> anyhow::Result<Zeroizing<String>> {
    require_tty()?;
    let theme = ColorfulTheme::default();
    let value = Password::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(Zeroizing::new(value))
}

/// Prompt for one item from a list. Returns `None` on Esc.
pub fn prompt_select<T: ToString>(prompt: &str, items: &[T]) -> anyhow::Result<Option<usize>> {
    require_tty()?;
    let theme = ColorfulTheme::default();
    let choice = Select::with_theme(&theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(choice)
}

/// Like [`prompt_select`], with type-to-filter.
pub fn prompt_fuzzy_select<T: ToString>(
    prompt: &str,
    items: &[T],
) -> anyhow::Result<Option<usize>> {
    require_tty()?;
    let theme = ColorfulTheme::default();
    let choice = FuzzySelect::with_theme(&theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(choice)
}

/// Prompt for yes/no.
pub fn prompt_confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    require_tty()?;
    let theme = ColorfulTheme::default();
    let confirmed = Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

//! Password generation, standalone and from the main menu.

use pwstore_core::{evaluate_strength, generate_password, PasswordOptions};

use crate::app::AppContext;
use crate::cli::GenerateArgs;
use crate::errors::CliError;
use crate::ui::prompt::{prompt_confirm, prompt_input};
use crate::ui::render::strength;
use crate::ui::theme::{styled, styles};
use crate::ui::{kv, UiContext};

/// Apply command-line overrides to the configured defaults.
pub fn apply_args(mut options: PasswordOptions, args: &GenerateArgs) -> PasswordOptions {
    if let Some(length) = args.length {
        options.length = length;
    }
    options.uppercase &= !args.no_upper;
    options.lowercase &= !args.no_lower;
    options.digits &= !args.no_digits;
    options.symbols &= !args.no_symbols;
    if args.allow_ambiguous {
        options.exclude_ambiguous = false;
    }
    options
}

pub fn handle_generate(ctx: &AppContext, args: &GenerateArgs) -> anyhow::Result<()> {
    let ui = ctx.ui();
    let options = apply_args(ctx.password_options()?, args);
    let password = generate_password(&options).map_err(|e| CliError::invalid_input(e.to_string()))?;
    print_generated(&ui, &password);
    Ok(())
}

fn print_generated(ui: &UiContext, password: &str) {
    println!("{}", styled(password, styles::bold(), ui.color));
    println!("{}", kv(ui, "Strength", &strength(ui, &evaluate_strength(password))));
}

/// Prompt for generator options, starting from `defaults`.
pub fn prompt_options(defaults: &PasswordOptions) -> anyhow::Result<PasswordOptions> {
    let length = loop {
        let raw = prompt_input(&format!("Length [{}]", defaults.length))?;
        if raw.trim().is_empty() {
            break defaults.length;
        }
        match raw.trim().parse::<usize>() {
            Ok(length) => break length,
            Err(_) => eprintln!("Enter a number between 8 and 64."),
        }
    };
    Ok(PasswordOptions {
        length,
        uppercase: prompt_confirm("Uppercase letters?", defaults.uppercase)?,
        lowercase: prompt_confirm("Lowercase letters?", defaults.lowercase)?,
        digits: prompt_confirm("Digits?", defaults.digits)?,
        symbols: prompt_confirm("Symbols?", defaults.symbols)?,
        exclude_ambiguous: prompt_confirm(
            "Exclude look-alike characters (0 O 1 l I)?",
            defaults.exclude_ambiguous,
        )?,
    })
}

/// Menu screen: choose options, show a password, offer another.
pub fn run_generator(ctx: &AppContext, ui: &UiContext) -> anyhow::Result<()> {
    let mut options = ctx.password_options()?;
    loop {
        options = prompt_options(&options)?;
        match generate_password(&options) {
            Ok(password) => print_generated(ui, &password),
            Err(err) => println!("{}", crate::ui::badge(ui, crate::ui::Badge::Err, &err.to_string())),
        }
        if !prompt_confirm("Generate another?", false)? {
            return Ok(());
        }
    }
}

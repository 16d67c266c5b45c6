use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pwstore_core::VERSION;

/// pwstore - a local, offline password store
#[derive(Parser)]
#[command(name = "pwstore")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the password store directory
    #[arg(short, long, global = true, env = "PWSTORE_STORE", value_name = "PATH")]
    pub store: Option<String>,

    /// Path to the config file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for the `generate` command
#[derive(Args)]
pub struct GenerateArgs {
    /// Password length (8-64)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Allow look-alike characters (0 O 1 l I)
    #[arg(long)]
    pub allow_ambiguous: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a random password (no store access)
    Generate(GenerateArgs),

    /// Score a password read from a prompt or stdin
    Strength,

    /// Show the store location and whether it is initialized
    Status,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "pwstore",
            "-vv",
            "generate",
            "--length",
            "24",
            "--no-symbols",
            "--allow-ambiguous",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.length, Some(24));
                assert!(args.no_symbols);
                assert!(args.allow_ambiguous);
                assert!(!args.no_upper);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["pwstore", "--store", "/tmp/s", "--no-color"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.store.as_deref(), Some("/tmp/s"));
        assert!(cli.no_color);
    }
}

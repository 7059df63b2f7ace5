//! Command-line argument definitions for the demo binary

use crate::config::{ColorOption, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// cmdrouter demo: dispatches the trailing arguments to the registered routes
///
/// Options must come before the sub-command; everything from the first
/// unrecognized token on is handed to the router untouched, including
/// `-h`/`--help`.
#[derive(Parser, Debug, Clone)]
#[command(name = "cmdrouter", disable_help_flag = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to use terminal colors
    #[arg(long, value_enum)]
    pub color: Option<ColorOption>,

    /// Path to a cmdrouter.toml (defaults to ./cmdrouter.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sub-command and its flags
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_then_subcommand() {
        let cli = Cli::try_parse_from(["cmdrouter", "--format", "json", "users", "--limit=2"])
            .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.args, vec!["users", "--limit=2"]);
    }

    #[test]
    fn test_help_flag_reaches_router() {
        let cli = Cli::try_parse_from(["cmdrouter", "-h"]).unwrap();
        assert_eq!(cli.args, vec!["-h"]);

        let cli = Cli::try_parse_from(["cmdrouter", "users", "--help"]).unwrap();
        assert_eq!(cli.args, vec!["users", "--help"]);
    }

    #[test]
    fn test_options_after_subcommand_are_forwarded() {
        let cli = Cli::try_parse_from(["cmdrouter", "hello", "--color", "never"]).unwrap();
        assert_eq!(cli.color, None);
        assert_eq!(cli.args, vec!["hello", "--color", "never"]);
    }

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["cmdrouter"]).unwrap();
        assert!(cli.args.is_empty());
        assert!(cli.config.is_none());
    }
}

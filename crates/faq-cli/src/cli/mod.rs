use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `faq` binary.
#[derive(Debug, Parser)]
#[command(name = "faq", version, about = "Browse and search the marketplace FAQ")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use faq_core::Audience;

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::JourneyCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["faq", "--format", "table", "--limit", "10", "stats"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["faq", "popular", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Popular));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["faq", "--format", "xml", "stats"]).is_err());
    }

    #[test]
    fn audience_accepts_french_names() {
        let cli = Cli::try_parse_from(["faq", "priority", "prestataire"]).expect("cli should parse");
        match cli.command {
            Commands::Priority(args) => assert_eq!(args.audience, Audience::Provider),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn audience_rejects_unknown_name() {
        assert!(Cli::try_parse_from(["faq", "priority", "admin"]).is_err());
    }

    #[test]
    fn journey_get_parses_id() {
        let cli = Cli::try_parse_from(["faq", "journey", "provider", "get", "presta-inscription-1"])
            .expect("cli should parse");
        match cli.command {
            Commands::Journey(args) => {
                assert_eq!(args.audience, Audience::Provider);
                assert!(
                    matches!(args.action, JourneyCommands::Get { ref id } if id == "presta-inscription-1")
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn filter_criteria_are_optional() {
        let cli = Cli::try_parse_from(["faq", "filter", "--category", "paiement"])
            .expect("cli should parse");
        match cli.command {
            Commands::Filter(args) => {
                assert!(args.audience.is_none());
                assert_eq!(args.category.as_deref(), Some("paiement"));
                assert!(args.search.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

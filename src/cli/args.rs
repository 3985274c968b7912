use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::WeekStart;

#[derive(Parser)]
#[command(name = "quickadd")]
#[command(about = "Parse quick-add task text into dates, priority, tags and recurrence")]
#[command(long_about = "quickadd - natural language quick-add parsing

Turns one line of task text into structured fields. Recognized tokens are
removed from the title.

QUICK START:
  quickadd parse \"Call mom tomorrow #family !!\"
  quickadd parse \"Team sync every week #work\" -o json
  quickadd parse \"Review friday\" --now 2024-03-01

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Use this config file instead of ~/.quickadd/config.yaml
    #[arg(long, global = true, env = "QUICKADD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse task text and show the extracted fields
    ///
    /// Recognizes:
    ///   - Dates: today, tomorrow, day after tomorrow, next week, next month,
    ///     this weekend, weekday names, jan 15, 2024-12-15, 12/15, 5pm
    ///   - Priority: ! !! !!!, !low !med !high, #p1 #p2 #p3, #high #medium #low
    ///   - Tags: #tag1 #tag2
    ///   - Repeat: every day/week/month/year, daily, weekly, monthly, yearly, annually
    ///   - Someday: someday, maybe later
    ///
    /// # Examples
    ///
    ///   quickadd parse "Buy milk !!!"
    ///   quickadd parse Call mom tomorrow
    ///   quickadd parse "Pay rent monthly next month" --now 2024-03-01T09:00
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Show configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Example
    ///
    ///   source <(quickadd completions bash)
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// The task text (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Reference moment (YYYY-MM-DD, YYYY-MM-DDTHH:MM or YYYY-MM-DD HH:MM)
    ///
    /// Defaults to the current local time.
    #[arg(long)]
    pub now: Option<String>,

    /// First day of the week, overriding `parser.week_start`
    #[arg(long, value_enum)]
    pub week_start: Option<WeekStart>,

    /// Only recognize keyword phrases and weekday names
    #[arg(long)]
    pub no_fallback: bool,
}

impl ParseArgs {
    /// The text as one line.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,
    /// Print the config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_output_unset() {
        let cli = Cli::try_parse_from(["quickadd", "parse", "buy milk"]).unwrap();
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["quickadd", "--output", "json", "parse", "x"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_short_after_subcommand() {
        let cli = Cli::try_parse_from(["quickadd", "parse", "x", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_parse_command() {
        let cli = Cli::try_parse_from([
            "quickadd",
            "parse",
            "Call",
            "mom",
            "tomorrow",
            "--now",
            "2024-03-01",
            "--week-start",
            "monday",
            "--no-fallback",
        ])
        .unwrap();
        if let Commands::Parse(args) = cli.command {
            assert_eq!(args.joined_text(), "Call mom tomorrow");
            assert_eq!(args.now.as_deref(), Some("2024-03-01"));
            assert_eq!(args.week_start, Some(WeekStart::Monday));
            assert!(args.no_fallback);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_alias() {
        let cli = Cli::try_parse_from(["quickadd", "p", "x"]).unwrap();
        assert!(matches!(cli.command, Commands::Parse(_)));
    }

    #[test]
    fn test_cli_parse_requires_text() {
        assert!(Cli::try_parse_from(["quickadd", "parse"]).is_err());
    }

    #[test]
    fn test_cli_config_commands() {
        let cli = Cli::try_parse_from(["quickadd", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigArgs {
                command: ConfigCommands::Show
            })
        ));
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["quickadd", "completions", "zsh"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Zsh }));
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}

//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch a user list once and page through it
#[derive(Parser, Debug)]
#[command(name = "user-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Endpoint to fetch users from (overrides the config file)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Records per page (overrides the config file)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page
    Show {
        /// Page to show (not range-checked)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Switch pages interactively; enter a page number, or `q` to quit
    Browse,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain-text listing
    Text,
    /// HTML markup
    Html,
    /// Render tree as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["user-pager", "show", "--page", "3"]);
        assert!(matches!(cli.command, Commands::Show { page: 3 }));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_global_overrides() {
        let cli = Cli::parse_from([
            "user-pager",
            "browse",
            "--endpoint",
            "http://localhost:9000/users",
            "--page-size",
            "5",
            "--format",
            "json",
            "-v",
        ]);
        assert!(matches!(cli.command, Commands::Browse));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000/users"));
        assert_eq!(cli.page_size, Some(5));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_show_defaults_to_first_page() {
        let cli = Cli::parse_from(["user-pager", "show"]);
        assert!(matches!(cli.command, Commands::Show { page: 1 }));
    }
}

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "showcase", version, about = "Dashboard of your deployed Vercel projects")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "SHOWCASE_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Vercel API base URL (overrides config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Vercel API token (overrides environment and config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Vercel team ID (overrides environment and config file)
    #[arg(long, global = true)]
    pub team_id: Option<String>,

    /// Increase logging verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

/// What to show when the API cannot be reached
#[derive(ValueEnum, Clone, Debug, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Report the error
    #[default]
    None,
    /// Show placeholder projects instead (demo mode)
    Sample,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the order returned by the API
    Api,
    /// Most recently updated first
    Updated,
    /// Alphabetical by name
    Name,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project operations
    #[command(visible_alias = "p")]
    Projects {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Open a project's live URL in your browser
    Open {
        /// Project name or ID
        project: String,
        /// Print the URL instead of launching a browser
        #[arg(long)]
        print: bool,
    },
    /// Configuration
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "showcase", &mut std::io::stdout());
    }
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List all deployed projects
    #[command(visible_alias = "ls")]
    List {
        /// Sort order
        #[arg(long, short = 's', value_enum, default_value_t = SortOrder::Api)]
        sort: SortOrder,
        /// What to show when the API cannot be reached (overrides config)
        #[arg(long, value_enum)]
        fallback: Option<Fallback>,
    },
    /// Get a project by name or ID
    #[command(visible_alias = "g")]
    Get {
        /// Project name or ID
        project: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (token redacted)
    Show,
    /// Show the config file paths that are searched
    Path,
    /// Test the connection to the Vercel API
    Test,
}

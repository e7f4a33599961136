mod cli;
mod color;
mod commands;
mod config;
mod output;
mod sample;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use output::output_error;
use showcase_core::ProcessEnv;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    color::init(cli.color);
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("error"),
        1 => EnvFilter::new("warn"),
        2 => EnvFilter::new("info"),
        3 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // Completions need neither config nor credentials
    if let Commands::Completions { shell } = &cli.command {
        Cli::generate_completions(*shell);
        return Ok(());
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.api_url.clone(), cli.token.clone(), cli.team_id.clone());
    let credentials = config.credentials(&ProcessEnv);
    tracing::debug!(
        api_url = config.api_url(),
        token = %credentials.redacted_token(),
        team_id_present = credentials.team_id().is_some(),
        "Resolved configuration"
    );

    match &cli.command {
        Commands::Projects { action } => {
            commands::projects::handle_projects(&config, credentials, action, cli.format)
        }
        Commands::Open { project, print } => {
            let client = commands::connect(&config, credentials)?;
            commands::open::handle_open(&client, project, *print, cli.format)
        }
        Commands::Config { action } => commands::config::handle_config(
            &config,
            credentials,
            action,
            cli.format,
            cli.config.as_deref(),
        ),
        // Handled before config loading
        Commands::Completions { .. } => Ok(()),
    }
}

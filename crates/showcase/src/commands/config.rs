use crate::cli::{ConfigCommands, OutputFormat};
use crate::config::{config_paths, Config};
use anyhow::{Context, Result};
use serde::Serialize;
use showcase_core::{Credentials, ProjectSource};
use std::path::Path;

/// What `config show` prints; the token is always redacted
#[derive(Serialize)]
struct ConfigSummary<'a> {
    api_url: &'a str,
    token: String,
    team_id: &'a str,
    fallback: crate::cli::Fallback,
}

pub fn handle_config(
    config: &Config,
    credentials: Credentials,
    action: &ConfigCommands,
    format: OutputFormat,
    explicit_path: Option<&Path>,
) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let summary = ConfigSummary {
                api_url: config.api_url(),
                token: credentials.redacted_token(),
                team_id: credentials.team_id().unwrap_or("(personal account)"),
                fallback: config.fallback(),
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Text => print!("{}", toml::to_string_pretty(&summary)?),
            }
            Ok(())
        }
        ConfigCommands::Path => {
            let paths = config_paths(explicit_path);
            match format {
                OutputFormat::Json => {
                    let entries: Vec<_> = paths
                        .iter()
                        .map(|p| serde_json::json!({ "path": p, "exists": p.exists() }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                OutputFormat::Text => {
                    for path in paths {
                        let marker = if path.exists() { " (found)" } else { "" };
                        println!("{}{}", path.display(), marker);
                    }
                }
            }
            Ok(())
        }
        ConfigCommands::Test => {
            let team = credentials.team_id().map(str::to_string);
            let client = super::connect(config, credentials)?;
            let projects = client
                .list_projects()
                .context("Failed to connect to the Vercel API")?;

            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "api_url": config.api_url(),
                        "team_id": team,
                        "projects": projects.len()
                    })
                ),
                OutputFormat::Text => {
                    let scope = team
                        .map(|t| format!("team {}", t))
                        .unwrap_or_else(|| "personal account".to_string());
                    println!(
                        "Connected to {} ({}): {} project(s)",
                        config.api_url(),
                        scope,
                        projects.len()
                    );
                }
            }
            Ok(())
        }
    }
}

use crate::cli::{Fallback, OutputFormat, ProjectCommands, SortOrder};
use crate::config::Config;
use crate::output::{output_projects, output_result};
use crate::sample::sample_projects;
use anyhow::{Context, Result};
use colored::Colorize;
use showcase_core::{Credentials, Project, ProjectSource};

pub fn handle_projects(
    config: &Config,
    credentials: Credentials,
    action: &ProjectCommands,
    format: OutputFormat,
) -> Result<()> {
    match action {
        ProjectCommands::List { sort, fallback } => handle_list(
            config,
            credentials,
            *sort,
            fallback.unwrap_or_else(|| config.fallback()),
            format,
        ),
        ProjectCommands::Get { project } => {
            let client = super::connect(config, credentials)?;
            handle_get(&client, project, format)
        }
    }
}

fn handle_list(
    config: &Config,
    credentials: Credentials,
    sort: SortOrder,
    fallback: Fallback,
    format: OutputFormat,
) -> Result<()> {
    let fetched = super::connect(config, credentials).and_then(|client| client.list_projects());

    let mut projects = match (fetched, fallback) {
        (Ok(projects), _) => projects,
        (Err(e), Fallback::Sample) => {
            tracing::warn!(error = %e, "Falling back to sample projects");
            eprintln!(
                "{}: {} (showing sample projects)",
                "Warning".yellow().bold(),
                e
            );
            sample_projects()
        }
        (Err(e), Fallback::None) => {
            return Err(anyhow::Error::new(e).context("Failed to list projects"));
        }
    };

    sort_projects(&mut projects, sort);
    output_projects(&projects, format);
    Ok(())
}

fn handle_get(client: &dyn ProjectSource, project: &str, format: OutputFormat) -> Result<()> {
    let project = client
        .find_project(project)
        .with_context(|| format!("Failed to fetch project '{}'", project))?;

    output_result(&project, format);
    Ok(())
}

/// Presentation-only ordering; the fetcher always returns API order.
pub fn sort_projects(projects: &mut [Project], sort: SortOrder) {
    match sort {
        SortOrder::Api => {}
        SortOrder::Updated => projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortOrder::Name => projects.sort_by_key(|p| p.name.to_lowercase()),
    }
}

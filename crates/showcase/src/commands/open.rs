use crate::cli::OutputFormat;
use anyhow::{anyhow, Context, Result};
use showcase_core::ProjectSource;

pub fn handle_open(
    client: &dyn ProjectSource,
    project: &str,
    print: bool,
    format: OutputFormat,
) -> Result<()> {
    let project = client
        .find_project(project)
        .with_context(|| format!("Failed to fetch project '{}'", project))?;

    let link = project
        .link
        .as_deref()
        .ok_or_else(|| anyhow!("Project '{}' is not deployed", project.name))?;

    if !print {
        open::that(link).with_context(|| format!("Failed to open {}", link))?;
    }

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "project": project.name, "url": link, "opened": !print })
            );
        }
        OutputFormat::Text if print => println!("{}", link),
        OutputFormat::Text => println!("Opened {}", link),
    }
    Ok(())
}

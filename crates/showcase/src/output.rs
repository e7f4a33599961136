use crate::cli::OutputFormat;
use colored::Colorize;
use serde::Serialize;
use showcase_core::{Project, ShowcaseError};

/// Framework label shown when the platform did not report one
pub const DEFAULT_FRAMEWORK: &str = "React";

pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", result.display());
        }
    }
}

pub fn output_list<T: Serialize + Displayable>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            for item in items {
                println!("{}", item.display());
                println!();
            }
        }
    }
}

/// Project cards, or the empty state when the account has none
pub fn output_projects(projects: &[Project], format: OutputFormat) {
    if projects.is_empty() && format == OutputFormat::Text {
        println!("{}", "No Projects Found".bold());
        println!(
            "{}",
            "Your Vercel account appears to have no projects or the API token is missing.".dimmed()
        );
        return;
    }
    output_list(projects, format);
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

fn find_showcase_error(err: &anyhow::Error) -> Option<&ShowcaseError> {
    err.chain().find_map(|e| e.downcast_ref::<ShowcaseError>())
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    match find_showcase_error(err) {
        Some(ShowcaseError::MissingCredentials) => "missing_credentials",
        Some(ShowcaseError::Upstream { .. }) => "upstream_error",
        Some(ShowcaseError::Transport(_)) => "transport_failure",
        Some(ShowcaseError::MalformedResponse(_)) => "malformed_response",
        Some(ShowcaseError::ProjectNotFound(_)) => "project_not_found",
        None => "error",
    }
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let source = find_showcase_error(err);
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
                status: source.and_then(ShowcaseError::status),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => match source {
            Some(e) if !matches!(e, ShowcaseError::ProjectNotFound(_)) => {
                let kind = if e.is_configuration_problem() {
                    "Configuration problem"
                } else {
                    "Connection problem"
                };
                format!(
                    "{}\n  {}: {:#}",
                    "API Connection Unavailable".red().bold(),
                    kind.dimmed(),
                    err
                )
            }
            _ => format!("{}: {:#}", "Error".red().bold(), err),
        },
    };
    eprintln!("{}", message);
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for Project {
    fn display(&self) -> String {
        let framework = self.framework.as_deref().unwrap_or(DEFAULT_FRAMEWORK);
        let host = self.host().unwrap_or_else(|| "No link".to_string());

        let mut output = format!(
            "{} ({})\n  {}: {}\n  {}: {}",
            self.name.white().bold(),
            self.id.dimmed(),
            "Framework".dimmed(),
            framework,
            "Host".dimmed(),
            host
        );

        if let Some(updated) = self.updated().filter(|_| self.updated_at > 0) {
            output.push_str(&format!(
                "\n  {}: {}",
                "Updated".dimmed(),
                updated.format("%Y-%m-%d %H:%M").to_string().dimmed()
            ));
        }

        match &self.link {
            Some(link) => output.push_str(&format!(
                "\n  {}: {}",
                "View Project".dimmed(),
                link.cyan().underline()
            )),
            None => output.push_str(&format!("\n  {}", "Not Deployed".yellow())),
        }

        output
    }
}

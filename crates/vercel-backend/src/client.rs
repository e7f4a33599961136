use showcase_core::{Credentials, Project};
use ureq::Agent;

use crate::error::{Result, VercelError};
use crate::models::*;

/// Public Vercel REST API endpoint
pub const DEFAULT_API_URL: &str = "https://api.vercel.com";

/// Vercel REST API client
pub struct VercelClient {
    agent: Agent,
    base_url: String,
    credentials: Credentials,
}

impl VercelClient {
    /// Create a new Vercel client.
    ///
    /// Fails with [`VercelError::MissingCredentials`] when the token is empty,
    /// so an unconfigured client can never reach the network.
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self> {
        if !credentials.is_configured() {
            return Err(VercelError::MissingCredentials);
        }

        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// `<base>/v9/projects`, team-scoped when a team id is configured
    pub fn projects_url(&self) -> String {
        let mut url = format!("{}/v9/projects", self.base_url);
        if let Some(team_id) = self.credentials.team_id() {
            url.push_str(&format!("?teamId={}", urlencoding::encode(team_id)));
        }
        url
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Vercel wraps failures as {"error": {"code": "...", "message": "..."}}
        let body = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);

        tracing::debug!(status, "Vercel API rejected request");
        Err(VercelError::Api { status, body })
    }

    /// Fetch the raw project listing. One request, no retry.
    pub fn list_raw_projects(&self) -> Result<ProjectsResponse> {
        let url = self.projects_url();
        tracing::debug!(
            token = %self.credentials.redacted_token(),
            team_scoped = self.credentials.team_id().is_some(),
            url = %url,
            "Fetching Vercel projects"
        );

        let response = self
            .agent
            .get(&url)
            .header(
                "Authorization",
                &format!("Bearer {}", self.credentials.token),
            )
            .header("Content-Type", "application/json")
            .call()?;

        let mut response = self.check_response(response)?;
        let body = response.body_mut().read_to_string()?;
        let parsed: ProjectsResponse = serde_json::from_str(&body)?;
        tracing::debug!(count = parsed.projects.len(), "Received Vercel projects");
        Ok(parsed)
    }

    /// Fetch and normalize projects, keeping upstream order.
    pub fn fetch_projects(&self) -> Result<Vec<Project>> {
        let response = self.list_raw_projects()?;
        Ok(response.projects.into_iter().map(Project::from).collect())
    }
}

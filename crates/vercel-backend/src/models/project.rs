use serde::{Deserialize, Serialize};

use super::{Deployment, Targets};

/// `link.type` value marking a canonical deployment alias
pub const DEPLOYMENT_ALIAS_LINK_TYPE: &str = "deployment-alias";

/// Response of `GET /v9/projects`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<VercelProject>,
    #[serde(default)]
    pub pagination: serde_json::Value,
}

/// Vercel project, only the fields we read
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VercelProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub link: Option<ProjectLink>,
    #[serde(default)]
    pub alias: Option<Vec<AliasEntry>>,
    #[serde(default)]
    pub targets: Option<Targets>,
    #[serde(default)]
    pub latest_deployments: Option<Vec<Deployment>>,
}

/// Canonical link descriptor
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectLink {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
}

impl ProjectLink {
    pub fn is_deployment_alias(&self) -> bool {
        self.kind.as_deref() == Some(DEPLOYMENT_ALIAS_LINK_TYPE)
    }
}

/// Alias entry: a bare domain, an object carrying one, or anything else
/// (`null`, numbers, objects with a non-string `domain`), which yields nothing
/// instead of failing the whole listing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AliasEntry {
    Domain(String),
    Object {
        #[serde(default)]
        domain: Option<String>,
    },
    Other(serde_json::Value),
}

impl AliasEntry {
    pub fn domain(&self) -> Option<&str> {
        match self {
            AliasEntry::Domain(domain) => Some(domain),
            AliasEntry::Object { domain } => domain.as_deref(),
            AliasEntry::Other(_) => None,
        }
    }
}

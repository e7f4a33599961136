pub mod client;
pub mod convert;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::{VercelClient, DEFAULT_API_URL};
pub use convert::{best_alias, resolve_link};
pub use error::{Result, VercelError};
pub use models::*;

pub use showcase_core::{Credentials, Project, ProjectSource, ShowcaseError, VarSource};

/// Resolve credentials from `source`, then fetch and normalize the project list.
///
/// Fails with `MissingCredentials` before any network traffic when no token is
/// configured.
pub fn fetch_projects(source: &dyn VarSource, base_url: &str) -> Result<Vec<Project>> {
    let credentials = Credentials::resolve(source);
    tracing::debug!(
        token_present = credentials.is_configured(),
        team_id_present = credentials.team_id().is_some(),
        "Resolved Vercel credentials"
    );
    VercelClient::new(base_url, credentials)?.fetch_projects()
}

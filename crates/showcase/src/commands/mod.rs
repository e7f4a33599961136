pub mod config;
pub mod open;
pub mod projects;

use crate::config::Config;
use showcase_core::Credentials;
use vercel_backend::VercelClient;

/// Build the API client, failing with `MissingCredentials` before any request
/// when no token is configured.
pub fn connect(config: &Config, credentials: Credentials) -> showcase_core::Result<VercelClient> {
    VercelClient::new(config.api_url(), credentials).map_err(Into::into)
}

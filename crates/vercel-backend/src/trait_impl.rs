use showcase_core::{Project, ProjectSource, Result};

use crate::client::VercelClient;

impl ProjectSource for VercelClient {
    fn list_projects(&self) -> Result<Vec<Project>> {
        self.fetch_projects().map_err(Into::into)
    }
}

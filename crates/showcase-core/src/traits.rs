use crate::error::{Result, ShowcaseError};
use crate::models::Project;

/// Common trait for anything that can list deployed projects.
pub trait ProjectSource: Send + Sync {
    /// List all projects in upstream order.
    fn list_projects(&self) -> Result<Vec<Project>>;

    /// Find a single project by ID or case-insensitive name.
    fn find_project(&self, name_or_id: &str) -> Result<Project> {
        self.list_projects()?
            .into_iter()
            .find(|p| p.matches(name_or_id))
            .ok_or_else(|| ShowcaseError::ProjectNotFound(name_or_id.to_string()))
    }
}

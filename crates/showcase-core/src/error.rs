use thiserror::Error;

/// Common errors for all project sources
#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error(
        "Vercel API token not configured. Set VERCEL_API_TOKEN (or one of its \
         REACT_APP_/NEXT_PUBLIC_/VITE_ variants), pass --token, or add it to the config file"
    )]
    MissingCredentials,

    #[error("Upstream API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

impl ShowcaseError {
    /// True when the failure is fixed by editing configuration rather than
    /// by waiting for connectivity to come back.
    pub fn is_configuration_problem(&self) -> bool {
        matches!(self, ShowcaseError::MissingCredentials)
    }

    /// HTTP status carried by an upstream rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ShowcaseError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;

use showcase_core::ShowcaseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VercelError {
    #[error("Vercel API token not configured")]
    MissingCredentials,

    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Vercel API error ({status}): {body}")]
    Api { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, VercelError>;

impl From<VercelError> for ShowcaseError {
    fn from(err: VercelError) -> Self {
        match err {
            VercelError::MissingCredentials => ShowcaseError::MissingCredentials,
            VercelError::Http(e) => ShowcaseError::Transport(e.to_string()),
            VercelError::Parse(e) => ShowcaseError::MalformedResponse(e.to_string()),
            VercelError::Api { status, body } => ShowcaseError::Upstream { status, body },
        }
    }
}

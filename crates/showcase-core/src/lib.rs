pub mod credentials;
pub mod error;
pub mod models;
pub mod traits;

pub use credentials::{
    resolve, Credentials, ProcessEnv, VarSource, TEAM_ID_CANDIDATES, TOKEN_CANDIDATES,
};
pub use error::{Result, ShowcaseError};
pub use models::*;
pub use traits::ProjectSource;

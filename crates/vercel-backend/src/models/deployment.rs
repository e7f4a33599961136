use serde::{Deserialize, Serialize};

use super::AliasEntry;

/// Project targets keyed by environment
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Targets {
    #[serde(default)]
    pub production: Option<ProductionTarget>,
}

/// The currently-live deployment of a project
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductionTarget {
    #[serde(default)]
    pub alias: Option<Vec<AliasEntry>>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Entry of `latestDeployments`, newest first
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Deployment {
    #[serde(default)]
    pub alias: Option<Vec<AliasEntry>>,
}

use crate::cli::Fallback;
use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use showcase_core::{Credentials, VarSource};
use std::path::{Path, PathBuf};
use vercel_backend::DEFAULT_API_URL;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// Vercel API base URL
    pub api_url: Option<String>,
    /// What `projects list` shows when the API cannot be reached
    pub fallback: Option<Fallback>,
    /// Vercel credentials from the config file
    #[serde(default)]
    pub vercel: VercelConfig,
    /// Command-line overrides, never read from or written to files
    #[serde(skip)]
    overrides: VercelConfig,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct VercelConfig {
    pub token: Option<String>,
    pub team_id: Option<String>,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading config file");
                figment = figment.merge(Toml::file(path));
            }
        }

        // SHOWCASE_API_URL -> api_url, SHOWCASE_FALLBACK -> fallback
        figment = figment.merge(Env::prefixed("SHOWCASE_").only(&["api_url", "fallback"]));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(
        &mut self,
        cli_api_url: Option<String>,
        cli_token: Option<String>,
        cli_team_id: Option<String>,
    ) {
        if let Some(url) = cli_api_url {
            self.api_url = Some(url);
        }
        self.overrides.token = cli_token;
        self.overrides.team_id = cli_team_id;
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback.unwrap_or_default()
    }

    /// Resolve credentials: command-line flags first, then the well-known
    /// environment variable names, then the config file. Token and team id
    /// are resolved independently.
    pub fn credentials(&self, source: &dyn VarSource) -> Credentials {
        let from_env = Credentials::resolve(source);
        Credentials::new(
            first_non_empty([
                self.overrides.token.as_deref(),
                Some(from_env.token.as_str()),
                self.vercel.token.as_deref(),
            ]),
            first_non_empty([
                self.overrides.team_id.as_deref(),
                Some(from_env.team_id.as_str()),
                self.vercel.team_id.as_deref(),
            ]),
        )
    }
}

fn first_non_empty<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> String {
    values
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Config files in merge order (later files override earlier ones)
pub fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "showcase").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("showcase").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("showcase")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("showcase.toml"))
}

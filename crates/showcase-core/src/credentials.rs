//! Credential lookup across the naming conventions different build tools use
//! when injecting environment variables.

use std::collections::HashMap;

/// Token variable names, highest priority first.
pub const TOKEN_CANDIDATES: &[&str] = &[
    "REACT_APP_VERCEL_API_TOKEN",
    "NEXT_PUBLIC_VERCEL_API_TOKEN",
    "VITE_VERCEL_API_TOKEN",
    "VERCEL_API_TOKEN",
];

/// Team id variable names, highest priority first.
pub const TEAM_ID_CANDIDATES: &[&str] = &[
    "REACT_APP_TEAM_ID",
    "NEXT_PUBLIC_TEAM_ID",
    "VITE_TEAM_ID",
    "TEAM_ID",
];

/// A key/value configuration source.
pub trait VarSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl VarSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Return the first candidate whose value is present and non-empty after
/// trimming. An empty string means "not configured" and is not an error.
pub fn resolve(candidates: &[&str], source: &dyn VarSource) -> String {
    candidates
        .iter()
        .filter_map(|name| source.var(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// API credentials for one fetch. An empty `team_id` means personal-account mode.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub team_id: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            team_id: team_id.into(),
        }
    }

    /// Resolve the token and team id independently from `source`.
    pub fn resolve(source: &dyn VarSource) -> Self {
        Self {
            token: resolve(TOKEN_CANDIDATES, source),
            team_id: resolve(TEAM_ID_CANDIDATES, source),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn team_id(&self) -> Option<&str> {
        Some(self.team_id.as_str()).filter(|id| !id.is_empty())
    }

    /// Token rendering safe for logs and `config show`.
    pub fn redacted_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        match chars.len() {
            0 => "(not set)".to_string(),
            n if n <= 8 => "****".to_string(),
            n => format!("****{}", chars[n - 4..].iter().collect::<String>()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.redacted_token())
            .field("team_id", &self.team_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn earliest_candidate_wins() {
        let env = source(&[
            ("VERCEL_API_TOKEN", "plain"),
            ("NEXT_PUBLIC_VERCEL_API_TOKEN", "next"),
            ("VITE_VERCEL_API_TOKEN", "vite"),
        ]);
        assert_eq!(resolve(TOKEN_CANDIDATES, &env), "next");
    }

    #[test]
    fn order_of_candidate_list_decides() {
        let env = source(&[("A", "first"), ("B", "second")]);
        assert_eq!(resolve(&["A", "B"], &env), "first");
        assert_eq!(resolve(&["B", "A"], &env), "second");
    }

    #[test]
    fn blank_values_are_skipped() {
        let env = source(&[("REACT_APP_VERCEL_API_TOKEN", "   "), ("VERCEL_API_TOKEN", " tok ")]);
        assert_eq!(resolve(TOKEN_CANDIDATES, &env), "tok");
    }

    #[test]
    fn nothing_configured_resolves_to_empty() {
        let env = source(&[("UNRELATED", "x")]);
        assert_eq!(resolve(TOKEN_CANDIDATES, &env), "");
        assert_eq!(resolve(&[], &env), "");
    }

    #[test]
    fn token_and_team_resolve_independently() {
        let env = source(&[("VITE_VERCEL_API_TOKEN", "tok")]);
        let creds = Credentials::resolve(&env);
        assert_eq!(creds.token, "tok");
        assert_eq!(creds.team_id, "");
        assert!(creds.is_configured());
        assert_eq!(creds.team_id(), None);

        let env = source(&[("TEAM_ID", "team_1"), ("REACT_APP_TEAM_ID", "team_0")]);
        let creds = Credentials::resolve(&env);
        assert!(!creds.is_configured());
        assert_eq!(creds.team_id(), Some("team_0"));
    }

    #[test]
    fn redaction_never_reveals_short_tokens() {
        assert_eq!(Credentials::new("", "").redacted_token(), "(not set)");
        assert_eq!(Credentials::new("abc", "").redacted_token(), "****");
        assert_eq!(
            Credentials::new("abcdefghijkl", "").redacted_token(),
            "****ijkl"
        );
        let debug = format!("{:?}", Credentials::new("abcdefghijkl", "t"));
        assert!(!debug.contains("abcdefgh"));
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A deployed project, normalized from whatever the upstream platform returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable upstream ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Framework preset, when the platform knows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    /// Public `https://` URL, absent when nothing could be resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Last update, milliseconds since the Unix epoch
    pub updated_at: i64,
}

impl Project {
    /// Hostname of the resolved link.
    pub fn host(&self) -> Option<String> {
        let link = self.link.as_deref()?;
        url::Url::parse(link)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.updated_at)
    }

    /// Matches on exact id or case-insensitive name.
    pub fn matches(&self, name_or_id: &str) -> bool {
        self.id == name_or_id || self.name.eq_ignore_ascii_case(name_or_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(link: Option<&str>) -> Project {
        Project {
            id: "prj_1".to_string(),
            name: "Portfolio".to_string(),
            framework: Some("nextjs".to_string()),
            link: link.map(str::to_string),
            updated_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn host_strips_scheme_and_path() {
        let p = project(Some("https://portfolio.dev/about"));
        assert_eq!(p.host().as_deref(), Some("portfolio.dev"));
        assert_eq!(project(None).host(), None);
    }

    #[test]
    fn serializes_with_camel_case_and_skips_absent_link() {
        let json = serde_json::to_value(project(None)).unwrap();
        assert_eq!(json["updatedAt"], 1_700_000_000_000i64);
        assert!(json.get("link").is_none());
        assert_eq!(json["framework"], "nextjs");
    }

    #[test]
    fn updated_converts_millis() {
        let updated = project(None).updated().unwrap();
        assert_eq!(updated.timestamp(), 1_700_000_000);
    }

    #[test]
    fn matches_by_id_or_name() {
        let p = project(None);
        assert!(p.matches("prj_1"));
        assert!(p.matches("portfolio"));
        assert!(!p.matches("PRJ_1"));
        assert!(!p.matches("other"));
    }
}

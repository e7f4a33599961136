//! Model conversions from Vercel types to showcase-core types

use showcase_core::Project;

use crate::models::*;

/// Suffix of the subdomains Vercel generates for every deployment.
pub const GENERATED_DOMAIN_SUFFIX: &str = ".vercel.app";

impl From<VercelProject> for Project {
    fn from(p: VercelProject) -> Self {
        let link = resolve_link(&p);
        Self {
            id: p.id,
            name: p.name,
            framework: p.framework.filter(|f| !f.trim().is_empty()),
            link,
            updated_at: p.updated_at.unwrap_or_default(),
        }
    }
}

/// Pick the public URL of a project. Sources are tried in priority order and
/// the first one yielding a domain wins:
///
/// 1. `link` when it is a deployment alias
/// 2. project-level `alias` list
/// 3. `targets.production.alias`
/// 4. first entry of `latestDeployments`
/// 5. `targets.production.url`
pub fn resolve_link(p: &VercelProject) -> Option<String> {
    let production = p.targets.as_ref().and_then(|t| t.production.as_ref());

    canonical_alias(p)
        .or_else(|| p.alias.as_deref().and_then(best_alias_entry))
        .or_else(|| {
            production
                .and_then(|t| t.alias.as_deref())
                .and_then(best_alias_entry)
        })
        .or_else(|| {
            p.latest_deployments
                .as_deref()
                .and_then(|deployments| deployments.first())
                .and_then(|d| d.alias.as_deref())
                .and_then(best_alias_entry)
        })
        .or_else(|| production.and_then(|t| t.url.as_deref()).and_then(normalize_domain))
        .map(|domain| https_link(&domain))
}

fn best_alias_entry(entries: &[AliasEntry]) -> Option<String> {
    best_alias(entries.iter().filter_map(AliasEntry::domain))
}

fn https_link(domain: &str) -> String {
    format!("https://{}", domain)
}

fn canonical_alias(p: &VercelProject) -> Option<String> {
    p.link
        .as_ref()
        .filter(|link| link.is_deployment_alias())
        .and_then(|link| link.alias.as_deref())
        .and_then(normalize_domain)
}

/// Choose the cleanest domain: custom domains beat generated ones, then the
/// shortest wins, ties going to the earlier entry. Returns the bare domain.
pub fn best_alias<I, S>(domains: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (generated, custom): (Vec<String>, Vec<String>) = domains
        .into_iter()
        .filter_map(|d| normalize_domain(d.as_ref()))
        .partition(|d| is_generated_domain(d));

    let preferred = if custom.is_empty() { generated } else { custom };
    preferred.into_iter().min_by_key(|d| d.chars().count())
}

pub fn is_generated_domain(domain: &str) -> bool {
    domain.to_ascii_lowercase().contains(GENERATED_DOMAIN_SUFFIX)
}

/// Trim and drop any scheme or trailing slash so the caller can apply exactly
/// one `https://` prefix. Values that would not form a valid absolute URL
/// with a host are rejected.
fn normalize_domain(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let domain = without_scheme.trim_end_matches('/');
    if domain.is_empty() {
        return None;
    }

    match url::Url::parse(&https_link(domain)) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => {
            Some(domain.to_string())
        }
        _ => {
            tracing::debug!(domain, "Ignoring alias that is not a valid URL host");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(extra: serde_json::Value) -> VercelProject {
        let mut base = json!({
            "id": "prj_1",
            "name": "portfolio",
            "framework": "vite",
            "updatedAt": 1_700_000_000_000i64
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn production_url_alone_is_used_verbatim() {
        let p = project(json!({ "targets": { "production": { "url": "portfolio-abc123.vercel.app" } } }));
        assert_eq!(
            resolve_link(&p).as_deref(),
            Some("https://portfolio-abc123.vercel.app")
        );
    }

    #[test]
    fn custom_domain_beats_generated_domain() {
        assert_eq!(
            best_alias(["foo-xyz123.vercel.app", "foo.com"]).as_deref(),
            Some("foo.com")
        );
    }

    #[test]
    fn shorter_custom_domain_wins() {
        assert_eq!(best_alias(["foo.com", "f.io"]).as_deref(), Some("f.io"));
    }

    #[test]
    fn ties_keep_original_order() {
        assert_eq!(best_alias(["abc.io", "xyz.io"]).as_deref(), Some("abc.io"));
        assert_eq!(best_alias(["xyz.io", "abc.io"]).as_deref(), Some("xyz.io"));
    }

    #[test]
    fn generated_domains_used_when_no_custom_domain() {
        assert_eq!(
            best_alias(["portfolio-git-main-me.vercel.app", "portfolio.vercel.app"]).as_deref(),
            Some("portfolio.vercel.app")
        );
    }

    #[test]
    fn empty_lists_select_nothing() {
        assert_eq!(best_alias(Vec::<String>::new()), None);
        assert_eq!(best_alias(["", "   "]), None);
    }

    #[test]
    fn canonical_link_takes_precedence_over_aliases() {
        let p = project(json!({
            "link": { "type": "deployment-alias", "alias": "portfolio-long-name.vercel.app" },
            "alias": [{ "domain": "p.io" }],
            "targets": { "production": { "alias": ["x.io"], "url": "y.vercel.app" } }
        }));
        assert_eq!(
            resolve_link(&p).as_deref(),
            Some("https://portfolio-long-name.vercel.app")
        );
    }

    #[test]
    fn non_alias_link_is_ignored() {
        let p = project(json!({
            "link": { "type": "github", "alias": "ignored.dev" },
            "alias": ["site.dev"]
        }));
        assert_eq!(resolve_link(&p).as_deref(), Some("https://site.dev"));
    }

    #[test]
    fn project_aliases_accept_strings_and_objects() {
        let p = project(json!({
            "alias": [{ "domain": "portfolio.vercel.app" }, "me.dev", { "domain": "" }, { "domain": "portfolio.dev" }]
        }));
        assert_eq!(resolve_link(&p).as_deref(), Some("https://me.dev"));
    }

    #[test]
    fn falls_through_tiers_in_order() {
        let p = project(json!({
            "alias": [],
            "targets": { "production": { "alias": ["prod.dev"], "url": "prod-123.vercel.app" } },
            "latestDeployments": [{ "alias": ["latest.dev"] }]
        }));
        assert_eq!(resolve_link(&p).as_deref(), Some("https://prod.dev"));

        let p = project(json!({
            "targets": { "production": { "alias": [], "url": "prod-123.vercel.app" } },
            "latestDeployments": [{ "alias": ["latest-abc.vercel.app", "latest.dev"] }, { "alias": ["older.dev"] }]
        }));
        assert_eq!(resolve_link(&p).as_deref(), Some("https://latest.dev"));

        let p = project(json!({
            "targets": { "production": { "url": "prod-123.vercel.app" } },
            "latestDeployments": [{ "alias": [] }, { "alias": ["older.dev"] }]
        }));
        assert_eq!(resolve_link(&p).as_deref(), Some("https://prod-123.vercel.app"));
    }

    #[test]
    fn nothing_usable_leaves_link_absent() {
        let p = project(json!({
            "link": { "type": "deployment-alias", "alias": "  " },
            "alias": [{ "target": "PRODUCTION" }],
            "targets": { "production": { "alias": [], "url": "" } },
            "latestDeployments": []
        }));
        assert_eq!(resolve_link(&p), None);
        assert_eq!(Project::from(p).link, None);
    }

    #[test]
    fn existing_scheme_is_not_doubled() {
        let p = project(json!({ "targets": { "production": { "url": "https://site.dev/" } } }));
        assert_eq!(resolve_link(&p).as_deref(), Some("https://site.dev"));
    }

    #[test]
    fn conversion_is_deterministic() {
        let p = project(json!({
            "alias": ["b.dev", "a.dev", "site-1.vercel.app"],
            "latestDeployments": [{ "alias": ["l.dev"] }]
        }));
        let first = Project::from(p.clone());
        let second = Project::from(p);
        assert_eq!(first, second);
        assert_eq!(first.link.as_deref(), Some("https://b.dev"));
        assert_eq!(first.framework.as_deref(), Some("vite"));
        assert_eq!(first.updated_at, 1_700_000_000_000);
    }

    #[test]
    fn invalid_domains_fall_through_to_next_tier() {
        let p = project(json!({
            "link": { "type": "deployment-alias", "alias": "bad host.dev" },
            "alias": ["my site.dev"],
            "targets": { "production": { "alias": ["prod.dev"] } }
        }));
        assert_eq!(resolve_link(&p).as_deref(), Some("https://prod.dev"));

        let p = project(json!({ "targets": { "production": { "url": "my site.dev" } } }));
        assert_eq!(resolve_link(&p), None);
    }

    #[test]
    fn invalid_domain_does_not_win_shortest_choice() {
        assert_eq!(best_alias(["a b", "site.dev"]).as_deref(), Some("site.dev"));
    }

    #[test]
    fn null_alias_entries_are_skipped() {
        let p = project(json!({
            "alias": [null, "site.dev"],
            "latestDeployments": [{ "alias": [null, { "domain": "latest.dev" }] }]
        }));
        assert_eq!(resolve_link(&p).as_deref(), Some("https://site.dev"));

        let p = project(json!({
            "latestDeployments": [{ "alias": [null, { "domain": "latest.dev" }] }]
        }));
        assert_eq!(resolve_link(&p).as_deref(), Some("https://latest.dev"));
    }

    #[test]
    fn resolved_links_are_absolute_https_urls() {
        let p = project(json!({ "alias": ["portfolio.dev"] }));
        let link = Project::from(p).link.unwrap();
        let parsed = url::Url::parse(&link).unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.host_str(), Some("portfolio.dev"));
    }
}

//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! url = "https://example.github.io/my-project"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Base URL used when no `[site] url` is configured.
pub const DEFAULT_SITE_URL: &str = "https://kriswarrior.github.io/Cristhian-Guerrero-Zaldivar";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Public base URL, path used as prefix (e.g., "https://example.com/blog").
    pub url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.into(),
        }
    }
}

impl SiteSection {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Base URL without trailing slashes, ready to have a `/path` appended.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must parse, use `http`/`https`, and have a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(url: &str) -> usize {
        let section = SiteSection { url: url.into() };
        let mut diag = ConfigDiagnostics::new();
        section.validate(&mut diag);
        diag.len()
    }

    #[test]
    fn test_default_url_is_valid() {
        assert_eq!(errors_for(DEFAULT_SITE_URL), 0);
    }

    #[test]
    fn test_base_url_trims_trailing_slashes() {
        let section = SiteSection {
            url: "https://example.com/blog//".into(),
        };
        assert_eq!(section.base_url(), "https://example.com/blog");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert_eq!(errors_for("not a url"), 1);
        assert_eq!(errors_for("ftp://example.com"), 1);
        assert_eq!(errors_for("mailto:someone@example.com"), 2);
    }

    #[test]
    fn test_accepts_http_with_port() {
        assert_eq!(errors_for("http://localhost:8080/site"), 0);
    }
}

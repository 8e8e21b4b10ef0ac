//! Public-page predicate.
//!
//! Decides from a root-relative path alone whether a file belongs in the
//! sitemap. No filesystem access.
//!
//! ```text
//! index.html                 -> listed
//! about/index.html           -> listed
//! .git/index.html            -> Hidden
//! _drafts/post.html          -> Private
//! node_modules/x/index.html  -> ExcludedDir("node_modules")
//! blog/404.html              -> ExcludedFile
//! styles.css                 -> NotHtml
//! ```

use rustc_hash::FxHashSet;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::config::SitemapSection;
use crate::utils::path::url_segments;

/// Why a path was left out of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// Extension is not `.html`
    NotHtml,
    /// A segment starts with `.`
    Hidden,
    /// A segment starts with `_`
    Private,
    /// A directory segment is in the exclusion set
    ExcludedDir(String),
    /// The file name is in the exclusion set
    ExcludedFile,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotHtml => f.write_str("not html"),
            Self::Hidden => f.write_str("hidden"),
            Self::Private => f.write_str("private"),
            Self::ExcludedDir(dir) => write!(f, "inside excluded `{dir}`"),
            Self::ExcludedFile => f.write_str("excluded file"),
        }
    }
}

/// Exclusion rules for one run.
#[derive(Debug, Clone, Default)]
pub struct PageFilter {
    exclude_dirs: FxHashSet<String>,
    exclude_files: FxHashSet<String>,
}

impl PageFilter {
    pub fn new<D, F>(exclude_dirs: D, exclude_files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            exclude_dirs: exclude_dirs.into_iter().map(Into::into).collect(),
            exclude_files: exclude_files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(sitemap: &SitemapSection) -> Self {
        Self::new(
            sitemap.exclude_dirs.iter().cloned(),
            sitemap.exclude_files.iter().cloned(),
        )
    }

    /// The first rule that excludes `relative` (a path under the site
    /// root), or `None` for a public page.
    pub fn exclusion(&self, relative: &Path) -> Option<Exclusion> {
        if !is_html(relative) {
            return Some(Exclusion::NotHtml);
        }

        let segments = url_segments(relative);
        if segments.iter().any(|s| s.starts_with('.')) {
            return Some(Exclusion::Hidden);
        }
        if segments.iter().any(|s| s.starts_with('_')) {
            return Some(Exclusion::Private);
        }

        let (file_name, dirs) = segments.split_last()?;
        if let Some(dir) = dirs.iter().find(|d| self.exclude_dirs.contains(d.as_str())) {
            return Some(Exclusion::ExcludedDir(dir.clone()));
        }
        if self.exclude_files.contains(file_name.as_str()) {
            return Some(Exclusion::ExcludedFile);
        }
        None
    }

    /// Whether a directory with this name can contain public pages.
    ///
    /// Lets the walker prune subtrees every page of which `exclusion` would
    /// reject anyway.
    pub fn can_descend(&self, dir_name: &str) -> bool {
        !dir_name.starts_with(['.', '_']) && !self.exclude_dirs.contains(dir_name)
    }
}

/// `.html` extension, compared case-insensitively.
#[inline]
pub fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::sitemap::{DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES};

    fn filter() -> PageFilter {
        PageFilter::new(DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES)
    }

    fn exclusion(path: &str) -> Option<Exclusion> {
        filter().exclusion(Path::new(path))
    }

    fn is_public(filter: &PageFilter, relative: &Path) -> bool {
        filter.exclusion(relative).is_none()
    }

    #[test]
    fn test_public_pages() {
        let filter = filter();
        for path in [
            "index.html",
            "about/index.html",
            "blog/2024/post.html",
            "assets.html",
            "tools.html",
            "page.HTML",
        ] {
            assert!(is_public(&filter, Path::new(path)), "{path}");
        }
    }

    #[test]
    fn test_non_html_excluded() {
        assert_eq!(exclusion("styles.css"), Some(Exclusion::NotHtml));
        assert_eq!(exclusion("legacy.htm"), Some(Exclusion::NotHtml));
        assert_eq!(exclusion("README"), Some(Exclusion::NotHtml));
    }

    #[test]
    fn test_hidden_segments() {
        assert_eq!(exclusion(".hidden.html"), Some(Exclusion::Hidden));
        assert_eq!(exclusion(".git/index.html"), Some(Exclusion::Hidden));
        assert_eq!(exclusion("blog/.cache/page.html"), Some(Exclusion::Hidden));
    }

    #[test]
    fn test_underscore_segments() {
        assert_eq!(exclusion("_drafts/post.html"), Some(Exclusion::Private));
        assert_eq!(exclusion("blog/_partial.html"), Some(Exclusion::Private));
    }

    #[test]
    fn test_hidden_checked_before_private() {
        assert_eq!(exclusion("_drafts/.wip/post.html"), Some(Exclusion::Hidden));
    }

    #[test]
    fn test_excluded_directories_at_any_depth() {
        assert_eq!(
            exclusion("assets/demo.html"),
            Some(Exclusion::ExcludedDir("assets".into()))
        );
        assert_eq!(
            exclusion("docs/node_modules/pkg/index.html"),
            Some(Exclusion::ExcludedDir("node_modules".into()))
        );
        assert_eq!(
            exclusion("tools/report.html"),
            Some(Exclusion::ExcludedDir("tools".into()))
        );
    }

    #[test]
    fn test_excluded_file_names_anywhere() {
        assert_eq!(exclusion("404.html"), Some(Exclusion::ExcludedFile));
        assert_eq!(exclusion("blog/404.html"), Some(Exclusion::ExcludedFile));
    }

    #[test]
    fn test_custom_rules() {
        let filter = PageFilter::new(["drafts"], ["offline.html"]);
        assert!(!is_public(&filter, Path::new("drafts/post.html")));
        assert!(!is_public(&filter, Path::new("offline.html")));
        assert!(is_public(&filter, Path::new("assets/demo.html")));
        assert!(is_public(&filter, Path::new("404.html")));
    }

    #[test]
    fn test_can_descend() {
        let filter = filter();
        assert!(filter.can_descend("blog"));
        assert!(!filter.can_descend(".git"));
        assert!(!filter.can_descend("_site"));
        assert!(!filter.can_descend("node_modules"));
    }

    #[test]
    fn test_exclusion_display() {
        assert_eq!(
            Exclusion::ExcludedDir("assets".into()).to_string(),
            "inside excluded `assets`"
        );
        assert_eq!(Exclusion::Hidden.to_string(), "hidden");
    }
}

//! `[sitemap]` section configuration.
//!
//! ```toml
//! [sitemap]
//! path = "sitemap.xml"
//! exclude_dirs = ["assets", "node_modules", "tools"]
//! exclude_files = ["404.html"]
//! changefreq = "weekly"
//! minify = false
//!
//! [sitemap.priority]
//! root = 0.7
//! page = 0.5
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Directory names never descended into.
pub const DEFAULT_EXCLUDE_DIRS: [&str; 3] = ["assets", "node_modules", "tools"];
/// File names never listed.
pub const DEFAULT_EXCLUDE_FILES: [&str; 1] = ["404.html"];

/// `<changefreq>` values defined by the sitemap protocol.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// `<priority>` value, rendered with at least one decimal (`0.5`, `1.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub f32);

impl Priority {
    pub fn is_valid(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The two priority tiers: the site root and everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrioritySection {
    pub root: Priority,
    pub page: Priority,
}

impl Default for PrioritySection {
    fn default() -> Self {
        Self {
            root: Priority(0.7),
            page: Priority(0.5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSection {
    /// Output path, relative to the site root.
    pub path: PathBuf,
    /// Directory names whose contents are never listed.
    pub exclude_dirs: Vec<String>,
    /// File names never listed, wherever they live.
    pub exclude_files: Vec<String>,
    pub changefreq: ChangeFreq,
    /// Collapse whitespace between tags.
    pub minify: bool,
    pub priority: PrioritySection,
}

impl Default for SitemapSection {
    fn default() -> Self {
        Self {
            path: "sitemap.xml".into(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.map(String::from).to_vec(),
            exclude_files: DEFAULT_EXCLUDE_FILES.map(String::from).to_vec(),
            changefreq: ChangeFreq::default(),
            minify: false,
            priority: PrioritySection::default(),
        }
    }
}

impl SitemapSection {
    pub const PATH: FieldPath = FieldPath::new("sitemap.path");
    pub const EXCLUDE_DIRS: FieldPath = FieldPath::new("sitemap.exclude_dirs");
    pub const EXCLUDE_FILES: FieldPath = FieldPath::new("sitemap.exclude_files");
    pub const PRIORITY_ROOT: FieldPath = FieldPath::new("sitemap.priority.root");
    pub const PRIORITY_PAGE: FieldPath = FieldPath::new("sitemap.priority.page");

    /// Validate sitemap configuration.
    ///
    /// # Checks
    /// - `path` is relative and names a file
    /// - exclusion entries are bare names, not paths
    /// - priorities lie in `0.0..=1.0`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.is_absolute() {
            diag.error_with_hint(
                Self::PATH,
                format!("must be relative to the site root, got {}", self.path.display()),
                "e.g. \"sitemap.xml\"",
            );
        } else if self.path.file_name().is_none() {
            diag.error(Self::PATH, "must name a file");
        }

        Self::validate_names(Self::EXCLUDE_DIRS, &self.exclude_dirs, diag);
        Self::validate_names(Self::EXCLUDE_FILES, &self.exclude_files, diag);

        for (field, priority) in [
            (Self::PRIORITY_ROOT, self.priority.root),
            (Self::PRIORITY_PAGE, self.priority.page),
        ] {
            if !priority.is_valid() {
                diag.error_with_hint(
                    field,
                    format!("{} is out of range", priority.0),
                    "use a value between 0.0 and 1.0",
                );
            }
        }
    }

    fn validate_names(field: FieldPath, names: &[String], diag: &mut ConfigDiagnostics) {
        for name in names {
            if name.is_empty() || name.contains(['/', '\\']) {
                diag.error_with_hint(
                    field,
                    format!("'{name}' is not a bare file or directory name"),
                    "list names only, e.g. \"drafts\"",
                );
            }
        }
    }
}

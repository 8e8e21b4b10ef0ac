//! Site configuration management for `sitemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── sitemap    # [sitemap]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Precedence
//!
//! Compiled-in defaults, then `sitemap.toml` (optional), then CLI flags.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{ChangeFreq, Priority, SiteSection, SitemapSection};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug, log, utils::path::normalize_path};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Config file that was loaded, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Site root directory that gets scanned (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Public site settings
    #[serde(default)]
    pub site: SiteSection,

    /// Sitemap generation settings
    #[serde(default)]
    pub sitemap: SitemapSection,
}

impl SiteConfig {
    /// Default configuration scanning the given root.
    #[cfg(test)]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load configuration from CLI arguments.
    ///
    /// Without `--root`, searches upward from cwd for the config file; the
    /// site root is that file's directory. Without one, the root sits one
    /// level above the directory holding the executable (`<site>/tools/bin`).
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let exe = std::env::current_exe().ok();
        let (root, config_path) = Self::resolve_root(cli, &cwd, exe.as_deref());

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        config.root = root;
        config.config_path = config_path;
        config.apply_cli(cli);

        debug!("config"; "root: {}", config.root.display());
        if let Some(path) = &config.config_path {
            debug!("config"; "loaded {}", path.display());
        }

        config.validate()?;
        Ok(config)
    }

    /// Resolve the site root and the config file to read (if it exists).
    ///
    /// `--root`, then the nearest config file, then the executable's
    /// grandparent directory. cwd only when the executable path is unknown.
    fn resolve_root(cli: &Cli, cwd: &Path, exe: Option<&Path>) -> (PathBuf, Option<PathBuf>) {
        match &cli.root {
            Some(root) => {
                let root = normalize_path(&cwd.join(root));
                let candidate = root.join(&cli.config);
                let config_path = candidate.is_file().then_some(candidate);
                (root, config_path)
            }
            None => match find_config_file(cwd, &cli.config) {
                Some(path) => {
                    let root = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
                    (normalize_path(&root), Some(path))
                }
                None => {
                    let root = exe
                        .map(normalize_path)
                        .and_then(|exe| exe.parent()?.parent().map(Path::to_path_buf))
                        .unwrap_or_else(|| cwd.to_path_buf());
                    (normalize_path(&root), None)
                }
            },
        }
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Where the sitemap gets written.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.sitemap.path)
    }

    /// Get path relative to the site root
    pub fn root_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides on top of file/default values.
    fn apply_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.site.url, cli.site_url.as_ref());
        Self::update_option(&mut self.sitemap.path, cli.output.as_ref());
        Self::update_option(&mut self.sitemap.minify, cli.minify.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        diag.into_result()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

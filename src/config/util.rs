//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/site/blog/posts/  ← start
/// /home/user/site/sitemap.toml ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_start_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("sitemap.toml"), "").unwrap();

        let found = find_config_file(dir.path(), Path::new("sitemap.toml"));
        assert_eq!(found, Some(dir.path().join("sitemap.toml")));
    }

    #[test]
    fn test_find_config_walks_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("blog").join("posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("sitemap.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("sitemap.toml"));
        assert_eq!(found, Some(dir.path().join("sitemap.toml")));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("custom-sitemap.toml")).unwrap();

        assert_eq!(
            find_config_file(dir.path(), Path::new("custom-sitemap.toml")),
            None
        );
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("site.toml");
        fs::write(&config, "").unwrap();

        assert_eq!(find_config_file(Path::new("/"), &config), Some(config.clone()));
        assert_eq!(
            find_config_file(Path::new("/"), &dir.path().join("missing.toml")),
            None
        );
    }
}

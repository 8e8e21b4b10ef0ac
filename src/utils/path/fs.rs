//! Filesystem path normalization.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_absolute() {
        let normalized = normalize_path(Path::new("/absolute/missing/site"));
        assert_eq!(normalized, PathBuf::from("/absolute/missing/site"));
    }

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/site"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/site"));
    }

    #[test]
    fn test_normalize_path_resolves_dot_segments() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("blog")).unwrap();

        let dotted = dir.path().join("blog").join("..").join("blog");
        let expected = dir.path().join("blog").canonicalize().unwrap();
        assert_eq!(normalize_path(&dotted), expected);
    }
}

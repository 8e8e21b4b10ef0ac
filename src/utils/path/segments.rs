//! Relative path → URL segments.
//!
//! URLs always use `/`, whatever separator the host filesystem uses, so
//! paths are split into their normal components before being joined.

use std::path::{Component, Path};

/// Split a relative path into its named segments.
///
/// Root, prefix and `.` components are dropped; non-UTF-8 names are
/// converted lossily.
pub fn url_segments(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_segments_nested() {
        assert_eq!(
            url_segments(Path::new("blog/posts/hello.html")),
            ["blog", "posts", "hello.html"]
        );
    }

    #[test]
    fn test_url_segments_skips_cur_dir() {
        assert_eq!(url_segments(Path::new("./about/index.html")), ["about", "index.html"]);
    }

    #[test]
    fn test_url_segments_empty() {
        assert!(url_segments(Path::new("")).is_empty());
    }
}

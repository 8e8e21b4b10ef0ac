//! Output generators.
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)

pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
///
/// Drops line indentation and blank lines; text inside a single line is
/// left untouched.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        Cow::Owned(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect(),
        )
    } else {
        Cow::Borrowed(content)
    }
}

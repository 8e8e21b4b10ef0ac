//! Config field path used to point diagnostics at a TOML key.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a `sitemap.toml` key, e.g. `sitemap.priority.root`.
///
/// Each section declares its fields as associated constants:
///
/// ```ignore
/// impl SiteSection {
///     pub const URL: FieldPath = FieldPath::new("site.url");
/// }
/// diag.error(SiteSection::URL, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.as_str()).bright_blue())
    }
}

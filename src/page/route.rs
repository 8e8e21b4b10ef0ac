//! Source file → canonical URL mapping.
//!
//! ```text
//! index.html          -> {base}/
//! about/index.html    -> {base}/about/
//! docs/index.htm      -> {base}/docs/index/
//! blog/post.html      -> {base}/blog/post.html
//! ```

use std::path::Path;

use crate::utils::path::url_segments;

/// URL path (starting with `/`) for a file relative to the site root.
pub fn url_path(relative: &Path) -> String {
    let mut segments = url_segments(relative);
    let Some(file_name) = segments.pop() else {
        return "/".to_owned();
    };

    match file_name.as_str() {
        "index.html" if segments.is_empty() => "/".to_owned(),
        "index.html" => format!("/{}/", segments.join("/")),
        "index.htm" => {
            segments.push("index".to_owned());
            format!("/{}/", segments.join("/"))
        }
        _ => {
            segments.push(file_name);
            format!("/{}", segments.join("/"))
        }
    }
}

/// Canonical absolute URL for `path`, which lives under `root`.
///
/// `base_url` may carry a path prefix; its trailing slashes are dropped
/// before joining.
pub fn url_for(base_url: &str, root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    format!("{}{}", base_url.trim_end_matches('/'), url_path(relative))
}

/// Whether `url` is the site root, ignoring trailing slashes.
#[inline]
pub fn is_site_root(url: &str, base_url: &str) -> bool {
    url.trim_end_matches('/') == base_url.trim_end_matches('/')
}

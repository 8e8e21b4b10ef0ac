//! Enumerate candidate `.html` files under the site root.
//!
//! Read-only and single-threaded. Directories below the root that
//! [`PageFilter::can_descend`] rejects are pruned during the walk, so
//! `node_modules` and friends are never read. The root itself is never
//! pruned, whatever its name (`_site`, `.tmpXXXX`, `tools`).
//!
//! Only files ending in exactly `.html` are enumerated; `Page.HTML` is not
//! a candidate.

use anyhow::{Context, Result};
use jwalk::{Parallelism, WalkDir};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::filter::PageFilter;

/// Extension candidates must carry, compared exactly.
const HTML_EXTENSION: &str = "html";

/// Lazily yield every `.html` file under `root`, in no particular order.
///
/// Fails up front when `root` cannot be read; errors met deeper in the walk
/// are yielded in place.
pub fn html_files(
    root: &Path,
    filter: &PageFilter,
) -> Result<impl Iterator<Item = Result<PathBuf>> + use<>> {
    std::fs::read_dir(root)
        .with_context(|| format!("Failed to read site root {}", root.display()))?;

    let prune = filter.clone();
    let walk = walker(root).process_read_dir(move |depth, _path, _state, children| {
        // `None` is the read that yields the root entry itself
        if depth.is_none() {
            return;
        }
        children.retain(|entry| {
            entry.as_ref().map_or(true, |e| {
                !e.file_type().is_dir() || prune.can_descend(&e.file_name().to_string_lossy())
            })
        });
    });

    Ok(walk.into_iter().filter_map(|entry| match entry {
        Ok(entry) => {
            let path = entry.path();
            (has_html_extension(&path) && path.is_file()).then_some(Ok(path))
        }
        Err(err) => Some(Err(err).context("Failed to walk site directory")),
    }))
}

/// Serial walk of every entry under `root`, hidden ones included.
fn walker(root: &Path) -> WalkDir {
    WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(false)
}

#[inline]
fn has_html_extension(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(HTML_EXTENSION))
}

//! Last-modified date of a page, clamped to today.

use anyhow::{Context, Result};
use std::path::Path;

use crate::utils::date::DateUtc;

/// Modification date (UTC) of `path`, never later than `today`.
pub fn last_modified(path: &Path, today: DateUtc) -> Result<DateUtc> {
    let mtime = path
        .metadata()
        .and_then(|m| m.modified())
        .with_context(|| format!("Failed to read modification time of {}", path.display()))?;

    Ok(DateUtc::from_system_time(mtime).min(today))
}

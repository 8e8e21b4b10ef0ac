//! Path utilities.
//!
//! - [`fs`]: filesystem path normalization (`normalize_path`)
//! - [`segments`]: relative path → `/`-joined URL segments

pub mod fs;
pub mod segments;

pub use fs::normalize_path;
pub use segments::url_segments;

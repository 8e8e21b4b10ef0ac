//! Page discovery: which files under the site root are public pages.
//!
//! - [`scan`]: walk the root for `.html` files
//! - [`filter`]: path-only public-page predicate
//! - [`route`]: file → canonical URL
//! - [`lastmod`]: file → clamped modification date

pub mod filter;
pub mod lastmod;
pub mod route;
pub mod scan;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::{config::SiteConfig, debug};
pub use filter::PageFilter;

/// An html file under the site root. Lives for one run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SiteFile {
    /// Absolute path on disk
    pub source: PathBuf,
    /// Path relative to the site root
    pub relative: PathBuf,
}

impl SiteFile {
    pub fn new(root: &Path, source: PathBuf) -> Self {
        let relative = source.strip_prefix(root).unwrap_or(&source).to_path_buf();
        Self { source, relative }
    }
}

/// Public pages found under the site root, sorted by source path.
#[derive(Debug, Default)]
pub struct PageScan {
    pub pages: Vec<SiteFile>,
    /// `.html` files seen but rejected by the filter
    pub excluded: usize,
}

/// Enumerate, filter and sort the public pages of `config.root`.
pub fn collect_pages(config: &SiteConfig) -> Result<PageScan> {
    let filter = PageFilter::from_config(&config.sitemap);
    let mut scan = PageScan::default();

    for source in scan::html_files(&config.root, &filter)? {
        let file = SiteFile::new(&config.root, source?);
        match filter.exclusion(&file.relative) {
            None => scan.pages.push(file),
            Some(reason) => {
                debug!("skip"; "{} ({reason})", file.relative.display());
                scan.excluded += 1;
            }
        }
    }

    scan.pages.sort();
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for relative in files {
            let path = dir.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "<html></html>").unwrap();
        }
        dir
    }

    fn relatives(scan: &PageScan) -> Vec<&str> {
        scan.pages
            .iter()
            .map(|p| p.relative.to_str().unwrap())
            .collect()
    }

    #[test]
    fn test_collect_pages_sorted_and_filtered() {
        let dir = site(&[
            "index.html",
            "zeta.html",
            "about/index.html",
            "about/team.html",
            "404.html",
            "blog/404.html",
            "assets/demo.html",
            "_drafts/post.html",
            "notes.txt",
        ]);

        let scan = collect_pages(&SiteConfig::with_root(dir.path())).unwrap();
        assert_eq!(
            relatives(&scan),
            ["about/index.html", "about/team.html", "index.html", "zeta.html"]
        );
        // 404 pages are walked but rejected; pruned directories are never seen
        assert_eq!(scan.excluded, 2);
    }

    #[test]
    fn test_one_page_per_qualifying_file() {
        let dir = site(&["a.html", "b/index.html", "b/c/d.html", "tools/x.html"]);

        let scan = collect_pages(&SiteConfig::with_root(dir.path())).unwrap();
        assert_eq!(scan.pages.len(), 3);

        let mut unique = scan.pages.clone();
        unique.dedup();
        assert_eq!(unique.len(), scan.pages.len());
    }

    #[test]
    fn test_root_directory_name_does_not_exclude_pages() {
        let parent = TempDir::new().unwrap();
        for name in ["blog", "_site", "tools"] {
            let root = parent.path().join(name);
            for relative in ["index.html", "about/index.html"] {
                let path = root.join(relative);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(path, "<html></html>").unwrap();
            }

            let scan = collect_pages(&SiteConfig::with_root(&root)).unwrap();
            assert_eq!(relatives(&scan), ["about/index.html", "index.html"], "{name}");
        }
    }

    #[test]
    fn test_empty_site() {
        let dir = TempDir::new().unwrap();
        let scan = collect_pages(&SiteConfig::with_root(dir.path())).unwrap();
        assert!(scan.pages.is_empty());
        assert_eq!(scan.excluded, 0);
    }

    #[test]
    fn test_site_file_paths() {
        let file = SiteFile::new(Path::new("/site"), PathBuf::from("/site/blog/Post.HTML"));
        assert_eq!(file.relative, PathBuf::from("blog/Post.HTML"));
        assert_eq!(file.source, PathBuf::from("/site/blog/Post.HTML"));
    }
}

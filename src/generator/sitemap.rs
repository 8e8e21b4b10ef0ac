//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all public pages for search engine
//! indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!     <url>
//!         <loc>https://example.com/</loc>
//!         <lastmod>2025-01-01</lastmod>
//!         <changefreq>weekly</changefreq>
//!         <priority>0.7</priority>
//!     </url>
//! </urlset>
//! ```

use crate::{
    config::{ChangeFreq, Priority, SiteConfig},
    generator::minify_xml,
    log,
    page::{PageScan, SiteFile, collect_pages, lastmod::last_modified, route},
    utils::{date::DateUtc, plural::plural_count},
};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Scan the site root and build its sitemap.
///
/// `today` caps every `<lastmod>`.
pub fn build_sitemap(config: &SiteConfig, today: DateUtc) -> Result<Sitemap> {
    let PageScan { pages, excluded } = collect_pages(config)?;
    log!("scan"; "{}, {} excluded", plural_count(pages.len(), "page"), excluded);

    Sitemap::from_pages(config, &pages, today)
}

#[derive(Debug)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: DateUtc,
    pub changefreq: ChangeFreq,
    pub priority: Priority,
}

impl Sitemap {
    /// One entry per page, in the order given.
    fn from_pages(config: &SiteConfig, pages: &[SiteFile], today: DateUtc) -> Result<Self> {
        let base_url = config.site.base_url();
        let tiers = &config.sitemap.priority;

        let urls = pages
            .iter()
            .map(|page| {
                let loc = route::url_for(base_url, &config.root, &page.source);
                let priority = if route::is_site_root(&loc, base_url) {
                    tiers.root
                } else {
                    tiers.page
                };
                Ok(UrlEntry {
                    lastmod: last_modified(&page.source, today)?,
                    changefreq: config.sitemap.changefreq,
                    priority,
                    loc,
                })
            })
            .collect::<Result<_>>()?;

        Ok(Self { urls })
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 192);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for (i, entry) in self.urls.iter().enumerate() {
            if i > 0 {
                xml.push('\n');
            }
            // Writing into a String cannot fail.
            let _ = write!(
                xml,
                "    <url>\n        <loc>{}</loc>\n        <lastmod>{}</lastmod>\n        \
                 <changefreq>{}</changefreq>\n        <priority>{}</priority>\n    </url>",
                escape_xml(&entry.loc),
                entry.lastmod,
                entry.changefreq.as_str(),
                entry.priority,
            );
        }

        xml.push_str("\n</urlset>\n");
        xml
    }

    /// Serialized document, minified when configured.
    pub fn render(&self, config: &SiteConfig) -> String {
        let xml = self.to_xml();
        minify_xml(&xml, config.sitemap.minify).into_owned()
    }

    /// Write the rendered document to `config.output_path()`.
    pub fn write(&self, config: &SiteConfig) -> Result<PathBuf> {
        let sitemap_path = config.output_path();
        let xml = self.render(config);

        fs::write(&sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", config.root_relative(&sitemap_path).display());
        Ok(sitemap_path)
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitemap.toml`:
//!
//! | Module    | TOML Section | Purpose                                 |
//! |-----------|--------------|-----------------------------------------|
//! | `site`    | `[site]`     | Public base URL                         |
//! | `sitemap` | `[sitemap]`  | Output path, exclusions, tags, minify   |

pub mod site;
pub mod sitemap;

pub use site::SiteSection;
pub use sitemap::{ChangeFreq, Priority, SitemapSection};

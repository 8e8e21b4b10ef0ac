//! sitemapgen - rebuild sitemap.xml for a static site.

mod cli;
mod config;
mod generator;
mod logger;
mod page;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::SiteConfig;
use generator::sitemap::build_sitemap;
use std::io::Write;
use utils::date::DateUtc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    let sitemap = build_sitemap(&config, DateUtc::today())?;

    if cli.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(sitemap.render(&config).as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write sitemap to stdout")?;
    } else {
        sitemap.write(&config)?;
    }

    Ok(())
}

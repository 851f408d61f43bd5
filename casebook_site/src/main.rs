//! `casebook [site.toml]` - build the static site from the content tree.

use anyhow::{Context, Result};
use casebook_site::{build_site, SiteConfig};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => SiteConfig::load(&path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => SiteConfig::default(),
    };
    info!(data = %config.data_dir.display(), output = %config.output_dir.display(), "building site");

    let report = build_site(&config).context("site build failed")?;
    info!(pages = report.pages_written, "done");
    Ok(())
}

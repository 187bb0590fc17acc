//! Blog manifest generator - sequential pipeline.
//!
//! Scans MDX posts and emits paginated JSON manifests:
//!   1. enumerate posts/*.mdx, descending filename order
//!   2. per-file header extraction into PostMetadata (invalid files skipped)
//!   3. sort by publish date, newest first
//!   4. chunk into pages; write metadata/<slug>.json, page-N.json, index.json

mod config;
mod frontmatter;
mod manifest;
mod pipeline;
mod post;

use anyhow::Result;
use config::ManifestConfig;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    println!("Blog Manifest Generator");
    println!("=======================\n");

    let config = ManifestConfig::default();
    let summary = pipeline::generate(&config)?;

    if summary.posts > 0 {
        println!(
            "\nComplete! {} post(s) across {} page(s)",
            summary.posts, summary.pages
        );
    }

    Ok(())
}

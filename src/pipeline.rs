use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, warn};

use crate::config::ManifestConfig;
use crate::manifest;
use crate::post::{self, PostMetadata, Skip};

/// Counts reported after a run.
#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    pub posts: usize,
    pub pages: usize,
}

/// Full rebuild: scan, extract, sort, paginate, emit.
///
/// Per-file failures are downgraded to skips; only output I/O errors
/// propagate.
pub fn generate(config: &ManifestConfig) -> Result<RunSummary> {
    fs::create_dir_all(&config.manifests_dir)?;
    fs::create_dir_all(&config.metadata_dir)?;

    if !config.posts_dir.exists() {
        error!(dir = %config.posts_dir.display(), "posts directory not found");
        return Ok(RunSummary::default());
    }

    let files = scan_posts(config)?;
    println!("Found {} MDX file(s)\n", files.len());

    let mut posts: Vec<PostMetadata> = Vec::new();
    for file in &files {
        match post::load(file) {
            Ok(meta) => {
                manifest::write_json(&config.metadata_file(&meta.slug), &meta)?;
                println!("  [OK] {}", meta.slug);
                posts.push(meta);
            }
            Err(Skip::MissingTitle) => {
                warn!(slug = %post::slug_of(file), "missing title, skipped");
            }
            Err(Skip::Unreadable(err)) => {
                error!(file = %file.display(), %err, "skipped");
            }
        }
    }

    if posts.is_empty() {
        warn!("no valid posts found");
        return Ok(RunSummary::default());
    }

    println!("\nProcessed {} post(s)\n", posts.len());

    // Newest first; the sort is stable, so equal dates keep scan order.
    // Dates compare as plain strings: zero-padded ISO dates order correctly,
    // anything else orders however it orders, and "" lands at the end.
    posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));

    let pages = manifest::paginate(&posts, config.posts_per_page);
    println!("Generating {} page(s)...", pages.len());
    for page in &pages {
        manifest::write_json(&config.page_file(page.page), page)?;
        println!("  [OK] page-{}.json ({} posts)", page.page, page.posts.len());
    }

    let index = manifest::build_index(config, &posts, pages.len());
    manifest::write_json(&config.index_file(), &index)?;
    println!("\nGenerated index.json");

    Ok(RunSummary {
        posts: posts.len(),
        pages: pages.len(),
    })
}

/// Enumerate `*.mdx` files in descending filename order.
fn scan_posts(config: &ManifestConfig) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(&config.posts_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|ext| ext == "mdx").unwrap_or(false))
        .collect();
    files.sort_by(|a, b| b.cmp(a));
    Ok(files)
}

// ── Tests ──

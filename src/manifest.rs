use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ManifestConfig;
use crate::post::PostMetadata;

/// One fixed-capacity chunk of the sorted post sequence.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageManifest {
    pub page: usize,
    pub posts: Vec<PostMetadata>,
}

/// Collection index: totals, newest-post preview, and the page map.
///
/// `pages` keeps its keys in insertion order ("1".."N") when serialized.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexManifest {
    pub version: String,
    pub total_posts: usize,
    pub total_pages: usize,
    pub posts_per_page: usize,
    pub latest_posts: Vec<PostMetadata>,
    pub pages: IndexMap<String, String>,
}

/// Split sorted posts into contiguous 1-indexed pages of at most `per_page`
/// records; only the last page may be short.
pub fn paginate(posts: &[PostMetadata], per_page: usize) -> Vec<PageManifest> {
    posts
        .chunks(per_page)
        .enumerate()
        .map(|(i, chunk)| PageManifest {
            page: i + 1,
            posts: chunk.to_vec(),
        })
        .collect()
}

/// Assemble the index for the full sorted collection, stamped with the
/// current UTC time.
pub fn build_index(
    config: &ManifestConfig,
    posts: &[PostMetadata],
    total_pages: usize,
) -> IndexManifest {
    IndexManifest {
        version: Utc::now().to_rfc3339(),
        total_posts: posts.len(),
        total_pages,
        posts_per_page: config.posts_per_page,
        latest_posts: posts.iter().take(config.latest_count).cloned().collect(),
        pages: (1..=total_pages)
            .map(|n| (n.to_string(), config.page_ref(n)))
            .collect(),
    }
}

/// Write a manifest as human-readable JSON (2-space indent).
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str) -> PostMetadata {
        PostMetadata {
            slug: slug.to_string(),
            title: format!("Title {}", slug),
            classification: "UNCLASSIFIED".to_string(),
            abstract_text: String::new(),
            publish_date: date.to_string(),
            version: "1.0".to_string(),
            thumbnail: "thumbnails/default.svg".to_string(),
        }
    }

    fn posts(n: usize) -> Vec<PostMetadata> {
        (0..n)
            .map(|i| post(&format!("post-{:03}", i), "2024-01-01"))
            .collect()
    }

    #[test]
    fn pages_partition_the_collection() {
        let all = posts(120);
        let pages = paginate(&all, 50);

        assert_eq!(pages.len(), 3);
        assert_eq!(
            pages.iter().map(|p| p.posts.len()).collect::<Vec<_>>(),
            vec![50, 50, 20]
        );
        assert_eq!(
            pages.iter().map(|p| p.page).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        // Union preserves the input order exactly, so pages are disjoint.
        let union: Vec<_> = pages.iter().flat_map(|p| p.posts.clone()).collect();
        assert_eq!(union, all);
    }

    #[test]
    fn exact_multiple_has_no_short_page() {
        let pages = paginate(&posts(100), 50);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.posts.len() == 50));
    }

    #[test]
    fn few_posts_fit_one_page() {
        let pages = paginate(&posts(3), 50);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page, 1);
        assert_eq!(pages[0].posts.len(), 3);
    }

    #[test]
    fn no_posts_no_pages() {
        assert!(paginate(&[], 50).is_empty());
    }

    #[test]
    fn index_previews_ten_newest() {
        let config = ManifestConfig::default();
        let all = posts(12);
        let index = build_index(&config, &all, 1);

        assert_eq!(index.total_posts, 12);
        assert_eq!(index.total_pages, 1);
        assert_eq!(index.posts_per_page, 50);
        assert_eq!(index.latest_posts.len(), 10);
        assert_eq!(index.latest_posts[..], all[..10]);
        assert!(!index.version.is_empty());
    }

    #[test]
    fn index_preview_shrinks_with_collection() {
        let config = ManifestConfig::default();
        let all = posts(3);
        let index = build_index(&config, &all, 1);
        assert_eq!(index.latest_posts.len(), 3);
    }

    #[test]
    fn page_map_keyed_by_page_number() {
        let config = ManifestConfig::default();
        let index = build_index(&config, &posts(120), 3);

        assert_eq!(index.pages.len(), 3);
        assert_eq!(
            index.pages.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["1", "2", "3"]
        );
        assert_eq!(
            index.pages.get("2").map(String::as_str),
            Some("manifests/page-2.json")
        );
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frontmatter;

static SLUG_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})").unwrap());

pub const DEFAULT_CLASSIFICATION: &str = "UNCLASSIFIED";
pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_THUMBNAIL: &str = "thumbnails/default.svg";

/// Metadata for one post, in the field order readers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub slug: String,
    pub title: String,
    pub classification: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub publish_date: String,
    pub version: String,
    pub thumbnail: String,
}

/// Why a source file produced no record. Skips never abort the run.
#[derive(Debug, Error)]
pub enum Skip {
    #[error("missing title")]
    MissingTitle,
    #[error("unreadable: {0}")]
    Unreadable(#[from] std::io::Error),
}

/// Build a record from one source file, or report why it was skipped.
pub fn load(path: &Path) -> Result<PostMetadata, Skip> {
    let content = fs::read_to_string(path)?;
    let header = frontmatter::extract(&content);
    build(slug_of(path), &header)
}

/// Filename stem: path and extension stripped.
pub fn slug_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn build(slug: String, header: &HashMap<String, String>) -> Result<PostMetadata, Skip> {
    let title = header.get("title").map(String::as_str).unwrap_or("");
    if title.is_empty() {
        return Err(Skip::MissingTitle);
    }

    let publish_date = publish_date(&slug, header);
    let get = |key: &str, default: &str| {
        header
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    Ok(PostMetadata {
        title: title.to_string(),
        classification: get("classification", DEFAULT_CLASSIFICATION),
        abstract_text: get("abstract", ""),
        publish_date,
        version: get("version", DEFAULT_VERSION),
        thumbnail: get("thumbnail", DEFAULT_THUMBNAIL),
        slug,
    })
}

/// A `YYYY-MM-DD` prefix on the slug wins over the header field.
fn publish_date(slug: &str, header: &HashMap<String, String>) -> String {
    match SLUG_DATE_RE.captures(slug) {
        Some(caps) => caps[1].to_string(),
        None => header.get("publishDate").cloned().unwrap_or_default(),
    }
}

// ── Tests ──

//! Stamp service - write a version key into every page's front matter

use crate::models::{DocFile, DocsConfig};
use crate::parser::frontmatter::{split_front_matter, strip_legacy_line, upsert_front_matter};
use crate::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// The key/value pair written into front matter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStamp {
    pub key: String,
    pub value: String,
    /// Bare `key: legacy_value` line removed from the top of a page first
    pub legacy_value: Option<String>,
}

impl VersionStamp {
    pub fn from_config(config: &DocsConfig) -> Self {
        Self {
            key: config.version_key.clone(),
            value: config.stamp_version.clone(),
            legacy_value: config.legacy_version.clone(),
        }
    }

    /// Stamped text for one document
    pub fn apply(&self, content: &str) -> String {
        let content = match &self.legacy_value {
            Some(legacy) => strip_legacy_line(content, &self.key, legacy),
            None => content.into(),
        };
        upsert_front_matter(&content, &self.key, &self.value)
    }
}

/// Result of a stamp run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StampSummary {
    pub scanned: usize,
    pub updated: Vec<PathBuf>,
    /// Pages opening with `---` that never close it
    pub malformed: Vec<PathBuf>,
    /// Pages left untouched because they could not be read as UTF-8 text
    pub unreadable: Vec<PathBuf>,
}

/// Stamp every page; with `dry_run` nothing is written.
pub fn stamp_docs(docs: &[DocFile], stamp: &VersionStamp, dry_run: bool) -> Result<StampSummary> {
    let mut summary = StampSummary::default();

    for doc in docs {
        summary.scanned += 1;

        let content = match std::fs::read_to_string(&doc.path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("⚠️  Skipping unreadable page {}: {}", doc.display, e).yellow()
                );
                summary.unreadable.push(doc.path.clone());
                continue;
            }
        };

        if split_front_matter(&content).is_err() {
            eprintln!(
                "{}",
                format!("⚠️  Unclosed front matter in {}, prepending a new block", doc.display)
                    .yellow()
            );
            summary.malformed.push(doc.path.clone());
        }

        let stamped = stamp.apply(&content);
        if stamped == content {
            continue;
        }

        if !dry_run {
            std::fs::write(&doc.path, &stamped)
                .with_context(|| format!("Failed to write {}", doc.display))?;
        }
        summary.updated.push(doc.path.clone());
    }

    Ok(summary)
}

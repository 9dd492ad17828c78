//! Last-modified timestamps from version-control history
//!
//! The health run asks a [`TimestampSource`] for each page's last commit
//! time. [`GitHistory`] answers from a git repository, indexing every commit
//! once up front so per-page lookups are map reads.

mod git;

pub use git::GitHistory;

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Why a page has no timestamp
#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error("No git repository found at or above '{0}'")]
    NoRepository(PathBuf),

    #[error("'{0}' is outside the repository working tree")]
    OutsideRepository(PathBuf),

    #[error("'{0}' has no commit history")]
    NotTracked(PathBuf),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),
}

/// Anything that can report when a file was last changed
pub trait TimestampSource {
    /// Most recent commit time touching `path`, which must be absolute
    fn last_modified(&self, path: &Path) -> Result<DateTime<Utc>, TimestampError>;
}

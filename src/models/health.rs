//! Staleness statistics collected during a health run

use chrono::Duration;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of classifying one page's last modification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub stale: bool,
    pub recent: bool,
}

/// A stale page and how long ago it was last touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleEntry {
    pub path: String,
    pub age: Duration,
}

impl StaleEntry {
    /// Age in whole days, rounded down
    pub fn age_days(&self) -> i64 {
        self.age.num_days()
    }
}

/// Per-section counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionStat {
    pub total_files: usize,
    pub stale_files: Vec<StaleEntry>,
}

impl SectionStat {
    pub fn is_healthy(&self) -> bool {
        self.stale_files.is_empty()
    }
}

/// Overall verdict of a health run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Stale,
}

impl HealthStatus {
    /// Process exit status: 0 when healthy, 1 when stale pages exist
    pub fn exit_code(self) -> i32 {
        match self {
            HealthStatus::Healthy => 0,
            HealthStatus::Stale => 1,
        }
    }
}

/// Aggregated result of a health run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthStats {
    /// Sections keyed by name; iteration order is the render order
    pub sections: BTreeMap<String, SectionStat>,
    pub total_docs_count: usize,
    pub total_stale_files: usize,
    pub recently_updated_count: usize,
    /// Pages whose history lookup produced no timestamp
    pub unavailable_count: usize,
}

impl HealthStats {
    /// Share of pages updated within the recent window, in percent.
    ///
    /// Zero when no pages were scanned.
    pub fn recent_percentage(&self) -> f64 {
        if self.total_docs_count == 0 {
            return 0.0;
        }
        self.recently_updated_count as f64 / self.total_docs_count as f64 * 100.0
    }

    pub fn status(&self) -> HealthStatus {
        if self.total_stale_files == 0 {
            HealthStatus::Healthy
        } else {
            HealthStatus::Stale
        }
    }

    pub fn summary(&self) -> HealthSummary {
        HealthSummary {
            total_docs_count: self.total_docs_count,
            total_stale_files: self.total_stale_files,
            recently_updated_count: self.recently_updated_count,
            unavailable_count: self.unavailable_count,
            recent_percentage: self.recent_percentage(),
            status: self.status(),
            exit_code: self.status().exit_code(),
        }
    }
}

/// Flat summary for console and JSON output
#[derive(Debug, Clone, Serialize)]
pub struct HealthSummary {
    pub total_docs_count: usize,
    pub total_stale_files: usize,
    pub recently_updated_count: usize,
    pub unavailable_count: usize,
    pub recent_percentage: f64,
    pub status: HealthStatus,
    pub exit_code: i32,
}

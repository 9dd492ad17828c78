//! Health service - classify pages by age and publish the health region

use crate::history::{TimestampError, TimestampSource};
use crate::models::{
    Classification, DocFile, DocsConfig, HealthStats, StaleEntry, StalenessConfig,
};
use crate::report::{render_health, ReportFile};
use crate::services::discovery_service::collect_docs;
use crate::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Classify one page.
///
/// `stale` when the page predates `now - stale_after`; `recent` when it is
/// newer than `now - recent_within`. With sane thresholds the two never hold
/// at once. A threshold reaching past the earliest representable date makes
/// nothing stale and everything recent.
pub fn classify(
    last_modified: DateTime<Utc>,
    now: DateTime<Utc>,
    thresholds: &StalenessConfig,
) -> Classification {
    let stale_cutoff = now.checked_sub_signed(thresholds.stale_after);
    let recent_cutoff = now.checked_sub_signed(thresholds.recent_within);
    Classification {
        stale: stale_cutoff.is_some_and(|cutoff| last_modified < cutoff),
        recent: recent_cutoff.map_or(true, |cutoff| last_modified > cutoff),
    }
}

/// Accumulates section and run-wide counters for one health run.
///
/// Every page is classified against the same `now`.
#[derive(Debug, Clone)]
pub struct HealthAnalyzer {
    thresholds: StalenessConfig,
    now: DateTime<Utc>,
    stats: HealthStats,
}

impl HealthAnalyzer {
    pub fn new(thresholds: StalenessConfig, now: DateTime<Utc>) -> Self {
        Self {
            thresholds,
            now,
            stats: HealthStats::default(),
        }
    }

    pub fn thresholds(&self) -> &StalenessConfig {
        &self.thresholds
    }

    /// Record a page. Without a timestamp the page only counts toward totals.
    pub fn record(
        &mut self,
        doc: &DocFile,
        last_modified: Option<DateTime<Utc>>,
    ) -> Classification {
        self.stats.total_docs_count += 1;
        let section = self.stats.sections.entry(doc.section.clone()).or_default();
        section.total_files += 1;

        let Some(last_modified) = last_modified else {
            self.stats.unavailable_count += 1;
            return Classification::default();
        };

        let class = classify(last_modified, self.now, &self.thresholds);
        if class.stale {
            section.stale_files.push(StaleEntry {
                path: doc.display.clone(),
                age: self.now - last_modified,
            });
            self.stats.total_stale_files += 1;
        }
        if class.recent {
            self.stats.recently_updated_count += 1;
        }
        class
    }

    pub fn finish(self) -> HealthStats {
        self.stats
    }
}

/// Look up and classify every page.
///
/// A failed lookup never aborts the run; repository errors are reported,
/// untracked pages are skipped silently.
pub fn analyze(
    docs: &[DocFile],
    source: &dyn TimestampSource,
    thresholds: StalenessConfig,
    now: DateTime<Utc>,
) -> HealthStats {
    let mut analyzer = HealthAnalyzer::new(thresholds, now);

    for doc in docs {
        let last_modified = match source.last_modified(&doc.path) {
            Ok(ts) => Some(ts),
            Err(TimestampError::NotTracked(_)) => None,
            Err(e) => {
                eprintln!("{}", format!("⚠️  No history for {}: {}", doc.display, e).yellow());
                None
            }
        };
        analyzer.record(doc, last_modified);
    }

    analyzer.finish()
}

/// Scan the docs tree, merge the health region into the report file and
/// return the run statistics.
pub fn generate_health_report(
    project_root: &Path,
    config: &DocsConfig,
    source: &dyn TimestampSource,
    now: DateTime<Utc>,
) -> Result<HealthStats> {
    let docs = collect_docs(project_root, config)?;
    let thresholds = config.staleness()?;
    let stats = analyze(&docs, source, thresholds, now);

    let region = render_health(&stats, &thresholds);
    ReportFile::new(config.report_path(project_root)).update(&region)?;

    Ok(stats)
}

/// Append `recent_percentage` and `exit_code` lines to a CI output file
pub fn append_ci_outputs(output_path: &Path, stats: &HealthStats) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)
        .with_context(|| format!("Failed to open CI output {}", output_path.display()))?;

    writeln!(file, "recent_percentage={:.1}", stats.recent_percentage())?;
    writeln!(file, "exit_code={}", stats.status().exit_code())?;
    Ok(())
}

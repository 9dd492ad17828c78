//! Markdown bodies for the health and version regions
//!
//! Rendering is pure: identical statistics always produce identical text.

use std::fmt::Write as _;

use crate::models::{HealthStats, StalenessConfig, VersionIndex};

use super::merge::{Region, HEALTH_MARKERS, VERSION_MARKERS};

/// Render the health region for a finished run
pub fn render_health(stats: &HealthStats, thresholds: &StalenessConfig) -> Region {
    let mut out = String::new();

    out.push_str("# Documentation Health Report\n\n");
    let _ = write!(
        out,
        "**Summary:** **{:.1}%** of documentation pages were updated in the last {} weeks. ",
        stats.recent_percentage(),
        thresholds.recent_within_weeks()
    );
    let _ = writeln!(
        out,
        "A total of **{}** page(s) are considered stale (older than {} days).\n",
        stats.total_stale_files,
        thresholds.stale_after_days()
    );

    if stats.total_stale_files == 0 {
        out.push_str("**All documentation is up-to-date!**\n");
        return HEALTH_MARKERS.wrap(&out);
    }

    out.push_str("## Detailed Health by Section\n\n");
    for (section, stat) in &stats.sections {
        if stat.is_healthy() {
            let _ = writeln!(out, "### {section} - ✅ Healthy");
            let _ = writeln!(
                out,
                "All {} page(s) in this section are up-to-date.\n",
                stat.total_files
            );
            continue;
        }

        let _ = writeln!(out, "### {section} - ⚠️ Needs Review");
        let _ = writeln!(
            out,
            "{} of {} page(s) in this section are stale:\n",
            stat.stale_files.len(),
            stat.total_files
        );
        for entry in &stat.stale_files {
            let _ = writeln!(
                out,
                "- **{}**: Last updated {} days ago",
                entry.path,
                entry.age_days()
            );
        }
        out.push('\n');
    }

    HEALTH_MARKERS.wrap(&out)
}

/// Render the version region
pub fn render_versions(index: &VersionIndex) -> Region {
    let mut out = String::new();

    out.push_str("# Documentation Version Report\n\n");
    out.push_str("This report provides a summary of the versions of the documentation pages.\n\n");

    for (version, docs) in &index.buckets {
        let _ = writeln!(out, "## Version {version}\n");
        let _ = writeln!(out, "Found {} pages with this version:\n", docs.len());
        for doc in docs {
            let _ = writeln!(out, "- [{}]({})", doc.display, doc.html_link());
        }
        out.push('\n');
    }

    if !index.unversioned.is_empty() {
        out.push_str("## Pages without Version Information\n\n");
        let _ = writeln!(
            out,
            "Found {} pages without version metadata:\n",
            index.unversioned.len()
        );
        for doc in &index.unversioned {
            let _ = writeln!(out, "- [{}]({})", doc.display, doc.html_link());
        }
        out.push('\n');
    }

    VERSION_MARKERS.wrap(&out)
}

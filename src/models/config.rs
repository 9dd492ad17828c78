//! Configuration loaded from `dochealth.toml`

use anyhow::Context;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name, looked up at the project root
pub const CONFIG_FILE: &str = "dochealth.toml";

/// Project-level settings for every report kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Documentation root, relative to the project root
    pub docs_dir: PathBuf,

    /// Report file holding the marker regions, relative to the project root
    pub report_file: PathBuf,

    /// Pages untouched for longer than this are stale
    pub stale_after_days: u32,

    /// Pages touched within this window count as recently updated
    pub recent_within_weeks: u32,

    /// Front-matter key carrying the page version
    pub version_key: String,

    /// Value written by the `stamp` command
    pub stamp_version: String,

    /// Bare `version_key: <value>` line older tooling wrote above the front matter
    pub legacy_version: Option<String>,

    /// Glob patterns, relative to `docs_dir`, excluded from every scan
    pub exclude: Vec<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            report_file: PathBuf::from("docs_health_report.md"),
            stale_after_days: 90,
            recent_within_weeks: 4,
            version_key: "version".to_string(),
            stamp_version: "1.0".to_string(),
            legacy_version: Some("1.0".to_string()),
            exclude: Vec::new(),
        }
    }
}

impl DocsConfig {
    /// Load config from `<project_root>/dochealth.toml`, or defaults when absent
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: DocsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    pub fn docs_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.docs_dir)
    }

    pub fn report_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.report_file)
    }

    /// Thresholds for a health run.
    ///
    /// Fails when a threshold reaches back past the earliest representable date.
    pub fn staleness(&self) -> anyhow::Result<StalenessConfig> {
        let stale_after = Duration::try_days(i64::from(self.stale_after_days));
        let recent_within = Duration::try_weeks(i64::from(self.recent_within_weeks));

        let (Some(stale_after), Some(recent_within)) = (stale_after, recent_within) else {
            anyhow::bail!("Staleness thresholds are out of range");
        };

        let now = Utc::now();
        if now.checked_sub_signed(stale_after).is_none() {
            anyhow::bail!("stale_after_days = {} is out of range", self.stale_after_days);
        }
        if now.checked_sub_signed(recent_within).is_none() {
            anyhow::bail!(
                "recent_within_weeks = {} is out of range",
                self.recent_within_weeks
            );
        }

        Ok(StalenessConfig {
            stale_after,
            recent_within,
        })
    }
}

/// Age thresholds used to classify a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessConfig {
    pub stale_after: Duration,
    pub recent_within: Duration,
}

impl Default for StalenessConfig {
    fn default() -> Self {
        Self {
            stale_after: Duration::days(90),
            recent_within: Duration::weeks(4),
        }
    }
}

impl StalenessConfig {
    /// Threshold expressed in whole days, as shown in reports
    pub fn stale_after_days(&self) -> i64 {
        self.stale_after.num_days()
    }

    /// Window expressed in whole weeks, as shown in reports
    pub fn recent_within_weeks(&self) -> i64 {
        self.recent_within.num_weeks()
    }
}

// Dochealth - Documentation health and version reports
// Front-matter versioning, git-based staleness and marker-merged report files

pub mod cli;
pub mod history;
pub mod models;
pub mod parser;
pub mod report;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use history::{GitHistory, TimestampError, TimestampSource};
pub use models::{DocFile, DocsConfig, HealthStats, HealthStatus, StalenessConfig, VersionIndex};
pub use parser::{FrontMatter, FrontMatterError};
pub use report::{merge, Markers, Region, ReportError, ReportFile};

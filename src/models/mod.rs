pub mod config;
pub mod document;
pub mod health;
pub mod versions;

pub use config::{DocsConfig, StalenessConfig, CONFIG_FILE};
pub use document::{section_name, DocFile, ROOT_SECTION};
pub use health::{
    Classification, HealthStats, HealthStatus, HealthSummary, SectionStat, StaleEntry,
};
pub use versions::VersionIndex;

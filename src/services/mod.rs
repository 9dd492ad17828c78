//! Service layer for dochealth
//!
//! Business logic shared by the CLI commands and the integration tests.

pub mod discovery_service;
pub mod health_service;
pub mod stamp_service;
pub mod version_service;

// Re-export commonly used types
pub use discovery_service::collect_docs;
pub use health_service::{
    analyze, append_ci_outputs, classify, generate_health_report, HealthAnalyzer,
};
pub use stamp_service::{stamp_docs, StampSummary, VersionStamp};
pub use version_service::{build_version_index, generate_version_report, index_version};

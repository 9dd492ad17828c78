//! Report rendering and persistence
//!
//! Renderers turn run statistics into marker-fenced regions; the merger
//! splices a region into the shared report file without touching anything
//! outside its own markers.

pub mod file;
pub mod merge;
pub mod render;

pub use file::{ReportError, ReportFile};
pub use merge::{merge, Markers, Region, HEALTH_MARKERS, VERSION_MARKERS};
pub use render::{render_health, render_versions};

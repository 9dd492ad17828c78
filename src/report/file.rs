//! Report file persistence

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::merge::{merge, Region};

/// Errors raised while reading or writing the report file
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to read report '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write report '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// The on-disk report shared by every region kind
#[derive(Debug, Clone)]
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents; a missing file reads as empty
    pub fn load(&self) -> Result<String, ReportError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(source) => Err(ReportError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replace the file contents in one step.
    ///
    /// Content goes to a temporary file beside the report which is then
    /// renamed over it, so readers never see a half-written report.
    pub fn store(&self, content: &str) -> Result<(), ReportError> {
        let write_err = |source| ReportError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Merge `region` into the stored report and write it back
    pub fn update(&self, region: &Region) -> Result<String, ReportError> {
        let existing = self.load()?;
        let merged = merge(&existing, region);
        self.store(&merged)?;
        Ok(merged)
    }
}

pub mod health;
pub mod stamp;
pub mod versions;

use crate::models::DocsConfig;
use crate::{Context, Result};
use std::path::{Path, PathBuf};

/// Settings shared by every report command
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Absolute project root
    pub root: PathBuf,
    pub config: DocsConfig,
}

impl Workspace {
    /// Resolve the project root once, absolute, and load its config.
    ///
    /// Nothing downstream depends on the process working directory.
    pub fn open(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let root = root
            .canonicalize()
            .with_context(|| format!("Project root not found: {}", root.display()))?;
        let config = DocsConfig::load(&root)?;
        Ok(Self { root, config })
    }
}

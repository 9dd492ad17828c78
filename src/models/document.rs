use std::path::{Path, PathBuf};

/// Section name used for pages sitting directly in the docs root
pub const ROOT_SECTION: &str = "Root";

/// A documentation page found by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
    /// Absolute path, used for reading and history lookups
    pub path: PathBuf,

    /// Path relative to the project root with `/` separators (e.g. `docs/guide/intro.md`)
    pub display: String,

    /// Path relative to the docs root with `/` separators (e.g. `guide/intro.md`)
    pub docs_relative: String,

    /// Name of the immediate parent directory, or [`ROOT_SECTION`]
    pub section: String,
}

impl DocFile {
    /// Build a page entry for `path`, which must live under `docs_root`.
    pub fn new(project_root: &Path, docs_root: &Path, path: &Path) -> Self {
        let display = path
            .strip_prefix(project_root)
            .map(slash_path)
            .unwrap_or_else(|_| slash_path(path));
        let docs_relative = path
            .strip_prefix(docs_root)
            .map(slash_path)
            .unwrap_or_else(|_| display.clone());

        Self {
            path: path.to_path_buf(),
            display,
            docs_relative,
            section: section_name(docs_root, path),
        }
    }

    /// Link target for rendered reports: docs-relative with `.md` swapped for `.html`
    pub fn html_link(&self) -> String {
        match self.docs_relative.strip_suffix(".md") {
            Some(stem) => format!("{stem}.html"),
            None => self.docs_relative.clone(),
        }
    }
}

/// Derive the section of a page from its immediate parent directory
pub fn section_name(docs_root: &Path, path: &Path) -> String {
    match path.parent() {
        Some(parent) if parent != docs_root => parent
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| ROOT_SECTION.to_string()),
        _ => ROOT_SECTION.to_string(),
    }
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

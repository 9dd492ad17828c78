//! Discovery service - enumerate documentation pages under the docs root

use crate::models::{DocFile, DocsConfig};
use crate::Result;
use colored::Colorize;
use glob::Pattern;
use std::path::Path;
use walkdir::WalkDir;

/// Collect every `.md` page under the configured docs root.
///
/// Pages come back sorted by path. Entries that cannot be read are reported
/// and skipped; a missing docs root is an error.
pub fn collect_docs(project_root: &Path, config: &DocsConfig) -> Result<Vec<DocFile>> {
    let docs_root = config.docs_root(project_root);
    if !docs_root.is_dir() {
        anyhow::bail!("Docs directory not found: {}", docs_root.display());
    }

    let excludes = config
        .exclude
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| anyhow::anyhow!("Invalid exclude pattern '{}': {}", p, e))
        })
        .collect::<Result<Vec<_>>>()?;
    let report_path = config.report_path(project_root);

    let mut docs = Vec::new();
    for entry in WalkDir::new(&docs_root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("{}", format!("⚠️  Skipping unreadable entry: {}", e).yellow());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path.to_string_lossy().ends_with(".md") || path == report_path.as_path() {
            continue;
        }

        let doc = DocFile::new(project_root, &docs_root, path);
        if excludes.iter().any(|p| p.matches(&doc.docs_relative)) {
            continue;
        }
        docs.push(doc);
    }

    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_docs() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(docs.join("tools/mcp")).unwrap();
        fs::create_dir_all(docs.join("drafts")).unwrap();
        fs::write(docs.join("index.md"), "# Home").unwrap();
        fs::write(docs.join("tools/index.md"), "# Tools").unwrap();
        fs::write(docs.join("tools/mcp/auth.md"), "# Auth").unwrap();
        fs::write(docs.join("tools/logo.png"), [0u8; 4]).unwrap();
        fs::write(docs.join("drafts/wip.md"), "# WIP").unwrap();
        temp_dir
    }

    #[test]
    fn test_collect_docs_filters_markdown() {
        let temp_dir = setup_docs();
        let docs = collect_docs(temp_dir.path(), &DocsConfig::default()).unwrap();

        let paths: Vec<_> = docs.iter().map(|d| d.display.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "docs/drafts/wip.md",
                "docs/index.md",
                "docs/tools/index.md",
                "docs/tools/mcp/auth.md",
            ]
        );
        let sections: Vec<_> = docs.iter().map(|d| d.section.as_str()).collect();
        assert_eq!(sections, vec!["drafts", "Root", "tools", "mcp"]);
    }

    #[test]
    fn test_collect_docs_with_excludes() {
        let temp_dir = setup_docs();
        let config = DocsConfig {
            exclude: vec!["drafts/*".to_string()],
            ..Default::default()
        };
        let docs = collect_docs(temp_dir.path(), &config).unwrap();
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| d.section != "drafts"));
    }

    #[test]
    fn test_collect_docs_skips_report_inside_docs() {
        let temp_dir = setup_docs();
        fs::write(temp_dir.path().join("docs/docs_health_report.md"), "report").unwrap();
        let config = DocsConfig {
            report_file: "docs/docs_health_report.md".into(),
            ..Default::default()
        };
        let docs = collect_docs(temp_dir.path(), &config).unwrap();
        assert!(docs.iter().all(|d| !d.display.ends_with("docs_health_report.md")));
    }

    #[test]
    fn test_collect_docs_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        assert!(collect_docs(temp_dir.path(), &DocsConfig::default()).is_err());
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let temp_dir = setup_docs();
        let config = DocsConfig {
            exclude: vec!["[".to_string()],
            ..Default::default()
        };
        assert!(collect_docs(temp_dir.path(), &config).is_err());
    }
}

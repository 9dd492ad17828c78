//! Version service - group pages by declared version and publish the version region

use crate::models::{DocFile, DocsConfig, VersionIndex};
use crate::parser::frontmatter::read_front_matter;
use crate::report::{render_versions, ReportFile};
use crate::services::discovery_service::collect_docs;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Declared version of a document.
///
/// Missing front matter, a missing key, or a blank value all mean "no version".
pub fn index_version(content: &str, key: &str) -> Option<String> {
    let front_matter = read_front_matter(content)?;
    let version = front_matter.get(key)?.trim();
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}

/// Read every page and bucket it by version.
///
/// Pages that cannot be read as UTF-8 text are reported and left out.
pub fn build_version_index(docs: &[DocFile], key: &str) -> Result<VersionIndex> {
    let mut index = VersionIndex::new();
    for doc in docs {
        let content = match std::fs::read_to_string(&doc.path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("⚠️  Skipping unreadable page {}: {}", doc.display, e).yellow()
                );
                continue;
            }
        };
        index.insert(doc.clone(), index_version(&content, key));
    }
    Ok(index)
}

/// Scan the docs tree, merge the version region into the report file and
/// return the index.
pub fn generate_version_report(project_root: &Path, config: &DocsConfig) -> Result<VersionIndex> {
    let docs = collect_docs(project_root, config)?;
    let index = build_version_index(&docs, &config.version_key)?;

    let region = render_versions(&index);
    ReportFile::new(config.report_path(project_root)).update(&region)?;

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_index_version() {
        assert_eq!(index_version("---\nversion:  1.2 \n---\n", "version"), Some("1.2".to_string()));
        assert_eq!(index_version("---\ntitle: X\n---\n", "version"), None);
        assert_eq!(index_version("# No front matter", "version"), None);
        assert_eq!(index_version("---\nversion: 1.0\nunclosed", "version"), None);
        assert_eq!(index_version("---\nversion:\n---\n", "version"), None);
    }

    #[test]
    fn test_index_version_needs_exact_key() {
        assert_eq!(index_version("---\nmin_version: 3\n---\n", "version"), None);
        assert_eq!(index_version("---\nrelease: 3\n---\n", "release"), Some("3".to_string()));
    }

    #[test]
    fn test_build_version_index_buckets() {
        let temp_dir = TempDir::new().unwrap();
        let docs_root = temp_dir.path().join("docs");
        fs::create_dir_all(&docs_root).unwrap();

        let mut docs = Vec::new();
        for (name, content) in [
            ("a.md", "---\nversion: 1.0\n---\n# A"),
            ("b.md", "---\nversion: 1.0\n---\n# B"),
            ("c.md", "# C"),
        ] {
            let path = docs_root.join(name);
            fs::write(&path, content).unwrap();
            docs.push(DocFile::new(temp_dir.path(), &docs_root, &path));
        }

        let index = build_version_index(&docs, "version").unwrap();
        assert_eq!(index.bucket("1.0").unwrap().len(), 2);
        assert_eq!(index.unversioned.len(), 1);
        assert_eq!(index.unversioned[0].display, "docs/c.md");
    }

    #[test]
    fn test_generate_version_report_skips_non_utf8_page() {
        let temp_dir = TempDir::new().unwrap();
        let docs_root = temp_dir.path().join("docs");
        fs::create_dir_all(&docs_root).unwrap();
        fs::write(docs_root.join("a.md"), "---\nversion: 2.0\n---\n# A").unwrap();
        fs::write(docs_root.join("b.md"), [0xff, 0xfe, b'x']).unwrap();

        let config = DocsConfig::default();
        let index = generate_version_report(temp_dir.path(), &config).unwrap();
        assert_eq!(index.total(), 1);
        assert_eq!(index.bucket("2.0").unwrap()[0].display, "docs/a.md");

        let report = fs::read_to_string(config.report_path(temp_dir.path())).unwrap();
        assert!(report.contains("a.html"));
        assert!(!report.contains("b.html"));
    }
}

//! Pages grouped by declared version

use std::collections::BTreeMap;

use super::document::DocFile;

/// Version buckets built during a version run.
///
/// Buckets iterate in sorted version order; paths inside a bucket keep
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionIndex {
    pub buckets: BTreeMap<String, Vec<DocFile>>,
    pub unversioned: Vec<DocFile>,
}

impl VersionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page under `version`, or in the no-version bucket
    pub fn insert(&mut self, doc: DocFile, version: Option<String>) {
        match version {
            Some(version) => self.buckets.entry(version).or_default().push(doc),
            None => self.unversioned.push(doc),
        }
    }

    pub fn bucket(&self, version: &str) -> Option<&[DocFile]> {
        self.buckets.get(version).map(Vec::as_slice)
    }

    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum::<usize>() + self.unversioned.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn doc(name: &str) -> DocFile {
        DocFile::new(
            Path::new("/p"),
            Path::new("/p/docs"),
            &Path::new("/p/docs").join(name),
        )
    }

    #[test]
    fn test_insert_keeps_order_within_bucket() {
        let mut index = VersionIndex::new();
        index.insert(doc("b.md"), Some("1.0".to_string()));
        index.insert(doc("a.md"), Some("1.0".to_string()));
        index.insert(doc("c.md"), None);

        let names: Vec<_> = index
            .bucket("1.0")
            .unwrap()
            .iter()
            .map(|d| d.display.as_str())
            .collect();
        assert_eq!(names, vec!["docs/b.md", "docs/a.md"]);
        assert_eq!(index.unversioned.len(), 1);
        assert_eq!(index.total(), 3);
    }

    #[test]
    fn test_buckets_sorted_by_version() {
        let mut index = VersionIndex::new();
        index.insert(doc("x.md"), Some("2.0".to_string()));
        index.insert(doc("y.md"), Some("1.0".to_string()));
        let keys: Vec<_> = index.buckets.keys().cloned().collect();
        assert_eq!(keys, vec!["1.0".to_string(), "2.0".to_string()]);
    }
}

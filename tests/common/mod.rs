#![allow(dead_code)]

use chrono::{DateTime, Utc};
use git2::{Repository, Signature, Time};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project directory with a `docs/` tree inside a fresh git repository
pub struct DocsRepo {
    _tmp: TempDir,
    pub root: PathBuf,
    pub repo: Repository,
}

impl DocsRepo {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().canonicalize().expect("canonical temp dir");
        fs::create_dir_all(root.join("docs")).expect("create docs dir");
        let repo = Repository::init(&root).expect("init repository");

        Self {
            _tmp: tmp,
            root,
            repo,
        }
    }

    /// Write a file relative to the project root without committing it
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(path.parent().expect("parent dir")).expect("create parent");
        fs::write(&path, content).expect("write file");
        path
    }

    /// Write and commit a file with an explicit commit time
    pub fn commit(&self, rel: &str, content: &str, at: DateTime<Utc>) -> PathBuf {
        let path = self.write(rel, content);

        let mut index = self.repo.index().expect("open index");
        index.add_path(Path::new(rel)).expect("stage file");
        index.write().expect("write index");
        let tree_id = index.write_tree().expect("write tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");

        let sig = Signature::new("Docs Bot", "docs@example.com", &Time::new(at.timestamp(), 0))
            .expect("signature");
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, &format!("Update {}", rel), &tree, &parents)
            .expect("commit");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read file")
    }
}

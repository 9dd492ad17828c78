use chrono::{DateTime, TimeZone, Utc};
use git2::{Delta, DiffOptions, ErrorCode, Repository, Sort};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{TimestampError, TimestampSource};

/// Last commit time of every path in a repository, indexed once
#[derive(Debug, Clone)]
pub struct GitHistory {
    workdir: PathBuf,
    last_commit: HashMap<PathBuf, DateTime<Utc>>,
}

impl GitHistory {
    /// Open the repository containing `scope` and index the history of
    /// every path under it.
    ///
    /// `scope` should be absolute; the index is keyed by paths relative to
    /// the repository working tree, never the process working directory.
    pub fn discover(scope: &Path) -> Result<Self, TimestampError> {
        let repo = Repository::discover(scope).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                TimestampError::NoRepository(scope.to_path_buf())
            } else {
                TimestampError::Git(e)
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| TimestampError::NoRepository(scope.to_path_buf()))?;
        let workdir = canonical(workdir);

        let pathspec = canonical(scope)
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| TimestampError::OutsideRepository(scope.to_path_buf()))?;

        let last_commit = index_commits(&repo, &pathspec)?;

        Ok(Self {
            workdir,
            last_commit,
        })
    }

    /// A history with no commits; every lookup reports `NotTracked`
    pub fn empty(workdir: &Path) -> Self {
        Self {
            workdir: canonical(workdir),
            last_commit: HashMap::new(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Number of paths with at least one commit
    pub fn len(&self) -> usize {
        self.last_commit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_commit.is_empty()
    }
}

impl TimestampSource for GitHistory {
    fn last_modified(&self, path: &Path) -> Result<DateTime<Utc>, TimestampError> {
        let absolute = canonical(path);
        let relative = absolute
            .strip_prefix(&self.workdir)
            .map_err(|_| TimestampError::OutsideRepository(path.to_path_buf()))?;

        self.last_commit
            .get(relative)
            .copied()
            .ok_or_else(|| TimestampError::NotTracked(path.to_path_buf()))
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Walk every commit reachable from HEAD and keep, per path, the newest
/// commit time that added or modified it. Merge commits are skipped; the
/// change they bring in is visible on the side branch itself.
fn index_commits(
    repo: &Repository,
    pathspec: &Path,
) -> Result<HashMap<PathBuf, DateTime<Utc>>, git2::Error> {
    let mut last_commit: HashMap<PathBuf, DateTime<Utc>> = HashMap::new();

    match repo.head() {
        Ok(_) => {}
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(last_commit);
        }
        Err(e) => return Err(e),
    }

    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TIME)?;
    revwalk.push_head()?;

    for oid in revwalk {
        let commit = repo.find_commit(oid?)?;
        if commit.parent_count() > 1 {
            continue;
        }

        let Some(time) = Utc.timestamp_opt(commit.time().seconds(), 0).single() else {
            continue;
        };

        let tree = commit.tree()?;
        let parent_tree = match commit.parent_count() {
            0 => None,
            _ => Some(commit.parent(0)?.tree()?),
        };

        let mut opts = DiffOptions::new();
        if !pathspec.as_os_str().is_empty() {
            opts.pathspec(pathspec);
        }
        let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;

        for delta in diff.deltas() {
            if delta.status() == Delta::Deleted {
                continue;
            }
            let Some(path) = delta.new_file().path() else {
                continue;
            };
            last_commit
                .entry(path.to_path_buf())
                .and_modify(|seen| {
                    if time > *seen {
                        *seen = time;
                    }
                })
                .or_insert(time);
        }
    }

    Ok(last_commit)
}

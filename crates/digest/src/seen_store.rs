//! Flat-file store of posting ids already included in a past digest.
//!
//! One id per line, read wholesale at the start of a run and written
//! wholesale at the end. The file grows monotonically; there is no
//! pruning. Concurrent runs are not guarded against.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

/// Errors from seen-set persistence. A write failure must fail the run
/// loudly — losing the dedup record silently would re-email every
/// posting forever.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Filesystem-backed seen-set.
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the full seen-set. A missing file is an empty set, not an
    /// error — the first run starts from nothing.
    pub fn load(&self) -> Result<HashSet<String>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no seen file yet, starting empty");
            return Ok(HashSet::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let seen: HashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        debug!(path = %self.path.display(), ids = seen.len(), "seen set loaded");
        Ok(seen)
    }

    /// Durably replace the file with the updated set: write a sibling
    /// temp file, then rename over the target. Ids are written sorted so
    /// the file diffs cleanly between runs.
    pub fn persist(&self, seen: &HashSet<String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut ids: Vec<&str> = seen.iter().map(String::as_str).collect();
        ids.sort_unstable();

        let mut contents = String::with_capacity(ids.iter().map(|i| i.len() + 1).sum());
        for id in &ids {
            contents.push_str(id);
            contents.push('\n');
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;

        info!(path = %self.path.display(), ids = ids.len(), "seen set persisted");
        Ok(())
    }
}

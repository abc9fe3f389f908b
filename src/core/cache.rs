//! Day-keyed file cache for raw provider responses
//!
//! Entries are written once and never overwritten. Reading on a miss calls
//! the supplied fetch function but does not persist its result; callers
//! validate the bytes first and then call [`DayCache::write`].

use crate::core::error::{CurryError, Result};
use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct DayCache {
    root: PathBuf,
}

impl DayCache {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the entry for `key`, whether or not it exists.
    pub fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{EXTENSION}"))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.path(key).exists()
    }

    pub async fn read_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<Vec<u8>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>>>,
    {
        let path = self.path(key);
        if !path.exists() {
            debug!("Cache MISS for key: {}", key);
            return fetch().await;
        }

        debug!("Cache HIT for key: {}", key);
        fs::read(&path).map_err(|e| CurryError::io(path, e))
    }

    pub fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        if path.exists() {
            debug!("Cache entry already present for key: {}", key);
            return Ok(());
        }

        fs::create_dir_all(&self.root).map_err(|e| CurryError::io(&self.root, e))?;
        fs::write(&path, bytes).map_err(|e| CurryError::io(&path, e))?;
        debug!("Cache PUT for key: {} ({} bytes)", key, bytes.len());
        Ok(())
    }

    /// Removes the entry for `key`. Returns false when there was nothing to remove.
    pub fn delete(&self, key: &str) -> bool {
        let path = self.path(key);
        if !path.exists() {
            return false;
        }
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Cache entry removed for key: {}", key);
                true
            }
            Err(e) => {
                warn!("Failed to remove cache entry {}: {}", path.display(), e);
                false
            }
        }
    }
}

//! Persistence of the memoization cache between runs.
//!
//! The cache is written as a versioned `bincode` blob. Readers treat any
//! failure as a cold start; see [`crate::ProbabilityAggregator::load_cache`].

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::oracle::MemoCache;

/// Format version written into every cache file.
pub const CACHE_FORMAT_VERSION: u32 = 1;

/// Cache persistence error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache encoding error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("Cache format version {found} is not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },
}

/// Loads and saves a [`MemoCache`].
pub trait CacheStore {
    /// Reads a previously saved cache.
    fn load(&self) -> Result<MemoCache, StoreError>;

    /// Replaces the stored cache with `cache`.
    fn save(&self, cache: &MemoCache) -> Result<(), StoreError>;

    /// Human-readable location for log output.
    fn location(&self) -> String;
}

#[derive(Serialize)]
struct CacheFileRef<'a> {
    version: u32,
    cache: &'a MemoCache,
}

#[derive(Deserialize)]
struct CacheFile {
    version: u32,
    cache: MemoCache,
}

/// Cache stored in a single file.
///
/// Saves go to a sibling temporary file first and are renamed into place,
/// so an interrupted save leaves the previous file intact.
///
/// # Example
///
/// ```
/// use matchdraw_solver::{CacheStore, FileCacheStore, MemoCache};
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = FileCacheStore::new(dir.path().join("cache.bin"));
///
/// store.save(&MemoCache::new()).unwrap();
/// assert!(store.load().unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    path: PathBuf,
}

impl FileCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CacheStore for FileCacheStore {
    fn load(&self) -> Result<MemoCache, StoreError> {
        let reader = BufReader::new(File::open(&self.path)?);
        let file: CacheFile = bincode::deserialize_from(reader)?;
        if file.version != CACHE_FORMAT_VERSION {
            return Err(StoreError::VersionMismatch {
                found: file.version,
                expected: CACHE_FORMAT_VERSION,
            });
        }
        Ok(file.cache)
    }

    fn save(&self, cache: &MemoCache) -> Result<(), StoreError> {
        let temp = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&temp)?);
            bincode::serialize_into(
                &mut writer,
                &CacheFileRef {
                    version: CACHE_FORMAT_VERSION,
                    cache,
                },
            )?;
            writer.flush()?;
        }
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

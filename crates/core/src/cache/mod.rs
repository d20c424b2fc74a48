//! Filesystem-backed cache for search responses and page text.
//!
//! Two independent stores live under one root directory:
//!
//! - `searches/` - raw search response bodies, keyed by a slug of the
//!   canonicalized query
//! - `pages/` - normalized extracted text, keyed by a SHA-256 digest of
//!   the canonicalized URL
//!
//! Entries never expire and carry no version; last write wins. Missing or
//! unreadable files are reported as a miss, never as an error, so a
//! corrupt entry silently falls through to a live call. There is no
//! locking; concurrent runs sharing a cache directory are not a supported
//! mode.

pub mod keys;

use std::path::{Path, PathBuf};

use crate::Error;

pub use keys::{page_key, query_key, query_params_key};

const SEARCH_DIR: &str = "searches";
const PAGE_DIR: &str = "pages";

/// Handle to the two on-disk stores.
///
/// When constructed with caching disabled, every read misses and every
/// write is a no-op, so all calls go live.
#[derive(Debug, Clone)]
pub struct DiskCache {
    root: PathBuf,
    enabled: bool,
}

impl DiskCache {
    /// Open a cache rooted at `root`, creating both store directories
    /// when caching is enabled.
    pub async fn open(root: impl AsRef<Path>, enabled: bool) -> Result<Self, Error> {
        let root = root.as_ref().to_path_buf();
        if enabled {
            tokio::fs::create_dir_all(root.join(SEARCH_DIR)).await?;
            tokio::fs::create_dir_all(root.join(PAGE_DIR)).await?;
        }
        Ok(Self { root, enabled })
    }

    /// Open a cache with all reads and writes disabled.
    pub fn disabled() -> Self {
        Self { root: PathBuf::new(), enabled: false }
    }

    /// Whether reads and writes hit the disk at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Read a cached search response body.
    pub async fn get_search(&self, key: &str) -> Option<String> {
        self.read_or_miss(self.root.join(SEARCH_DIR).join(format!("{key}.json"))).await
    }

    /// Write a search response body, overwriting any existing entry.
    pub async fn put_search(&self, key: &str, body: &str) -> Result<(), Error> {
        self.write(self.root.join(SEARCH_DIR).join(format!("{key}.json")), body).await
    }

    /// Read cached extracted text for a page.
    pub async fn get_page(&self, key: &str) -> Option<String> {
        self.read_or_miss(self.root.join(PAGE_DIR).join(format!("{key}.txt"))).await
    }

    /// Write extracted text for a page, overwriting any existing entry.
    pub async fn put_page(&self, key: &str, text: &str) -> Result<(), Error> {
        self.write(self.root.join(PAGE_DIR).join(format!("{key}.txt")), text).await
    }

    /// Read an entry, downgrading every failure to a silent miss.
    async fn read_or_miss(&self, path: PathBuf) -> Option<String> {
        match self.read(path).await {
            Ok(contents) => Some(contents),
            Err(e) => {
                // Absent and unreadable entries both fall through to a
                // live call; only the log tells them apart.
                tracing::debug!("cache fall-through: {}", e);
                None
            }
        }
    }

    async fn read(&self, path: PathBuf) -> Result<String, Error> {
        if !self.enabled {
            return Err(Error::CacheMiss("caching disabled".to_string()));
        }
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                tracing::debug!("cache hit: {}", path.display());
                Ok(contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::CacheMiss(path.display().to_string()))
            }
            Err(e) => Err(Error::Cache(e)),
        }
    }

    async fn write(&self, path: PathBuf, contents: &str) -> Result<(), Error> {
        if !self.enabled {
            return Ok(());
        }
        tokio::fs::write(&path, contents).await?;
        tracing::debug!("cache write: {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

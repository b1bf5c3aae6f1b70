use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// A single cached resource: the raw body text plus the metadata needed to
/// enumerate and age entries. The loader treats the body as opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedEntry {
    pub url: String,
    pub stored_at: DateTime<Utc>,
    pub content_type: Option<String>,
    pub body: String,
}

impl CachedEntry {
    pub fn new(url: &str, content_type: Option<String>, body: String) -> Self {
        Self {
            url: url.to_string(),
            stored_at: Utc::now(),
            content_type,
            body,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.body.len()
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.stored_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

/// A named, durable, URL-keyed store of resource bodies.
///
/// Entries live as JSON envelope files in a directory under the cache root,
/// one file per URL. The file name is the SHA-256 of the URL so that any URL
/// is a valid key; the envelope records the URL itself, which is what makes
/// key enumeration (and therefore pruning) possible.
///
/// Concurrent processes sharing a region get last-write-wins semantics on
/// entries with no locking. Entries are immutable by URL - new library
/// versions arrive under new content-hashed URLs, not as rewrites.
pub struct CacheRegion {
    dir: PathBuf,
}

impl CacheRegion {
    /// Open a region by name under the given cache root, creating it if absent
    pub fn open(cache_root: &std::path::Path, name: &str) -> Result<Self> {
        let dir = cache_root.join(name);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache region directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        self.dir.join(format!("{}.json", hex::encode(digest)))
    }

    /// Look up the entry for a URL, if one is stored
    pub fn lookup(&self, url: &str) -> Result<Option<CachedEntry>> {
        let path = self.entry_path(url);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache entry for {}", url))?;

        let entry: CachedEntry = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache entry for {}", url))?;

        Ok(Some(entry))
    }

    /// Store a resource body under its URL, overwriting any previous entry
    pub fn store(&self, url: &str, content_type: Option<String>, body: String) -> Result<()> {
        let entry = CachedEntry::new(url, content_type, body);
        let contents = serde_json::to_string(&entry)?;
        fs::write(self.entry_path(url), contents)
            .with_context(|| format!("Failed to write cache entry for {}", url))?;
        Ok(())
    }

    /// Remove the entry for a URL. Removing an absent entry is not an error.
    pub fn remove(&self, url: &str) -> Result<()> {
        let path = self.entry_path(url);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove cache entry for {}", url))?;
        }
        Ok(())
    }

    /// Every entry currently in the region. Unreadable entry files are
    /// skipped with a log line rather than failing the listing.
    pub fn entries(&self) -> Result<Vec<CachedEntry>> {
        let mut entries = Vec::new();

        for item in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to list cache region: {}", self.dir.display()))?
        {
            let path = item?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            match fs::read_to_string(&path).map_err(anyhow::Error::from).and_then(|contents| {
                serde_json::from_str::<CachedEntry>(&contents).map_err(anyhow::Error::from)
            }) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Skipping unreadable cache entry");
                }
            }
        }

        Ok(entries)
    }

    /// URLs of every entry currently in the region
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries()?.into_iter().map(|entry| entry.url).collect())
    }

    /// Delete every entry whose URL is not in the retain set.
    ///
    /// This clears out resources left over from a previous deployed version,
    /// e.g. a content-hashed filename that changed. Never fails the caller:
    /// a failed prune only wastes storage, it does not corrupt state.
    /// Idempotent - a second pass with the same retain set deletes nothing.
    pub fn prune(&self, keep_urls: &[&str]) {
        let keys = match self.keys() {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "Failed to enumerate cache region for pruning");
                return;
            }
        };

        for url in keys {
            if keep_urls.contains(&url.as_str()) {
                continue;
            }
            match self.remove(&url) {
                Ok(()) => debug!(url = %url, "Pruned stale cache entry"),
                Err(e) => warn!(url = %url, error = %e, "Failed to prune cache entry"),
            }
        }
    }

    /// Delete every entry in the region. Debug tooling.
    pub fn purge(&self) -> Result<()> {
        for url in self.keys()? {
            self.remove(&url)?;
        }
        Ok(())
    }
}

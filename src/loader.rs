//! Two-tier loader for the icon library documents.
//!
//! The library ships as two JSON documents: the icon table (large, icon
//! name -> rendering metadata) and the category table (small, category
//! name -> display metadata and members). Both must be present for the
//! application to index icons by category, so partial availability is
//! treated as total failure.
//!
//! A loader built with a `CacheRegion` serves from the durable cache and
//! only touches the network on a miss; one built without falls back to
//! plain fetches and whatever caching the transport provides.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::ResourceClient;
use crate::cache::{CacheRegion, ICONS_LIBRARY_REGION};
use crate::config::Config;
use crate::library::IconLibrary;
use crate::models::{CategoryTable, IconTable};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    #[error("icon table could not be loaded")]
    IconsUnavailable,

    #[error("category table could not be loaded")]
    CategoriesUnavailable,

    #[error("icon and category tables could not be loaded")]
    BothUnavailable,
}

pub struct IconLibraryLoader {
    client: ResourceClient,
    icons_url: String,
    categories_url: String,
    /// Some = durable-cache path, None = plain-fetch fallback.
    /// Decided once at construction, never re-probed mid-flight.
    region: Option<CacheRegion>,
}

impl IconLibraryLoader {
    pub fn new(
        client: ResourceClient,
        icons_url: impl Into<String>,
        categories_url: impl Into<String>,
        region: Option<CacheRegion>,
    ) -> Self {
        Self {
            client,
            icons_url: icons_url.into(),
            categories_url: categories_url.into(),
            region,
        }
    }

    /// Build a loader from the application config, opening the durable
    /// region unless the config disables it
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let icons_url = config
            .icons_url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No icons URL configured"))?;
        let categories_url = config
            .categories_url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No categories URL configured"))?;

        let region = if config.durable_cache {
            Some(CacheRegion::open(&config.cache_dir()?, ICONS_LIBRARY_REGION)?)
        } else {
            None
        };

        Ok(Self::new(ResourceClient::new()?, icons_url, categories_url, region))
    }

    /// Load both tables, preferring the durable cache when one is attached.
    ///
    /// Re-invoking runs the full algorithm from scratch; there is no
    /// partial-refresh path.
    pub async fn load(&self) -> Result<IconLibrary, LoadError> {
        // The two resolutions are independent; only the prune pass below
        // needs both to have finished.
        let (icons, categories) = tokio::join!(
            self.resolve::<IconTable>(&self.icons_url),
            self.resolve::<CategoryTable>(&self.categories_url),
        );

        if let Some(region) = &self.region {
            // Runs even when a resolution failed: the retain set is always
            // exactly the two tracked URLs, so nothing current is lost and
            // prior-version leftovers still get cleared.
            region.prune(&[&self.icons_url, &self.categories_url]);
        }

        match (icons, categories) {
            (Some(icons), Some(categories)) => {
                info!(
                    icons = icons.len(),
                    categories = categories.len(),
                    "Icon library loaded"
                );
                Ok(IconLibrary::new(icons, categories))
            }
            (None, Some(_)) => Err(LoadError::IconsUnavailable),
            (Some(_), None) => Err(LoadError::CategoriesUnavailable),
            (None, None) => Err(LoadError::BothUnavailable),
        }
    }

    async fn resolve<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match &self.region {
            Some(region) => self.resolve_durable(region, url).await,
            None => self.resolve_network(url).await,
        }
    }

    /// Durable path: cache lookup first; on a miss fetch, persist, then re-read
    /// from the cache. The read-after-write means a failed persist shows up
    /// as a miss instead of being papered over by the in-flight response.
    async fn resolve_durable<T: DeserializeOwned>(&self, region: &CacheRegion, url: &str) -> Option<T> {
        match region.lookup(url) {
            Ok(Some(entry)) => {
                return match serde_json::from_str(&entry.body) {
                    Ok(value) => {
                        debug!(url = url, "Cache hit");
                        Some(value)
                    }
                    Err(e) => {
                        warn!(url = url, error = %e, "Cached resource is not valid JSON");
                        None
                    }
                };
            }
            Ok(None) => debug!(url = url, "Cache miss"),
            Err(e) => warn!(url = url, error = %e, "Cache lookup failed"),
        }

        let fetched = match self.client.fetch(url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!(url = url, error = %e, "Fetch failed");
                return None;
            }
        };

        if let Err(e) = region.store(url, fetched.content_type, fetched.body) {
            // Quota or permission trouble. Stay on the durable path and
            // report this resource unresolved for the attempt.
            warn!(url = url, error = %e, "Failed to persist resource to cache");
            return None;
        }

        let entry = match region.lookup(url) {
            Ok(Some(entry)) => entry,
            Ok(None) | Err(_) => {
                warn!(url = url, "Resource missing from cache after write");
                return None;
            }
        };

        match serde_json::from_str(&entry.body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(url = url, error = %e, "Fetched resource is not valid JSON");
                None
            }
        }
    }

    /// Fallback path: plain fetch, no persistence
    async fn resolve_network<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let fetched = match self.client.fetch(url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!(url = url, error = %e, "Fetch failed");
                return None;
            }
        };

        match serde_json::from_str(&fetched.body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(url = url, error = %e, "Fetched resource is not valid JSON");
                None
            }
        }
    }
}

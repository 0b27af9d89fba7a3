use std::time::Duration;

use query_cache::{FetchError, QueryCache};
use remote_store::{RemoteStore, StoreError};

use crate::config::AppConfig;
use crate::error::AppError;

/// Cache entity tags. Writes invalidate by these, coarsely: changing any
/// gallery item drops every cached gallery read, never individual rows.
pub mod entity {
    pub const GALLERY: &str = "gallery";
    pub const GALLERY_CATEGORIES: &str = "gallery-categories";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const INQUIRIES: &str = "inquiries";
    pub const EVENT_TYPES: &str = "event-types";
    pub const SITE_CONTENT: &str = "site-content";
    pub const PROFILES: &str = "profiles";
    pub const STATS: &str = "stats";
}

/// Cached reads are considered fresh this long before a re-fetch.
const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// The data-access container handed to every screen: remote store client
/// plus the shared query cache. Injected via context, never a global.
#[derive(Clone)]
pub struct DataLayer {
    pub store: RemoteStore,
    pub cache: QueryCache,
}

impl DataLayer {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let store = RemoteStore::new(&config.store_url, &config.store_anon_key)?;
        Ok(Self {
            store,
            cache: QueryCache::new(CACHE_TTL),
        })
    }
}

/// Maps a store failure into the cache's transportable error, keeping the
/// underlying message.
pub(crate) fn remote(e: StoreError) -> FetchError {
    FetchError::Remote(e.to_string())
}

//! Client-side cache for remote query results.
//!
//! Every read is keyed by `(entity, params)`. A cached value is considered
//! fresh for a fixed interval; after that the next caller re-fetches.
//! Identical concurrent requests for the same key are deduplicated into a
//! single in-flight request, and writes invalidate coarsely by entity tag.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::watch;
use tokio::time::Instant;

/// Cache key: entity tag plus the stringified filter parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub entity: &'static str,
    pub params: String,
}

impl QueryKey {
    pub fn new(entity: &'static str, params: impl Into<String>) -> Self {
        Self {
            entity,
            params: params.into(),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.entity, self.params)
    }
}

/// Error produced while loading a query result.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The remote store rejected the request; carries the underlying message.
    Remote(String),
    /// The result could not be (de)serialized for the cache.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Remote(msg) => write!(f, "remote query failed: {}", msg),
            FetchError::Decode(msg) => write!(f, "could not decode query result: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

type InFlightResult = Option<Result<Value, FetchError>>;

struct CachedValue {
    value: Value,
    fetched_at: Instant,
}

/// An in-flight fetch. The token identifies this particular fetch: after an
/// invalidation a new fetch for the same key gets a new token, and the old
/// fetch must neither cache its result nor touch the new marker.
struct InFlight {
    token: u64,
    rx: watch::Receiver<InFlightResult>,
}

#[derive(Default)]
struct Inner {
    ready: HashMap<QueryKey, CachedValue>,
    in_flight: HashMap<QueryKey, InFlight>,
    next_token: u64,
}

impl Inner {
    fn owns(&self, key: &QueryKey, token: u64) -> bool {
        self.in_flight.get(key).is_some_and(|f| f.token == token)
    }
}

/// Shared query cache. Cloning is cheap; all clones see the same entries.
#[derive(Clone)]
pub struct QueryCache {
    ttl: Duration,
    inner: Arc<Mutex<Inner>>,
}

enum Plan {
    Hit(Value),
    Wait(u64, watch::Receiver<InFlightResult>),
    Fetch(u64, watch::Sender<InFlightResult>),
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Returns the cached value for `key` if it is still fresh, otherwise
    /// runs `fetch` and caches its result. Concurrent callers for the same
    /// key share one fetch. A failed fetch is never cached; a stale value
    /// that was present before the failure is left untouched.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, FetchError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let plan = {
            let mut inner = self.inner.lock().expect("query cache lock poisoned");
            if let Some(in_flight) = inner.in_flight.get(&key) {
                Plan::Wait(in_flight.token, in_flight.rx.clone())
            } else {
                match inner.ready.get(&key) {
                    Some(cached) if cached.fetched_at.elapsed() < self.ttl => {
                        Plan::Hit(cached.value.clone())
                    }
                    _ => {
                        let (tx, rx) = watch::channel(None);
                        let token = inner.next_token;
                        inner.next_token += 1;
                        inner.in_flight.insert(key.clone(), InFlight { token, rx });
                        Plan::Fetch(token, tx)
                    }
                }
            }
        };

        match plan {
            Plan::Hit(value) => decode(value),
            Plan::Wait(token, mut rx) => {
                loop {
                    let settled = rx.borrow_and_update().clone();
                    if let Some(result) = settled {
                        return result.and_then(decode);
                    }
                    if rx.changed().await.is_err() {
                        // The fetching future was cancelled before settling.
                        // Drop the marker so the next caller starts over, but
                        // only if it is still ours and not a successor's.
                        let mut inner = self.inner.lock().expect("query cache lock poisoned");
                        if inner.owns(&key, token) {
                            inner.in_flight.remove(&key);
                        }
                        return Err(FetchError::Remote("in-flight request was dropped".into()));
                    }
                }
            }
            Plan::Fetch(token, tx) => {
                log::debug!("cache miss for {}", key);
                let outcome = match fetch().await {
                    Ok(value) => serde_json::to_value(&value)
                        .map_err(|e| FetchError::Decode(e.to_string())),
                    Err(e) => Err(e),
                };
                {
                    let mut inner = self.inner.lock().expect("query cache lock poisoned");
                    // Our marker is gone if the entity was invalidated while
                    // the fetch ran, and it may already belong to a newer
                    // fetch started after that invalidation. Either way this
                    // result is pre-invalidation and must not be cached.
                    if inner.owns(&key, token) {
                        inner.in_flight.remove(&key);
                        if let Ok(value) = &outcome {
                            inner.ready.insert(
                                key.clone(),
                                CachedValue {
                                    value: value.clone(),
                                    fetched_at: Instant::now(),
                                },
                            );
                        }
                    }
                }
                let _ = tx.send(Some(outcome.clone()));
                outcome.and_then(decode)
            }
        }
    }

    /// Drops every entry whose entity tag is listed. Coarse by design:
    /// a write invalidates the whole entity, never individual rows.
    pub fn invalidate(&self, entities: &[&str]) {
        let mut inner = self.inner.lock().expect("query cache lock poisoned");
        inner.ready.retain(|key, _| !entities.contains(&key.entity));
        inner
            .in_flight
            .retain(|key, _| !entities.contains(&key.entity));
        log::debug!("invalidated cache entities {:?}", entities);
    }

    /// Number of cached (ready) entries, for diagnostics.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("query cache lock poisoned").ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn cache() -> QueryCache {
        QueryCache::new(Duration::from_secs(300))
    }

    #[tokio::test]
    async fn fresh_value_is_served_without_refetch() {
        let cache = cache();
        let calls = AtomicUsize::new(0);
        let fetch = || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, FetchError>(vec![1, 2, 3]) }
        };

        let first: Vec<i32> = cache
            .get_or_fetch(QueryKey::new("gallery", "all"), fetch)
            .await
            .unwrap();
        let second: Vec<i32> = cache
            .get_or_fetch(QueryKey::new("gallery", "all"), fetch)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_value_triggers_refetch() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);
        let fetch = || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, FetchError>(7u32) }
        };

        let _: u32 = cache
            .get_or_fetch(QueryKey::new("gallery", "all"), fetch)
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        let _: u32 = cache
            .get_or_fetch(QueryKey::new("gallery", "all"), fetch)
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_requests_share_one_fetch() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));
        let fetch = {
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    Ok::<_, FetchError>("rows".to_string())
                }
            }
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch::<String, _, _>(QueryKey::new("gallery", "all"), fetch.clone()),
            cache.get_or_fetch::<String, _, _>(QueryKey::new("gallery", "all"), fetch.clone()),
        );

        assert_eq!(a.unwrap(), "rows");
        assert_eq!(b.unwrap(), "rows");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidate_only_touches_listed_entities() {
        let cache = cache();
        let gallery_calls = AtomicUsize::new(0);
        let testimonial_calls = AtomicUsize::new(0);

        let _: u8 = cache
            .get_or_fetch(QueryKey::new("gallery", "all"), || {
                gallery_calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(1u8) }
            })
            .await
            .unwrap();
        let _: u8 = cache
            .get_or_fetch(QueryKey::new("testimonials", "approved"), || {
                testimonial_calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(2u8) }
            })
            .await
            .unwrap();

        cache.invalidate(&["gallery"]);

        let _: u8 = cache
            .get_or_fetch(QueryKey::new("gallery", "all"), || {
                gallery_calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(1u8) }
            })
            .await
            .unwrap();
        let _: u8 = cache
            .get_or_fetch(QueryKey::new("testimonials", "approved"), || {
                testimonial_calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(2u8) }
            })
            .await
            .unwrap();

        assert_eq!(gallery_calls.load(Ordering::SeqCst), 2);
        assert_eq!(testimonial_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_overtaken_by_invalidation_does_not_repopulate() {
        let cache = cache();
        let key = || QueryKey::new("gallery", "all");

        // A slow read that is still in flight when a write lands.
        let overtaken = tokio::spawn({
            let cache = cache.clone();
            async move {
                cache
                    .get_or_fetch::<String, _, _>(key(), || async {
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Ok("before write".to_string())
                    })
                    .await
            }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        cache.invalidate(&["gallery"]);

        // A re-read started after the write, finishing after the slow read.
        let fresh: String = cache
            .get_or_fetch(key(), || async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                Ok("after write".to_string())
            })
            .await
            .unwrap();
        assert_eq!(fresh, "after write");
        let _ = overtaken.await;

        // The post-write value stays cached; the pre-write one never lands.
        let served: String = cache
            .get_or_fetch(key(), || async { Ok("refetched".to_string()) })
            .await
            .unwrap();
        assert_eq!(served, "after write");
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let cache = cache();
        let calls = AtomicUsize::new(0);

        let first: Result<u8, _> = cache
            .get_or_fetch(QueryKey::new("inquiries", "all"), || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(FetchError::Remote("boom".into())) }
            })
            .await;
        assert!(first.is_err());
        assert!(cache.is_empty());

        let second: u8 = cache
            .get_or_fetch(QueryKey::new("inquiries", "all"), || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(9u8) }
            })
            .await
            .unwrap();
        assert_eq!(second, 9);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn waiter_observes_the_fetch_error() {
        let cache = cache();
        let fetch = || async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Err::<u8, _>(FetchError::Remote("offline".into()))
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch::<u8, _, _>(QueryKey::new("stats", "dashboard"), fetch),
            cache.get_or_fetch::<u8, _, _>(QueryKey::new("stats", "dashboard"), fetch),
        );

        assert_eq!(a, Err(FetchError::Remote("offline".into())));
        assert_eq!(b, Err(FetchError::Remote("offline".into())));
    }
}

//! Cache-or-fetch loader for route data

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::cache::{Cache, CacheExt, CacheKey};
use crate::domain::DomainError;

/// Memoizes route loads against an injected cache.
///
/// A hit returns the cached value without running the producer or checking
/// freshness. A miss runs the producer, stores the resolved value under the
/// key, and returns it. A failing producer caches nothing and the error
/// propagates to the caller.
///
/// There is no request coalescing: two concurrent misses for the same key
/// both run the producer and both write; the last write wins.
#[derive(Debug, Clone)]
pub struct ListLoader {
    cache: Arc<dyn Cache>,
}

impl ListLoader {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    pub async fn load_or_fetch<T, F, Fut>(
        &self,
        key: &CacheKey,
        producer: F,
    ) -> Result<T, DomainError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let cache_key = key.to_string();

        if let Some(cached) = self.cache.get(&cache_key).await? {
            debug!(key = %cache_key, "Returning cached data");
            return Ok(cached);
        }

        debug!(key = %cache_key, "Cache miss, fetching");
        let value = producer().await?;
        self.cache.set(&cache_key, &value).await?;

        Ok(value)
    }
}

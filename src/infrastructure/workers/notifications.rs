//! Service worker for push notifications and precaching
//!
//! Mirrors a browser service worker lifecycle: push events become
//! notifications, control messages activate the next version or warm the
//! asset cache, and notification clicks resolve to the site root. Asset
//! fetch failures are logged and skipped so one bad URL cannot abort a
//! precache batch.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::PushNotification;
use crate::infrastructure::http::HttpClient;

/// Control messages accepted by the worker
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum WorkerCommand {
    #[serde(rename = "SKIP_WAITING")]
    SkipWaiting,
    #[serde(rename = "CACHE_URLS")]
    CacheUrls { payload: Vec<String> },
}

/// Versioned asset cache warmed by CACHE_URLS commands
#[derive(Debug)]
pub struct AssetCache {
    name: String,
    entries: Mutex<HashMap<String, String>>,
}

impl AssetCache {
    pub fn new(version: impl std::fmt::Display) -> Self {
        Self {
            name: format!("cache-{}", version),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn insert(&self, url: impl Into<String>, body: impl Into<String>) {
        self.entries.lock().await.insert(url.into(), body.into());
    }

    pub async fn get(&self, url: &str) -> Option<String> {
        self.entries.lock().await.get(url).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

/// Push and message handling with a versioned asset cache
#[derive(Debug)]
pub struct ServiceWorker {
    http: Arc<dyn HttpClient>,
    assets: AssetCache,
    origin: String,
    skip_waiting: AtomicBool,
}

impl ServiceWorker {
    pub fn new(
        http: Arc<dyn HttpClient>,
        origin: impl Into<String>,
        asset_version: impl std::fmt::Display,
    ) -> Self {
        Self {
            http,
            assets: AssetCache::new(asset_version),
            origin: origin.into(),
            skip_waiting: AtomicBool::new(false),
        }
    }

    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    /// Whether a SKIP_WAITING command has activated this version
    pub fn is_activated(&self) -> bool {
        self.skip_waiting.load(Ordering::SeqCst)
    }

    /// Handles a push event. An empty payload shows nothing.
    pub fn handle_push(&self, payload: &[u8]) -> Option<PushNotification> {
        if payload.is_empty() {
            debug!("Push event without payload, nothing to show");
            return None;
        }

        let notification = PushNotification::from_payload(payload, &self.origin);
        info!(title = %notification.title, "Showing push notification");

        Some(notification)
    }

    /// Handles a control message. Unknown message shapes are ignored.
    pub async fn handle_message(&self, message: &serde_json::Value) {
        let command = match serde_json::from_value::<WorkerCommand>(message.clone()) {
            Ok(command) => command,
            Err(_) => {
                debug!("Ignoring unrecognized worker message");
                return;
            }
        };

        match command {
            WorkerCommand::SkipWaiting => {
                info!("Activating waiting worker version");
                self.skip_waiting.store(true, Ordering::SeqCst);
            }
            WorkerCommand::CacheUrls { payload } => {
                info!(cache = %self.assets.name(), count = payload.len(), "Precaching assets");
                self.cache_urls(&payload).await;
            }
        }
    }

    /// URL resolved when a shown notification is clicked
    pub fn notification_click_target(&self) -> String {
        format!("{}/", self.origin)
    }

    async fn cache_urls(&self, urls: &[String]) {
        for url in urls {
            let absolute = if url.starts_with("http://") || url.starts_with("https://") {
                url.clone()
            } else {
                format!("{}{}", self.origin, url)
            };

            match self.http.get_text(&absolute).await {
                Ok(body) => self.assets.insert(absolute, body).await,
                Err(e) => {
                    warn!(url = %absolute, error = %e, "Failed to precache asset, skipping");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::mock::MockHttpClient;
    use serde_json::json;

    const ORIGIN: &str = "https://stocknear.com";

    fn worker(http: MockHttpClient) -> ServiceWorker {
        ServiceWorker::new(Arc::new(http), ORIGIN, "v1")
    }

    #[test]
    fn test_empty_push_shows_nothing() {
        let worker = worker(MockHttpClient::new());

        assert!(worker.handle_push(b"").is_none());
    }

    #[test]
    fn test_push_payload_becomes_notification() {
        let worker = worker(MockHttpClient::new());

        let notification = worker
            .handle_push(br#"{"title":"Price alert","body":"AAPL crossed $200"}"#)
            .unwrap();

        assert_eq!(notification.title, "Price alert");
        assert_eq!(notification.body, "AAPL crossed $200");
    }

    #[tokio::test]
    async fn test_skip_waiting_activates() {
        let worker = worker(MockHttpClient::new());
        assert!(!worker.is_activated());

        worker.handle_message(&json!({"type": "SKIP_WAITING"})).await;

        assert!(worker.is_activated());
    }

    #[tokio::test]
    async fn test_cache_urls_warms_the_asset_cache() {
        let http = MockHttpClient::new()
            .with_text("https://stocknear.com/pwa-192x192.png", "png-bytes")
            .with_text("https://stocknear.com/offline.html", "<html></html>");
        let worker = worker(http);

        worker
            .handle_message(&json!({
                "type": "CACHE_URLS",
                "payload": ["/pwa-192x192.png", "/offline.html"],
            }))
            .await;

        assert_eq!(worker.assets().len().await, 2);
        assert_eq!(
            worker
                .assets()
                .get("https://stocknear.com/offline.html")
                .await
                .as_deref(),
            Some("<html></html>")
        );
    }

    #[tokio::test]
    async fn test_failed_asset_is_skipped_not_fatal() {
        let http = MockHttpClient::new()
            .with_text("https://stocknear.com/good.js", "ok")
            .with_upstream_error("https://stocknear.com/missing.js", 404, "not found");
        let worker = worker(http);

        worker
            .handle_message(&json!({
                "type": "CACHE_URLS",
                "payload": ["/good.js", "/missing.js"],
            }))
            .await;

        assert_eq!(worker.assets().len().await, 1);
        assert!(worker.assets().get("https://stocknear.com/missing.js").await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_message_is_ignored() {
        let worker = worker(MockHttpClient::new());

        worker.handle_message(&json!({"type": "SOMETHING_ELSE"})).await;
        worker.handle_message(&json!("not even an object")).await;

        assert!(!worker.is_activated());
        assert!(worker.assets().is_empty().await);
    }

    #[test]
    fn test_cache_name_carries_version() {
        let worker = ServiceWorker::new(Arc::new(MockHttpClient::new()), ORIGIN, "2026-08");

        assert_eq!(worker.assets().name(), "cache-2026-08");
    }

    #[test]
    fn test_click_resolves_to_site_root() {
        let worker = worker(MockHttpClient::new());

        assert_eq!(worker.notification_click_target(), "https://stocknear.com/");
    }
}

//! Message-driven screener worker
//!
//! Receives rule lists over a channel, memoizes raw screener results per
//! serialized rule key for the worker's lifetime, and replies with records
//! filtered of null fields. One fetch is in flight per incoming message;
//! identical concurrent requests are not deduplicated.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::domain::DomainError;
use crate::domain::screener::{filter_complete_records, rule_cache_key};
use crate::infrastructure::upstream::ScreenerFetch;

/// A screener request with a reply channel
#[derive(Debug)]
pub struct ScreenerRequest {
    pub rule_names: Vec<String>,
    pub reply: oneshot::Sender<Result<Vec<Value>, DomainError>>,
}

/// Spawns the screener worker task and returns its request sender.
pub fn spawn_screener_worker(
    fetcher: Arc<dyn ScreenerFetch>,
    buffer: usize,
) -> mpsc::Sender<ScreenerRequest> {
    let (tx, mut rx) = mpsc::channel::<ScreenerRequest>(buffer);

    tokio::spawn(async move {
        // Raw results are cached per rule key; filtering runs on every
        // reply so cached and fresh responses behave identically.
        let mut cache: HashMap<String, Vec<Value>> = HashMap::new();

        while let Some(request) = rx.recv().await {
            let key = rule_cache_key(&request.rule_names);

            let result = match cache.get(&key) {
                Some(records) => {
                    debug!(rules = %key, "Returning cached screener data");
                    Ok(records.clone())
                }
                None => match fetcher.fetch(&request.rule_names).await {
                    Ok(records) => {
                        cache.insert(key, records.clone());
                        Ok(records)
                    }
                    Err(e) => Err(e),
                },
            };

            let filtered = result.map(filter_complete_records);

            if request.reply.send(filtered).is_err() {
                warn!("Screener requester dropped before reply");
            }
        }
    });

    tx
}

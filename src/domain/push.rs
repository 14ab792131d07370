//! Push payload parsing and notification construction

use serde::{Deserialize, Serialize};

/// Title used when the payload does not carry one
pub const DEFAULT_TITLE: &str = "Stocknear";

/// Body used when the payload cannot be read as text
pub const FALLBACK_BODY: &str = "New notification";

const NOTIFICATION_TAG: &str = "stocknear-notification";
const ICON_PATH: &str = "/pwa-192x192.png";
const BADGE_PATH: &str = "/pwa-64x64.png";
const VIBRATION_PATTERN: [u32; 3] = [200, 100, 200];

/// Structured payload shape pushed by the backend
#[derive(Debug, Deserialize)]
struct PushMessage {
    title: Option<String>,
    body: Option<String>,
}

/// A notification ready to display
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PushNotification {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub tag: String,
    pub vibrate: Vec<u32>,
    pub require_interaction: bool,
    pub renotify: bool,
    pub timestamp: i64,
}

impl PushNotification {
    fn new(title: impl Into<String>, body: impl Into<String>, origin: &str) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: format!("{}{}", origin, ICON_PATH),
            badge: format!("{}{}", origin, BADGE_PATH),
            tag: NOTIFICATION_TAG.to_string(),
            vibrate: VIBRATION_PATTERN.to_vec(),
            require_interaction: true,
            renotify: true,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Builds a notification from a raw push payload.
    ///
    /// Fallback chain: a JSON payload with a `title` uses that title and
    /// body; JSON without a title, or any non-JSON text, becomes the body
    /// under the default title; a payload that is not readable text falls
    /// back to a fixed body.
    pub fn from_payload(payload: &[u8], origin: &str) -> Self {
        let text = match std::str::from_utf8(payload) {
            Ok(text) => text,
            Err(_) => return Self::new(DEFAULT_TITLE, FALLBACK_BODY, origin),
        };

        match serde_json::from_str::<PushMessage>(text) {
            Ok(PushMessage {
                title: Some(title),
                body,
            }) => Self::new(title, body.unwrap_or_default(), origin),
            _ => Self::new(DEFAULT_TITLE, text, origin),
        }
    }
}

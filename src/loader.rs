//! Data loader: fetch a replacement item list over HTTP.
//!
//! The loader never touches the store directly. Fetches run on the async
//! runtime and deliver their outcome back to the event loop as an
//! [`AppEvent::LoadFinished`]; only the runtime turns a successful fetch
//! into a `Load` intent. A failed fetch therefore never produces a state
//! transition.

use std::sync::mpsc;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::todo::TodoItem;
use crate::ui::events::AppEvent;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur while fetching or decoding the item feed.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response is not an item list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode a feed body: a JSON array of `{ id, text, done }` records.
pub fn parse_items(body: &str) -> Result<Vec<TodoItem>, LoaderError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch and decode the item feed at `url`.
///
/// Non-2xx responses are errors; the body is only decoded on success.
pub async fn fetch_items(client: &Client, url: &str) -> Result<Vec<TodoItem>, LoaderError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    parse_items(&body)
}

/// Spawns fetches on the async runtime and reports completions to the
/// event loop.
///
/// Each fetch carries the generation number the caller tagged it with;
/// the event loop uses it to drop completions of superseded requests.
pub struct Loader {
    handle: Handle,
    client: Client,
    events: mpsc::Sender<AppEvent>,
}

impl Loader {
    pub fn new(handle: Handle, events: mpsc::Sender<AppEvent>) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to build loader client");

        Self {
            handle,
            client,
            events,
        }
    }

    /// Start a fetch; the result arrives as [`AppEvent::LoadFinished`].
    pub fn fetch(&self, url: String, generation: u64) {
        let client = self.client.clone();
        let events = self.events.clone();
        self.handle.spawn(async move {
            debug!(%url, generation, "fetching items");
            let result = fetch_items(&client, &url).await;
            if let Err(err) = &result {
                warn!(%url, generation, error = %err, "item fetch failed");
            }
            let _ = events.send(AppEvent::LoadFinished { generation, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_an_item_array() {
        let items = parse_items(r#"[{"id":1,"text":"Buy milk","done":false}]"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].text, "Buy milk");
        assert!(!items[0].done);
    }

    #[test]
    fn parse_accepts_an_empty_array() {
        assert!(parse_items("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_non_array_payloads() {
        assert!(matches!(
            parse_items(r#"{"items": []}"#),
            Err(LoaderError::Decode(_))
        ));
    }

    #[test]
    fn parse_rejects_records_missing_fields() {
        assert!(parse_items(r#"[{"id":1}]"#).is_err());
    }
}

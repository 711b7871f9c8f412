//! HTTP client for the USGS GeoJSON summary feeds.

use std::time::Duration;

use quakemap_types::EventRecord;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::wire::{FeatureCollection, FeedMetadata};

/// USGS feed of every earthquake in the past seven days.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// A decoded feed: its metadata block and one record per feature.
#[derive(Debug, Clone, Default)]
pub struct FeedSummary {
    /// Feed metadata, when the body carried one.
    pub metadata: Option<FeedMetadata>,
    /// Event records in feed order.
    pub events: Vec<EventRecord>,
}

/// Client for a single GeoJSON feed URL.
///
/// Each call to [`FeedClient::fetch`] issues exactly one GET with no custom
/// headers. There is no retry: the first failure is returned to the caller.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a client for `url`.
    ///
    /// `timeout` bounds the whole request when set; otherwise the request
    /// waits as long as the transport allows.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| FetchError::Client { source })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The feed URL this client requests.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the feed and return its event records in feed order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn fetch(&self) -> Result<Vec<EventRecord>, FetchError> {
        Ok(self.fetch_summary().await?.events)
    }

    /// Fetch the feed and return its records together with its metadata.
    ///
    /// # Errors
    ///
    /// Same as [`FeedClient::fetch`].
    pub async fn fetch_summary(&self) -> Result<FeedSummary, FetchError> {
        info!(url = %self.url, "fetching earthquake feed");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request { source })?;
        debug!(status = status.as_u16(), bytes = body.len(), "feed body received");

        let summary = parse_feed(&body)?;
        info!(
            events = summary.events.len(),
            title = summary
                .metadata
                .as_ref()
                .and_then(|m| m.title.as_deref())
                .unwrap_or("untitled"),
            "earthquake feed decoded"
        );

        Ok(summary)
    }
}

/// Decode a GeoJSON feed body.
///
/// Produces one [`EventRecord`] per feature, preserving feed order. Field
/// values are passed through as the feed reports them.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not a feature collection
/// or a feature lacks `[longitude, latitude, depth]` coordinates.
pub fn parse_feed(body: &str) -> Result<FeedSummary, FetchError> {
    let collection: FeatureCollection = serde_json::from_str(body)?;
    let events = collection
        .features
        .into_iter()
        .map(EventRecord::from)
        .collect();

    Ok(FeedSummary {
        metadata: collection.metadata,
        events,
    })
}

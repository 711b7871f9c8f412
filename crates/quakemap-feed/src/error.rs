//! Error types for the feed client.
//!
//! Every way a fetch can fail collapses into [`FetchError`]. The caller
//! reports it and stops; there is no retry and no fallback data.

/// Errors that can occur while fetching or decoding the feed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        /// The underlying client builder error.
        source: reqwest::Error,
    },

    /// The request could not be sent or the body could not be read.
    #[error("feed request failed: {source}")]
    Request {
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The feed answered with a non-success status.
    #[error("feed returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder if it could not be read.
        body: String,
    },

    /// The body was not a decodable GeoJSON feature collection.
    #[error("feed body could not be decoded: {source}")]
    Decode {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

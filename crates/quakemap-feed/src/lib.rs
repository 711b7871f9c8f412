//! USGS earthquake feed client.
//!
//! The fetcher is the only stage of the pipeline that touches the network.
//! It issues a single GET against a GeoJSON summary feed, decodes the body
//! and hands back one [`EventRecord`] per feature, in feed order.
//!
//! # Architecture
//!
//! ```text
//! GET feed_url --> status check --> parse_feed --> Vec<EventRecord>
//! ```
//!
//! Decoding is exposed separately as [`parse_feed`] so the transform stages
//! can be exercised against fixture bodies without any network access.
//!
//! [`EventRecord`]: quakemap_types::EventRecord

pub mod client;
pub mod error;
pub mod wire;

pub use client::{DEFAULT_FEED_URL, FeedClient, FeedSummary, parse_feed};
pub use error::FetchError;
pub use wire::{Feature, FeatureCollection, FeedMetadata, Geometry, Properties};

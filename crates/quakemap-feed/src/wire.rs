//! GeoJSON wire format of the USGS summary feeds.
//!
//! Only the fields the renderer needs are modelled; everything else in the
//! body (ids, urls, alert levels, bounding box) is ignored by serde.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use quakemap_types::EventRecord;

/// Top-level GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    /// Feed metadata block, present on USGS feeds.
    #[serde(default)]
    pub metadata: Option<FeedMetadata>,
    /// One feature per earthquake.
    pub features: Vec<Feature>,
}

/// USGS `metadata` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedMetadata {
    /// Generation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub generated: Option<i64>,
    /// Feed title, e.g. `USGS All Earthquakes, Past Week`.
    #[serde(default)]
    pub title: Option<String>,
    /// Number of features the server says it included.
    #[serde(default)]
    pub count: Option<u64>,
}

impl FeedMetadata {
    /// Generation time as a UTC timestamp, if present and in range.
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated.and_then(DateTime::from_timestamp_millis)
    }
}

/// A single GeoJSON feature describing one earthquake.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Event properties.
    pub properties: Properties,
    /// Point geometry of the hypocenter.
    pub geometry: Geometry,
}

/// The subset of feature properties used for styling and popups.
#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    /// Magnitude; `null` on some USGS entries.
    #[serde(default)]
    pub mag: Option<f64>,
    /// Location description; `null` on some USGS entries.
    #[serde(default)]
    pub place: Option<String>,
}

/// Point geometry: `[longitude, latitude, depth]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// Longitude, latitude and depth in kilometers.
    pub coordinates: [f64; 3],
}

impl From<Feature> for EventRecord {
    fn from(feature: Feature) -> Self {
        let [longitude, latitude, depth] = feature.geometry.coordinates;
        Self {
            magnitude: feature.properties.mag,
            longitude,
            latitude,
            depth,
            place: feature.properties.place,
        }
    }
}

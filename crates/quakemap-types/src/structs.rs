//! Core value structs for the Quakemap pipeline.
//!
//! All structs here are created once and never mutated: an [`EventRecord`]
//! is decoded from the feed, a [`Marker`] is derived from it, and the
//! [`LegendEntry`] list is fixed for the lifetime of the process.

use serde::{Deserialize, Serialize};

use crate::enums::DepthColor;

/// One earthquake as reported by the feed.
///
/// `magnitude` and `place` are optional because the USGS feed reports `null`
/// for them on some entries. They are passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event magnitude, when the feed reports one.
    pub magnitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Hypocenter depth in kilometers.
    pub depth: f64,
    /// Human-readable location description.
    pub place: Option<String>,
}

/// A geographic position in Leaflet's `[lat, lng]` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl LatLng {
    /// Create a position from latitude and longitude.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A circle marker ready to be placed on the earthquake overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Center of the circle.
    pub position: LatLng,
    /// Circle radius in meters.
    pub radius: f64,
    /// Fill color chosen from the event depth.
    pub fill_color: DepthColor,
    /// HTML popup bound to the circle.
    pub popup_text: String,
}

/// One row of the depth legend: a color swatch and its range label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Swatch color.
    pub color: DepthColor,
    /// Range label, e.g. `10–20 km` or `40+ km`.
    pub range_label: String,
}

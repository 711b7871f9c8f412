//! Marker builder: one circle marker per earthquake record.

use quakemap_types::{EventRecord, LatLng, Marker};

use crate::depth::color_for_depth;

/// Meters of circle radius per unit of magnitude.
pub const RADIUS_SCALE: f64 = 10_000.0;

/// Rendered in the popup when the feed omitted a value.
const UNKNOWN: &str = "unknown";

/// Circle radius in meters for `magnitude`.
///
/// Linear in magnitude. Negative and non-finite magnitudes yield `0.0`, a
/// circle Leaflet draws as nothing.
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return 0.0;
    }
    magnitude * RADIUS_SCALE
}

/// Popup HTML for an event.
///
/// The place name is escaped; the `<br>` separators are markup.
pub fn popup_text(event: &EventRecord) -> String {
    let magnitude = event
        .magnitude
        .map_or_else(|| UNKNOWN.to_owned(), |m| m.to_string());
    let place = event
        .place
        .as_deref()
        .map_or_else(|| UNKNOWN.to_owned(), escape_html);
    format!(
        "Magnitude: {magnitude}<br>Depth: {} km<br>Location: {place}",
        event.depth
    )
}

/// Build the marker for a single event.
pub fn build_marker(event: &EventRecord) -> Marker {
    Marker {
        position: LatLng::new(event.latitude, event.longitude),
        radius: event.magnitude.map_or(0.0, radius_for_magnitude),
        fill_color: color_for_depth(event.depth),
        popup_text: popup_text(event),
    }
}

/// Build one marker per event, in input order.
pub fn build_markers(events: &[EventRecord]) -> Vec<Marker> {
    events.iter().map(build_marker).collect()
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

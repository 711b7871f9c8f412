//! Map renderer: assembles the map handle and renders it to a page.
//!
//! [`render`] consumes the markers and returns an owned [`MapDocument`]
//! holding everything the page needs: the view, the background tile layer,
//! the earthquake overlay, the layer control and the legend. The document is
//! then turned into a standalone Leaflet page with [`MapDocument::to_html`]
//! or written out with [`MapDocument::mount`].

use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use minijinja::{Environment, context};
use quakemap_types::{LatLng, LegendEntry, Marker};
use serde::Serialize;
use tracing::debug;

use crate::error::RenderError;
use crate::legend::legend_entries;

/// OpenStreetMap tile URL template.
pub const TILE_LAYER_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution shown for the background tiles.
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Initial map center (contiguous United States).
pub const MAP_CENTER: LatLng = LatLng::new(37.09, -95.71);

/// Initial zoom level.
pub const MAP_ZOOM: u8 = 5;

/// DOM id of the element the map mounts into.
pub const MAP_CONTAINER_ID: &str = "map";

/// Page title used unless the caller sets one.
pub const DEFAULT_TITLE: &str = "Earthquakes - Past 7 Days";

const BACKGROUND_LAYER_NAME: &str = "Background";
const OVERLAY_LAYER_NAME: &str = "Earthquakes";
const PAGE_TEMPLATE_NAME: &str = "map.html";
const PAGE_TEMPLATE: &str = include_str!("../templates/map.html.j2");

/// Leaflet control corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    /// Top right corner (Leaflet's default for the layer control).
    TopRight,
    /// Bottom right corner.
    BottomRight,
}

/// Initial viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    /// Map center.
    pub center: LatLng,
    /// Zoom level.
    pub zoom: u8,
}

/// Background raster tile layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    /// Name shown in the layer control.
    pub name: String,
    /// Leaflet URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub url_template: String,
    /// Attribution HTML.
    pub attribution: String,
}

/// Shared circle styling for every earthquake marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleStyle {
    /// Fill opacity in `0.0..=1.0`.
    pub fill_opacity: f64,
    /// Stroke color; `none` draws no outline.
    pub stroke_color: String,
}

/// Toggleable overlay holding all earthquake markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayer {
    /// Name shown in the layer control.
    pub name: String,
    /// Markers in feed order.
    pub markers: Vec<Marker>,
    /// Circle styling.
    pub style: CircleStyle,
}

/// Layer toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerControl {
    /// Whether the control starts collapsed into an icon.
    pub collapsed: bool,
    /// Control corner.
    pub position: ControlPosition,
}

/// Depth legend control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    /// Control corner.
    pub position: ControlPosition,
    /// Rows, shallowest first.
    pub entries: Vec<LegendEntry>,
}

/// The map handle: a complete description of one rendered map.
///
/// Owned by whoever called [`render`]; nothing about the map lives in global
/// state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDocument {
    /// Page title.
    pub title: String,
    /// DOM id of the map container.
    pub container_id: String,
    /// Initial viewport.
    pub view: MapView,
    /// Background tile layer, active by default.
    pub background: TileLayer,
    /// Earthquake overlay, active by default.
    pub overlay: OverlayLayer,
    /// Layer toggle control.
    pub layer_control: LayerControl,
    /// Depth legend.
    pub legend: Legend,
    /// When the source feed was generated, if known.
    pub generated_at: Option<DateTime<Utc>>,
}

/// Build the map document for `markers`.
///
/// Both layers are active, the layer control is expanded, and the legend
/// sits in the bottom-right corner. An empty marker list yields an empty
/// overlay.
pub fn render(markers: Vec<Marker>) -> MapDocument {
    MapDocument {
        title: DEFAULT_TITLE.to_owned(),
        container_id: MAP_CONTAINER_ID.to_owned(),
        view: MapView {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
        },
        background: TileLayer {
            name: BACKGROUND_LAYER_NAME.to_owned(),
            url_template: TILE_LAYER_URL.to_owned(),
            attribution: TILE_ATTRIBUTION.to_owned(),
        },
        overlay: OverlayLayer {
            name: OVERLAY_LAYER_NAME.to_owned(),
            markers,
            style: CircleStyle {
                fill_opacity: 0.6,
                stroke_color: String::from("none"),
            },
        },
        layer_control: LayerControl {
            collapsed: false,
            position: ControlPosition::TopRight,
        },
        legend: Legend {
            position: ControlPosition::BottomRight,
            entries: legend_entries(),
        },
        generated_at: None,
    }
}

impl MapDocument {
    /// Replace the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Record when the source feed was generated.
    #[must_use]
    pub fn with_generated_at(mut self, generated_at: Option<DateTime<Utc>>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Number of markers on the overlay.
    pub fn marker_count(&self) -> usize {
        self.overlay.markers.len()
    }

    /// Render the standalone HTML page.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

        // A "</script>" inside a popup must not close the script element.
        let document_json = serde_json::to_string(self)?.replace("</", "<\\/");
        let generated = self
            .generated_at
            .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true));

        let html = env.get_template(PAGE_TEMPLATE_NAME)?.render(context! {
            title => &self.title,
            container_id => &self.container_id,
            document_json => document_json,
            generated => generated,
        })?;

        debug!(
            markers = self.marker_count(),
            bytes = html.len(),
            "map document rendered"
        );
        Ok(html)
    }

    /// Render the page and write it to `sink`.
    pub fn mount<W: Write>(&self, sink: &mut W) -> Result<(), RenderError> {
        let html = self.to_html()?;
        sink.write_all(html.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

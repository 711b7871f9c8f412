//! Turns earthquake records into a Leaflet map document.
//!
//! This crate holds the two pure stages of the pipeline plus the document
//! they feed:
//!
//! - [`depth`] -- the ordered depth-band table and [`color_for_depth`]
//! - [`marker`] -- [`build_marker`]: radius from magnitude, fill from depth,
//!   popup text
//! - [`legend`] -- the five legend rows, derived from the same band table
//! - [`render`] -- [`MapDocument`], the owned map handle, and its HTML output
//!
//! Nothing here performs I/O except [`MapDocument::mount`], which writes to a
//! caller-supplied sink.

pub mod depth;
pub mod error;
pub mod legend;
pub mod marker;
pub mod render;

pub use depth::{DEPTH_BANDS, DepthBand, color_for_depth};
pub use error::RenderError;
pub use legend::legend_entries;
pub use marker::{RADIUS_SCALE, build_marker, build_markers, popup_text, radius_for_magnitude};
pub use render::{
    CircleStyle, ControlPosition, Legend, LayerControl, MapDocument, MapView, OverlayLayer,
    TileLayer, render,
};

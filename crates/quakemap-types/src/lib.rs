//! Shared type definitions for the Quakemap earthquake renderer.
//!
//! This crate is the single source of truth for the values that flow through
//! the pipeline: feed records come in from `quakemap-feed`, markers and legend
//! entries are produced by `quakemap-map`.
//!
//! # Modules
//!
//! - [`enums`] -- Depth color tokens
//! - [`structs`] -- Event records, map positions, markers, legend entries

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::DepthColor;
pub use structs::{EventRecord, LatLng, LegendEntry, Marker};

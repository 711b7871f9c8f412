//! Enumeration types for the Quakemap renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fill color assigned to an earthquake marker by its depth.
///
/// Ordered from the deepest band to the shallowest. Each variant serializes
/// as the hex color string the page hands to Leaflet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthColor {
    /// Deeper than 40 km.
    #[serde(rename = "#a50f15")]
    DarkRed,
    /// More than 20 km, up to 40 km.
    #[serde(rename = "#de2d26")]
    Red,
    /// More than 10 km, up to 20 km.
    #[serde(rename = "#fb6a4a")]
    Orange,
    /// More than 5 km, up to 10 km.
    #[serde(rename = "#FFD580")]
    LightOrange,
    /// More than -10 km, up to 5 km.
    #[serde(rename = "#90EE90")]
    LightGreen,
    /// -10 km or shallower (above the reference surface).
    #[serde(rename = "#AAFF00")]
    BrightGreen,
}

impl DepthColor {
    /// All six tokens, deepest first.
    pub const ALL: [Self; 6] = [
        Self::DarkRed,
        Self::Red,
        Self::Orange,
        Self::LightOrange,
        Self::LightGreen,
        Self::BrightGreen,
    ];

    /// CSS hex color for this token.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::DarkRed => "#a50f15",
            Self::Red => "#de2d26",
            Self::Orange => "#fb6a4a",
            Self::LightOrange => "#FFD580",
            Self::LightGreen => "#90EE90",
            Self::BrightGreen => "#AAFF00",
        }
    }
}

impl fmt::Display for DepthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

//! Depth bands: the single table behind marker colors and the legend.
//!
//! Bands are listed deepest first. A depth belongs to the first band whose
//! exclusive lower bound it exceeds, so a depth sitting exactly on a bound
//! (5, 10, 20, 40 km) falls into the shallower band below it.

use quakemap_types::DepthColor;

/// One depth band: everything strictly deeper than `lower_exclusive`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBand {
    /// Exclusive lower bound in km; `None` for the open-ended shallow band.
    pub lower_exclusive: Option<f64>,
    /// Color of every depth in the band.
    pub color: DepthColor,
}

/// All depth bands, deepest first. The last band catches everything else.
pub const DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand {
        lower_exclusive: Some(40.0),
        color: DepthColor::DarkRed,
    },
    DepthBand {
        lower_exclusive: Some(20.0),
        color: DepthColor::Red,
    },
    DepthBand {
        lower_exclusive: Some(10.0),
        color: DepthColor::Orange,
    },
    DepthBand {
        lower_exclusive: Some(5.0),
        color: DepthColor::LightOrange,
    },
    DepthBand {
        lower_exclusive: Some(-10.0),
        color: DepthColor::LightGreen,
    },
    DepthBand {
        lower_exclusive: None,
        color: DepthColor::BrightGreen,
    },
];

/// Fill color for an event at `depth` km.
///
/// NaN fails every comparison and lands in the last band.
pub fn color_for_depth(depth: f64) -> DepthColor {
    DEPTH_BANDS
        .iter()
        .find(|band| band.lower_exclusive.is_none_or(|lower| depth > lower))
        .map_or(DepthColor::BrightGreen, |band| band.color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_depths() {
        assert_eq!(color_for_depth(300.0), DepthColor::DarkRed);
        assert_eq!(color_for_depth(30.0), DepthColor::Red);
        assert_eq!(color_for_depth(12.0), DepthColor::Orange);
        assert_eq!(color_for_depth(7.5), DepthColor::LightOrange);
        assert_eq!(color_for_depth(0.0), DepthColor::LightGreen);
        assert_eq!(color_for_depth(-25.0), DepthColor::BrightGreen);
    }

    #[test]
    fn boundaries_fall_into_lower_band() {
        assert_eq!(color_for_depth(40.0), DepthColor::Red);
        assert_eq!(color_for_depth(20.0), DepthColor::Orange);
        assert_eq!(color_for_depth(10.0), DepthColor::LightOrange);
        assert_eq!(color_for_depth(5.0), DepthColor::LightGreen);
        assert_eq!(color_for_depth(-10.0), DepthColor::BrightGreen);
    }

    #[test]
    fn just_above_boundaries_moves_up() {
        assert_eq!(color_for_depth(40.001), DepthColor::DarkRed);
        assert_eq!(color_for_depth(20.001), DepthColor::Red);
        assert_eq!(color_for_depth(10.001), DepthColor::Orange);
        assert_eq!(color_for_depth(5.001), DepthColor::LightOrange);
        assert_eq!(color_for_depth(-9.999), DepthColor::LightGreen);
    }

    #[test]
    fn non_finite_depths() {
        assert_eq!(color_for_depth(f64::NAN), DepthColor::BrightGreen);
        assert_eq!(color_for_depth(f64::INFINITY), DepthColor::DarkRed);
        assert_eq!(color_for_depth(f64::NEG_INFINITY), DepthColor::BrightGreen);
    }

    #[test]
    fn every_depth_maps_to_a_known_token() {
        let mut depth = -50.0;
        while depth < 80.0 {
            let color = color_for_depth(depth);
            assert!(DepthColor::ALL.contains(&color));
            assert_eq!(color, color_for_depth(depth));
            depth += 0.25;
        }
    }

    #[test]
    fn bands_are_ordered_deepest_first() {
        let bounds: Vec<f64> = DEPTH_BANDS.iter().filter_map(|b| b.lower_exclusive).collect();
        assert!(bounds.windows(2).all(|w| w[0] > w[1]));
        assert!(DEPTH_BANDS.last().is_some_and(|b| b.lower_exclusive.is_none()));
    }
}

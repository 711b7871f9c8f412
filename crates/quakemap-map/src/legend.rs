//! Depth legend rows.
//!
//! Rows come from the finite lower bounds of [`DEPTH_BANDS`], shallowest
//! first. Each row is labelled from its bound to the next one up, and the
//! deepest row is open-ended. The open shallow band below -10 km has no row.

use std::iter;

use quakemap_types::LegendEntry;

use crate::depth::DEPTH_BANDS;

/// The five legend rows: `-10–5`, `5–10`, `10–20`, `20–40`, `40+` km.
pub fn legend_entries() -> Vec<LegendEntry> {
    let bounds: Vec<_> = DEPTH_BANDS
        .iter()
        .rev()
        .filter_map(|band| band.lower_exclusive.map(|from| (from, band.color)))
        .collect();

    let upper_bounds = bounds
        .iter()
        .skip(1)
        .map(|&(to, _)| Some(to))
        .chain(iter::once(None));

    bounds
        .iter()
        .zip(upper_bounds)
        .map(|(&(from, color), to)| LegendEntry {
            color,
            range_label: to.map_or_else(
                || format!("{from}+ km"),
                |to| format!("{from}\u{2013}{to} km"),
            ),
        })
        .collect()
}

//! Rendering Stage: turn prediction results into a serializable map scene.
//!
//! The scene structs derive `Serialize` so they can be passed to D3.js as
//! JSON from the Dioxus WASM frontend; the base US-states layer and the
//! axis/legend stripping live in the D3 asset.

use serde::Serialize;

use crate::predict::PredictionResult;

/// Nonlinear exaggeration applied to predicted bloom intensity for point
/// sizing. Exactly 1.2; downstream visuals are tuned to it.
pub const SIZE_EXPONENT: f64 = 1.2;

/// Fixed categorical palette over the nine national nutrient regions
/// (ColorBrewer Set1, extended). Order matters: it is the hash fallback
/// table for labels outside this list.
const REGION_PALETTE: &[(&str, &str)] = &[
    ("Coastal Plains", "#e41a1c"),
    ("Northern Appalachians", "#377eb8"),
    ("Northern Plains", "#4daf4a"),
    ("Southern Appalachians", "#984ea3"),
    ("Southern Plains", "#ff7f00"),
    ("Temperate Plains", "#ffff33"),
    ("Upper Midwest", "#a65628"),
    ("Western Mountains", "#f781bf"),
    ("Xeric", "#999999"),
];

/// One plotted lake.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub region: String,
    /// Hex fill color, a pure function of `region`.
    pub color: String,
    /// Point radius before any on-screen scaling: `max(bloom, 0)^1.2`.
    pub radius: f64,
    /// Predicted bloom intensity, carried for tooltips.
    pub bloom: f64,
}

/// Everything the D3 layer needs to draw one frame of the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub points: Vec<MapPoint>,
}

/// FNV-1a, used so unknown region labels still get a stable color across
/// processes (std's hasher is only stable within one process).
fn fnv1a(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        hash ^= u64::from(*b);
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// The fill color for a nutrient region label. Deterministic: the same
/// label always maps to the same color, in and across renders.
pub fn region_color(region: &str) -> &'static str {
    for (label, color) in REGION_PALETTE {
        if *label == region {
            return color;
        }
    }
    REGION_PALETTE[(fnv1a(region) % REGION_PALETTE.len() as u64) as usize].1
}

/// Point radius for a predicted bloom intensity.
///
/// Negative predictions clamp to zero first: a fractional power of a
/// negative number is NaN, and a no-bloom lake should simply vanish.
pub fn point_radius(bloom: f64) -> f64 {
    bloom.max(0.0).powf(SIZE_EXPONENT)
}

/// Build the map scene: one point per prediction result, region-keyed
/// color, nonlinearly scaled radius. Pure; assumes well-formed input.
pub fn build_scene(results: &[PredictionResult]) -> MapScene {
    MapScene {
        points: results
            .iter()
            .map(|r| MapPoint {
                longitude: r.longitude,
                latitude: r.latitude,
                region: r.region.clone(),
                color: region_color(&r.region).to_string(),
                radius: point_radius(r.bloom),
                bloom: r.bloom,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(region: &str, bloom: f64) -> PredictionResult {
        PredictionResult {
            longitude: -80.1,
            latitude: 33.9,
            region: region.to_string(),
            nitrogen_ugl: 2500.0,
            bloom,
        }
    }

    #[test]
    fn test_radius_matches_power_table() {
        assert!((point_radius(1.0) - 1.0).abs() < 1e-3);
        assert!((point_radius(2.0) - 2.297).abs() < 1e-3);
        assert!((point_radius(10.0) - 15.849).abs() < 1e-3);
    }

    #[test]
    fn test_radius_monotonic() {
        let mut last = point_radius(0.0);
        for i in 1..50 {
            let r = point_radius(i as f64 * 0.25);
            assert!(r > last);
            last = r;
        }
    }

    #[test]
    fn test_negative_bloom_clamps_to_zero_radius() {
        assert_eq!(point_radius(-0.4), 0.0);
        assert!(!point_radius(-2.0).is_nan());
    }

    #[test]
    fn test_color_deterministic_across_renders() {
        let results = vec![
            result("Upper Midwest", 3.0),
            result("Xeric", 1.5),
            result("Great Basin", 2.0), // not in the fixed table
        ];
        let first = build_scene(&results);
        let second = build_scene(&results);
        assert_eq!(first, second);
        // same label, same color, always
        assert_eq!(first.points[0].color, region_color("Upper Midwest"));
        assert_eq!(region_color("Great Basin"), region_color("Great Basin"));
    }

    #[test]
    fn test_known_regions_use_their_palette_entry() {
        assert_eq!(region_color("Coastal Plains"), "#e41a1c");
        assert_eq!(region_color("Xeric"), "#999999");
    }

    #[test]
    fn test_scene_carries_one_point_per_result() {
        let results = vec![result("Xeric", 2.0), result("Xeric", 4.0)];
        let scene = build_scene(&results);
        assert_eq!(scene.points.len(), 2);
        assert!(scene.points[1].radius > scene.points[0].radius);
    }
}

//! Categorical label domains for lake observations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::observation::Observation;

/// Depth threshold separating shallow from deep lakes, in meters.
pub const DEPTH_THRESHOLD_M: f64 = 4.0;

/// How a lake came to exist: constructed or naturally formed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum LakeOrigin {
    ManMade,
    Natural,
}

impl LakeOrigin {
    /// The label form used in the survey CSV and the checkbox widgets.
    pub fn as_label(&self) -> &'static str {
        match self {
            LakeOrigin::ManMade => "MAN_MADE",
            LakeOrigin::Natural => "NATURAL",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "MAN_MADE" => Some(LakeOrigin::ManMade),
            "NATURAL" => Some(LakeOrigin::Natural),
            _ => None,
        }
    }
}

/// Depth bucket: shallow (<= 4 m) or deep (> 4 m).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum DepthClass {
    Shallow,
    Deep,
}

impl DepthClass {
    pub fn as_label(&self) -> &'static str {
        match self {
            DepthClass::Shallow => "SHALLOW",
            DepthClass::Deep => "DEEP",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "SHALLOW" => Some(DepthClass::Shallow),
            "DEEP" => Some(DepthClass::Deep),
            _ => None,
        }
    }

    /// Bucket a sampled depth in meters.
    pub fn from_depth_m(depth_m: f64) -> Self {
        if depth_m <= DEPTH_THRESHOLD_M {
            DepthClass::Shallow
        } else {
            DepthClass::Deep
        }
    }
}

/// Sorted, deduplicated origin labels observed in the dataset.
/// Populates the lake-type checkbox group; independent of any selection.
pub fn distinct_origin_labels(dataset: &[Observation]) -> Vec<String> {
    dataset
        .iter()
        .map(|o| o.origin.as_label().to_string())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Sorted, deduplicated depth-class labels observed in the dataset.
pub fn distinct_depth_labels(dataset: &[Observation]) -> Vec<String> {
    dataset
        .iter()
        .map(|o| o.depth.as_label().to_string())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Sorted, deduplicated nutrient-region labels observed in the dataset.
pub fn distinct_regions(dataset: &[Observation]) -> Vec<String> {
    dataset
        .iter()
        .map(|o| o.region.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::Observation;

    fn obs(origin: LakeOrigin, depth: DepthClass, region: &str) -> Observation {
        Observation {
            site_id: "NLA-0001".to_string(),
            longitude: -93.2,
            latitude: 45.1,
            region: region.to_string(),
            origin,
            depth,
            log_nitrogen: 6.5,
        }
    }

    #[test]
    fn test_depth_class_threshold() {
        assert_eq!(DepthClass::from_depth_m(3.9), DepthClass::Shallow);
        assert_eq!(DepthClass::from_depth_m(4.0), DepthClass::Shallow);
        assert_eq!(DepthClass::from_depth_m(4.1), DepthClass::Deep);
    }

    #[test]
    fn test_label_round_trip() {
        assert_eq!(LakeOrigin::from_label("MAN_MADE"), Some(LakeOrigin::ManMade));
        assert_eq!(LakeOrigin::from_label("man_made"), None);
        assert_eq!(DepthClass::from_label(DepthClass::Deep.as_label()), Some(DepthClass::Deep));
    }

    #[test]
    fn test_distinct_labels_sorted_and_deduped() {
        let dataset = vec![
            obs(LakeOrigin::Natural, DepthClass::Shallow, "Upper Midwest"),
            obs(LakeOrigin::Natural, DepthClass::Shallow, "Upper Midwest"),
            obs(LakeOrigin::ManMade, DepthClass::Deep, "Xeric"),
        ];
        assert_eq!(distinct_origin_labels(&dataset), vec!["MAN_MADE", "NATURAL"]);
        assert_eq!(distinct_depth_labels(&dataset), vec!["DEEP", "SHALLOW"]);
        assert_eq!(distinct_regions(&dataset), vec!["Upper Midwest", "Xeric"]);
    }

    #[test]
    fn test_distinct_labels_single_valued_domain() {
        let dataset = vec![obs(LakeOrigin::Natural, DepthClass::Deep, "Coastal Plains")];
        assert_eq!(distinct_origin_labels(&dataset), vec!["NATURAL"]);
        assert_eq!(distinct_depth_labels(&dataset), vec!["DEEP"]);
    }
}

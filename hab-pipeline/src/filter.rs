//! Filter Stage: categorical predicates plus the nitrogen broadcast.

use hab_core::Observation;
use serde::Serialize;

use crate::{PipelineError, Selection};

/// An observation that survived filtering, projected down to what the
/// prediction and rendering stages need. `nitrogen_ugl` is the slider
/// value broadcast uniformly, not the lake's sampled nitrogen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredRow {
    pub longitude: f64,
    pub latitude: f64,
    pub region: String,
    pub nitrogen_ugl: f64,
}

/// Keep the observations whose origin label AND depth label are both in the
/// selection's sets, projected to (longitude, latitude, region) with the
/// selection's nitrogen value attached to every row.
///
/// An empty result is the user-facing validation condition, not a bug.
pub fn filter_lakes(
    dataset: &[Observation],
    selection: &Selection,
) -> Result<Vec<FilteredRow>, PipelineError> {
    let rows: Vec<FilteredRow> = dataset
        .iter()
        .filter(|o| {
            selection.origins.contains(o.origin.as_label())
                && selection.depths.contains(o.depth.as_label())
        })
        .map(|o| FilteredRow {
            longitude: o.longitude,
            latitude: o.latitude,
            region: o.region.clone(),
            nitrogen_ugl: selection.nitrogen_ugl,
        })
        .collect();

    if rows.is_empty() {
        return Err(PipelineError::EmptySelection);
    }
    log::debug!("{} of {} lakes match the selection", rows.len(), dataset.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hab_core::labels::{DepthClass, LakeOrigin};
    use std::collections::BTreeSet;

    fn obs(site: &str, origin: LakeOrigin, depth: DepthClass) -> Observation {
        Observation {
            site_id: site.to_string(),
            longitude: -95.0,
            latitude: 40.0,
            region: "Temperate Plains".to_string(),
            origin,
            depth,
            log_nitrogen: 6.0,
        }
    }

    fn labels(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn selection(nitrogen: f64, origins: &[&str], depths: &[&str]) -> Selection {
        Selection {
            nitrogen_ugl: nitrogen,
            origins: labels(origins),
            depths: labels(depths),
        }
    }

    fn dataset() -> Vec<Observation> {
        vec![
            obs("A", LakeOrigin::Natural, DepthClass::Shallow),
            obs("B", LakeOrigin::Natural, DepthClass::Deep),
            obs("C", LakeOrigin::ManMade, DepthClass::Shallow),
            obs("D", LakeOrigin::ManMade, DepthClass::Deep),
        ]
    }

    #[test]
    fn test_full_label_sets_keep_everything() {
        let rows = filter_lakes(
            &dataset(),
            &selection(2500.0, &["MAN_MADE", "NATURAL"], &["SHALLOW", "DEEP"]),
        )
        .unwrap();
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_every_subset_filters_exactly() {
        // exhaustive over the non-empty subsets of both two-label domains
        let origin_domain = ["MAN_MADE", "NATURAL"];
        let depth_domain = ["SHALLOW", "DEEP"];
        let data = dataset();
        for o_mask in 1u32..4 {
            for d_mask in 1u32..4 {
                let origins: Vec<&str> = origin_domain
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| o_mask & (1 << i) != 0)
                    .map(|(_, l)| *l)
                    .collect();
                let depths: Vec<&str> = depth_domain
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| d_mask & (1 << i) != 0)
                    .map(|(_, l)| *l)
                    .collect();
                let sel = selection(2500.0, &origins, &depths);
                let rows = filter_lakes(&data, &sel).unwrap();
                let expected = data
                    .iter()
                    .filter(|o| {
                        origins.contains(&o.origin.as_label())
                            && depths.contains(&o.depth.as_label())
                    })
                    .count();
                assert_eq!(rows.len(), expected, "origins {:?} depths {:?}", origins, depths);
            }
        }
    }

    #[test]
    fn test_and_across_predicates() {
        // NATURAL and DEEP selected: only lake B is both
        let rows =
            filter_lakes(&dataset(), &selection(2500.0, &["NATURAL"], &["DEEP"])).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_no_match_is_validation_error() {
        let data = vec![obs("A", LakeOrigin::Natural, DepthClass::Shallow)];
        let err =
            filter_lakes(&data, &selection(2500.0, &["MAN_MADE"], &["SHALLOW"])).unwrap_err();
        assert_eq!(err, PipelineError::EmptySelection);
        assert_eq!(
            err.to_string(),
            "Please check at least one lake type or lake depth option"
        );
    }

    #[test]
    fn test_nitrogen_broadcast_replaces_sampled_values() {
        let rows = filter_lakes(
            &dataset(),
            &selection(1310.0, &["MAN_MADE", "NATURAL"], &["SHALLOW", "DEEP"]),
        )
        .unwrap();
        assert!(rows.iter().all(|r| r.nitrogen_ugl == 1310.0));
    }
}

//! The reactive dashboard's data pipeline as pure functions.
//!
//! Each stage takes explicit inputs and returns explicit outputs or a typed
//! error; the UI controller (or the CLI) owns the subscribe/react wiring.
//! A full cycle is filter -> predict -> scene, composed by [`run_pipeline`].

use std::collections::BTreeSet;
use std::fmt;

use hab_core::labels::{distinct_depth_labels, distinct_origin_labels};
use hab_core::Observation;
use hab_model::BloomModel;

pub mod filter;
pub mod predict;
pub mod scene;

pub use filter::{filter_lakes, FilteredRow};
pub use predict::{predict_blooms, PredictionResult};
pub use scene::{build_scene, point_radius, region_color, MapPoint, MapScene};

/// Nitrogen slider bounds, in ug/L. Part of the observable UI contract,
/// including the default sitting off the 10 + k*100 step grid.
pub const NITROGEN_MIN: f64 = 10.0;
pub const NITROGEN_MAX: f64 = 5000.0;
pub const NITROGEN_STEP: f64 = 100.0;
pub const NITROGEN_DEFAULT: f64 = 2500.0;

/// Shown when the user's checkbox selection leaves no lakes to plot.
pub const EMPTY_SELECTION_MSG: &str =
    "Please check at least one lake type or lake depth option";

/// Errors a pipeline cycle can produce.
#[derive(Debug, PartialEq, Clone)]
pub enum PipelineError {
    /// The current selection matched no lakes. Recoverable: the UI shows
    /// [`EMPTY_SELECTION_MSG`] in place of the map and waits for the next
    /// interaction.
    EmptySelection,
    /// Model invocation failed. Fatal for this cycle only; the session
    /// continues and the next successful trigger recovers.
    Model(String),
}

impl PipelineError {
    /// True for expected, user-fixable conditions (vs application errors).
    pub fn is_validation(&self) -> bool {
        matches!(self, PipelineError::EmptySelection)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::EmptySelection => f.write_str(EMPTY_SELECTION_MSG),
            PipelineError::Model(msg) => write!(f, "prediction failed: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {}

/// The user's current widget state: slider value plus the two checkbox sets.
///
/// Owned by the orchestrator; the pipeline only ever borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Nitrogen concentration to broadcast to every filtered row, in ug/L.
    pub nitrogen_ugl: f64,
    /// Selected lake-origin labels (MAN_MADE / NATURAL).
    pub origins: BTreeSet<String>,
    /// Selected depth-class labels (SHALLOW / DEEP).
    pub depths: BTreeSet<String>,
}

impl Selection {
    /// The initial state: every observed label selected, slider at default.
    pub fn all(dataset: &[Observation]) -> Self {
        Selection {
            nitrogen_ugl: NITROGEN_DEFAULT,
            origins: distinct_origin_labels(dataset).into_iter().collect(),
            depths: distinct_depth_labels(dataset).into_iter().collect(),
        }
    }
}

/// Run one full cycle: filter the dataset by the selection, predict bloom
/// intensity for the survivors, and build the map scene.
pub fn run_pipeline(
    dataset: &[Observation],
    model: &dyn BloomModel,
    selection: &Selection,
) -> Result<MapScene, PipelineError> {
    let rows = filter_lakes(dataset, selection)?;
    let results = predict_blooms(rows, model)?;
    Ok(build_scene(&results))
}

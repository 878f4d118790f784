//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use hab_pipeline::NITROGEN_DEFAULT;
use std::collections::BTreeSet;

/// Shared reactive state for the bloom map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading the dataset and model
    pub loading: Signal<bool>,
    /// Error message shown in place of the map, if any
    pub error_msg: Signal<Option<String>>,
    /// Current nitrogen slider value in ug/L
    pub nitrogen_ugl: Signal<f64>,
    /// Currently checked lake-origin labels
    pub selected_origins: Signal<BTreeSet<String>>,
    /// Currently checked depth-class labels
    pub selected_depths: Signal<BTreeSet<String>>,
    /// Origin labels observed in the dataset (checkbox choices)
    pub origin_choices: Signal<Vec<String>>,
    /// Depth labels observed in the dataset (checkbox choices)
    pub depth_choices: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values. The choice lists
    /// and selected sets stay empty until the dataset is parsed on mount.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            nitrogen_ugl: Signal::new(NITROGEN_DEFAULT),
            selected_origins: Signal::new(BTreeSet::new()),
            selected_depths: Signal::new(BTreeSet::new()),
            origin_choices: Signal::new(Vec::new()),
            depth_choices: Signal::new(Vec::new()),
        }
    }
}

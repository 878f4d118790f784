//! Predicted cyanobacterial bloom intensity across US lakes.
//!
//! Interactive map over the national lake survey: a nitrogen slider plus
//! lake-type and lake-depth checkboxes refilter the dataset, the fitted
//! regression predicts bloom intensity at the chosen nitrogen level, and
//! D3 redraws the point map over US state boundaries.
//!
//! Data flow:
//! 1. `build.rs` copies `lakes.csv` into OUT_DIR; `include_str!` embeds it.
//! 2. On mount: parse the CSV, load the embedded model coefficients, and
//!    derive the checkbox choice lists from the observed label domains.
//! 3. On any slider/checkbox change: filter -> predict -> build scene ->
//!    render via D3, or show the validation message in place of the map.

use dioxus::prelude::*;
use hab_chart_ui::components::{
    DepthCheckboxes, ErrorDisplay, InfoCard, LoadingSpinner, MapContainer, NitrogenSlider,
    OriginCheckboxes,
};
use hab_chart_ui::js_bridge;
use hab_chart_ui::state::AppState;
use hab_core::labels::{distinct_depth_labels, distinct_origin_labels};
use hab_core::{parse_lakes_csv, Observation};
use hab_model::LogLinearModel;
use hab_pipeline::{run_pipeline, Selection};

// Embed the lake survey CSV (SITE_ID..LOG_NTL) at compile time.
const LAKES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/lakes.csv"));

/// DOM id for the D3 map container div.
const MAP_CONTAINER_ID: &str = "bloom-map";

// Fixed informational copy and illustrations shown beside the map.
const BLOOM_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/d/d1/Potomac_green_water.JPG";
const BLOOM_TEXT: &str = "Cyanobacteria, also called blue-green algae, can multiply into \
    dense surface blooms that discolor water, produce toxins, and deplete oxygen as they \
    decay. Blooms like this one are increasingly common in warm, nutrient-rich lakes.";

const NITROGEN_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/a/a8/Runoff_of_soil_%26_fertilizer.jpg";
const NITROGEN_TEXT: &str = "Nitrogen washed into lakes from fertilizer runoff and other \
    sources is a key driver of bloom severity. Slide the nitrogen level to see how the \
    model's predicted bloom intensity responds across surveyed lakes, and use the \
    checkboxes to focus on natural or man-made lakes and on shallow or deep ones.";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bloom-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    // Dataset and model live in signals so the reactive effect can read them.
    let mut dataset: Signal<Vec<Observation>> = use_signal(Vec::new);
    let mut model: Signal<Option<LogLinearModel>> = use_signal(|| None);

    // ─── Effect 1: Parse dataset and model once on mount ───
    use_effect(move || {
        let data = match parse_lakes_csv(LAKES_CSV) {
            Ok(data) if !data.is_empty() => data,
            Ok(_) => {
                state.error_msg.set(Some("No lake data available.".to_string()));
                state.loading.set(false);
                return;
            }
            Err(e) => {
                log::error!("failed to parse lake survey: {}", e);
                state.error_msg.set(Some("No lake data available.".to_string()));
                state.loading.set(false);
                return;
            }
        };

        match LogLinearModel::embedded() {
            Ok(m) => model.set(Some(m)),
            Err(e) => {
                log::error!("failed to load bloom model: {}", e);
                state.error_msg.set(Some("Bloom model unavailable.".to_string()));
                state.loading.set(false);
                return;
            }
        }

        // Initial state: every observed label checked, slider at default.
        let origins = distinct_origin_labels(&data);
        let depths = distinct_depth_labels(&data);
        state.selected_origins.set(origins.iter().cloned().collect());
        state.selected_depths.set(depths.iter().cloned().collect());
        state.origin_choices.set(origins);
        state.depth_choices.set(depths);

        dataset.set(data);
        state.loading.set(false);

        // Initialize D3 map scripts (one-time)
        js_bridge::init_map();
    });

    // ─── Effect 2: Refilter, re-predict, and redraw on any change ───
    // Re-runs whenever loading, the slider, or either checkbox set changes.
    use_effect(move || {
        let loading = (state.loading)();
        let nitrogen = (state.nitrogen_ugl)();
        // Clone selection sets out of the signals immediately so the read
        // borrows don't interfere with Dioxus signal tracking.
        let origins = state.selected_origins.read().clone();
        let depths = state.selected_depths.read().clone();

        if loading {
            return;
        }
        let data: Vec<Observation> = dataset.read().clone();
        if data.is_empty() {
            return;
        }
        let Some(m) = model.read().clone() else {
            return;
        };

        let selection = Selection {
            nitrogen_ugl: nitrogen,
            origins,
            depths,
        };

        match run_pipeline(&data, &m, &selection) {
            Ok(scene) => {
                state.error_msg.set(None);
                let scene_json = serde_json::to_string(&scene).unwrap_or_default();
                let config_json = serde_json::json!({
                    "pointScale": 1.6,
                    "stateFill": "#f2f2f2",
                    "stateStroke": "#bdbdbd",
                })
                .to_string();
                js_bridge::render_bloom_map(MAP_CONTAINER_ID, &scene_json, &config_json);
            }
            Err(e) => {
                if !e.is_validation() {
                    log::error!("pipeline cycle failed: {}", e);
                }
                state.error_msg.set(Some(e.to_string()));
                // never leave a stale map behind the message
                js_bridge::destroy_map(MAP_CONTAINER_ID);
            }
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "Predicted Cyanobacterial Bloom Intensity in US Lakes"
            }
            p {
                style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                "Point size: predicted bloom intensity. Point color: ecological nutrient region."
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                MapContainer {
                    id: MAP_CONTAINER_ID.to_string(),
                    loading: *state.loading.read(),
                    min_height: 480,
                }

                ControlsSection {}

                div {
                    style: "display: flex; flex-wrap: wrap; margin-top: 12px; border-top: 1px solid #e0e0e0;",
                    InfoCard {
                        image_url: BLOOM_IMAGE_URL.to_string(),
                        alt: "A cyanobacterial bloom discoloring lake water".to_string(),
                        text: BLOOM_TEXT.to_string(),
                    }
                    InfoCard {
                        image_url: NITROGEN_IMAGE_URL.to_string(),
                        alt: "Fertilizer runoff entering surface water".to_string(),
                        text: NITROGEN_TEXT.to_string(),
                    }
                }
            }
        }
    }
}

/// Slider and checkbox controls under the map.
#[component]
fn ControlsSection() -> Element {
    rsx! {
        div {
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            p {
                style: "font-size: 12px; color: #666; margin: 0 0 4px 0;",
                "Adjust the nitrogen level and lake filters to update the map:"
            }
            NitrogenSlider {}
            OriginCheckboxes {}
            DepthCheckboxes {}
        }
    }
}

//! Nitrogen concentration slider.

use crate::state::AppState;
use dioxus::prelude::*;
use hab_pipeline::{NITROGEN_MAX, NITROGEN_MIN, NITROGEN_STEP};

/// Range slider for the nitrogen value broadcast to every filtered lake.
/// Bounds and step are part of the observable contract: 10-5000 by 100.
#[component]
pub fn NitrogenSlider() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.nitrogen_ugl)();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state.nitrogen_ugl.set(value);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "nitrogen-slider",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Nitrogen level (ug/L): {current:.0}"
            }
            input {
                id: "nitrogen-slider",
                r#type: "range",
                min: "{NITROGEN_MIN}",
                max: "{NITROGEN_MAX}",
                step: "{NITROGEN_STEP}",
                value: "{current}",
                style: "width: 100%;",
                oninput: on_input,
            }
        }
    }
}

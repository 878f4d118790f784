//! Checkbox group for lake depth class (shallow / deep).

use crate::state::AppState;
use dioxus::prelude::*;

/// Lake-depth checkbox group. Choices come from the dataset's observed
/// depth labels; toggling updates the selected set in AppState.
#[component]
pub fn DepthCheckboxes() -> Element {
    let mut state = use_context::<AppState>();
    let choices = state.depth_choices.read().clone();
    let selected = state.selected_depths.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            span {
                style: "font-weight: bold; margin-right: 8px;",
                "Lake depth: "
            }
            for choice in choices.into_iter() {
                label {
                    style: "margin-right: 12px;",
                    input {
                        r#type: "checkbox",
                        checked: selected.contains(&choice),
                        onchange: {
                            let choice = choice.clone();
                            move |_| {
                                let mut set = state.selected_depths.read().clone();
                                if !set.remove(&choice) {
                                    set.insert(choice.clone());
                                }
                                state.selected_depths.set(set);
                            }
                        },
                    }
                    " {choice}"
                }
            }
        }
    }
}

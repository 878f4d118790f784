//! Checkbox group for lake origin (man-made / natural).

use crate::state::AppState;
use dioxus::prelude::*;

/// Lake-type checkbox group. Choices come from the dataset's observed
/// origin labels; toggling updates the selected set in AppState.
#[component]
pub fn OriginCheckboxes() -> Element {
    let mut state = use_context::<AppState>();
    let choices = state.origin_choices.read().clone();
    let selected = state.selected_origins.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            span {
                style: "font-weight: bold; margin-right: 8px;",
                "Lake type: "
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
                                let mut set = state.selected_origins.read().clone();
                                if !set.remove(&choice) {
                                    set.insert(choice.clone());
                                }
                                state.selected_origins.set(set);
                            }
                        },
                    }
                    " {choice}"
                }
            }
        }
    }
}

//! Informational card: a fixed image with a block of explanatory copy.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InfoCardProps {
    /// External URL of the illustration
    pub image_url: String,
    /// Alt text for the illustration
    pub alt: String,
    /// The fixed copy shown under the image
    pub text: String,
}

/// Image-plus-text card used for the dashboard's two informational blocks.
#[component]
pub fn InfoCard(props: InfoCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 260px; padding: 8px;",
            img {
                src: "{props.image_url}",
                alt: "{props.alt}",
                style: "width: 100%; border-radius: 4px;",
            }
            p {
                style: "font-size: 13px; color: #444; margin-top: 6px;",
                "{props.text}"
            }
        }
    }
}

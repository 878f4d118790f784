//! Reusable Dioxus RSX components for the bloom map app.

mod depth_checkboxes;
mod error_display;
mod info_card;
mod loading_spinner;
mod map_container;
mod nitrogen_slider;
mod origin_checkboxes;

pub use depth_checkboxes::DepthCheckboxes;
pub use error_display::ErrorDisplay;
pub use info_card::InfoCard;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use nitrogen_slider::NitrogenSlider;
pub use origin_checkboxes::OriginCheckboxes;

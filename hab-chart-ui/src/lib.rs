//! Shared Dioxus components and D3.js bridge for the bloom dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js map renderer via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (slider, checkbox groups, containers)

pub mod components;
pub mod js_bridge;
pub mod state;

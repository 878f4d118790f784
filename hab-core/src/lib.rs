//! Core types for the lake nitrogen / bloom dashboard.
//!
//! This crate owns the lake survey dataset: the `Observation` row type,
//! CSV parsing, and the categorical label domains (lake origin, depth
//! class, nutrient region) that feed the UI choice widgets.

pub mod labels;
pub mod observation;

pub use labels::{DepthClass, LakeOrigin, DEPTH_THRESHOLD_M};
pub use observation::{parse_lakes_csv, DatasetError, Observation};

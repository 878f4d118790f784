//! Pre-fitted regression model mapping lake nitrogen to predicted
//! cyanobacterial bloom intensity.
//!
//! The model is a log-linear fit (`intercept + slope * ln(N)`) whose
//! coefficients ship as an embedded JSON asset. Fitting happened offline;
//! this crate only evaluates the fitted model. Inputs arrive as a named
//! feature batch so a caller wired to the wrong schema fails loudly
//! instead of producing silently wrong predictions.

use serde::Deserialize;
use std::fmt;

/// The single input feature the fitted model expects: total nitrogen in ug/L.
pub const NITROGEN_FEATURE: &str = "ntl_ugl";

// Coefficients fitted offline against the national lake survey.
static MODEL_JSON: &str = include_str!("../assets/model.json");

/// Errors from model evaluation or coefficient loading.
#[derive(Debug, PartialEq, Clone)]
pub enum ModelError {
    /// The batch's feature name does not match the model's input schema.
    UnknownFeature { expected: String, got: String },
    /// Nitrogen must be strictly positive for the log-linear form.
    NonPositiveInput(f64),
    /// The coefficients JSON could not be parsed.
    BadCoefficients(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownFeature { expected, got } => {
                write!(f, "model expects feature {:?}, got {:?}", expected, got)
            }
            ModelError::NonPositiveInput(v) => {
                write!(f, "nitrogen must be positive, got {}", v)
            }
            ModelError::BadCoefficients(msg) => write!(f, "bad model coefficients: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

/// A batch of values for one named input feature.
///
/// The name travels with the values so `predict` can verify the caller
/// mapped its column onto the schema the model was fitted against.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBatch {
    pub feature: String,
    pub values: Vec<f64>,
}

impl FeatureBatch {
    pub fn new(feature: &str, values: Vec<f64>) -> Self {
        FeatureBatch {
            feature: feature.to_string(),
            values,
        }
    }
}

/// A fitted regression model producing one bloom-intensity scalar per input.
///
/// Output length and order must match the input batch; callers rely on the
/// i-th prediction pairing with the i-th input value.
pub trait BloomModel {
    fn predict(&self, batch: &FeatureBatch) -> Result<Vec<f64>, ModelError>;
}

/// Log-linear bloom model: `intercept + slope * ln(ntl_ugl)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogLinearModel {
    feature: String,
    intercept: f64,
    slope: f64,
}

impl LogLinearModel {
    /// Load a model from a coefficients JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: LogLinearModel =
            serde_json::from_str(json).map_err(|e| ModelError::BadCoefficients(e.to_string()))?;
        log::debug!(
            "loaded bloom model on {:?}: intercept {}, slope {}",
            model.feature,
            model.intercept,
            model.slope
        );
        Ok(model)
    }

    /// The model fitted offline and embedded in this crate.
    pub fn embedded() -> Result<Self, ModelError> {
        Self::from_json(MODEL_JSON)
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }
}

impl BloomModel for LogLinearModel {
    fn predict(&self, batch: &FeatureBatch) -> Result<Vec<f64>, ModelError> {
        if batch.feature != self.feature {
            return Err(ModelError::UnknownFeature {
                expected: self.feature.clone(),
                got: batch.feature.clone(),
            });
        }
        let mut out = Vec::with_capacity(batch.values.len());
        for &v in &batch.values {
            if !(v > 0.0) || !v.is_finite() {
                return Err(ModelError::NonPositiveInput(v));
            }
            out.push(self.intercept + self.slope * v.ln());
        }
        Ok(out)
    }
}

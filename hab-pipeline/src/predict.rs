//! Prediction Stage: one batched model call per cycle.

use hab_model::{BloomModel, FeatureBatch, NITROGEN_FEATURE};
use serde::Serialize;

use crate::filter::FilteredRow;
use crate::PipelineError;

/// A filtered row plus the model's predicted bloom intensity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub longitude: f64,
    pub latitude: f64,
    pub region: String,
    pub nitrogen_ugl: f64,
    /// Predicted bloom-intensity scalar.
    pub bloom: f64,
}

/// Predict bloom intensity for every filtered row in one batched call.
///
/// The i-th prediction pairs with the i-th row; the model promises
/// order-preserving output and the length check below enforces it rather
/// than trusting it. Re-validates non-emptiness so the stage stays safe
/// when called outside [`crate::run_pipeline`].
pub fn predict_blooms(
    rows: Vec<FilteredRow>,
    model: &dyn BloomModel,
) -> Result<Vec<PredictionResult>, PipelineError> {
    if rows.is_empty() {
        return Err(PipelineError::EmptySelection);
    }

    // map our nitrogen column onto the model's named input feature
    let batch = FeatureBatch::new(
        NITROGEN_FEATURE,
        rows.iter().map(|r| r.nitrogen_ugl).collect(),
    );
    let predicted = model
        .predict(&batch)
        .map_err(|e| PipelineError::Model(e.to_string()))?;

    if predicted.len() != rows.len() {
        return Err(PipelineError::Model(format!(
            "model returned {} predictions for {} rows",
            predicted.len(),
            rows.len()
        )));
    }

    Ok(rows
        .into_iter()
        .zip(predicted)
        .map(|(row, bloom)| PredictionResult {
            longitude: row.longitude,
            latitude: row.latitude,
            region: row.region,
            nitrogen_ugl: row.nitrogen_ugl,
            bloom,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hab_model::{LogLinearModel, ModelError};

    fn row(lon: f64, lat: f64, nitrogen: f64) -> FilteredRow {
        FilteredRow {
            longitude: lon,
            latitude: lat,
            region: "Southern Plains".to_string(),
            nitrogen_ugl: nitrogen,
        }
    }

    #[test]
    fn test_count_and_order_preserved() {
        let model = LogLinearModel::embedded().unwrap();
        let rows = vec![
            row(-100.0, 35.0, 2500.0),
            row(-98.0, 33.5, 2500.0),
            row(-96.5, 31.0, 2500.0),
        ];
        let results = predict_blooms(rows.clone(), &model).unwrap();
        assert_eq!(results.len(), 3);
        for (r, src) in results.iter().zip(&rows) {
            assert_eq!(r.longitude, src.longitude);
            assert_eq!(r.latitude, src.latitude);
        }
        // uniform nitrogen in means uniform prediction out
        assert!(results.iter().all(|r| r.bloom == results[0].bloom));
    }

    #[test]
    fn test_empty_rows_revalidated() {
        let model = LogLinearModel::embedded().unwrap();
        let err = predict_blooms(Vec::new(), &model).unwrap_err();
        assert_eq!(err, PipelineError::EmptySelection);
    }

    #[test]
    fn test_model_failure_is_fatal_not_validation() {
        let model = LogLinearModel::embedded().unwrap();
        // nitrogen 0 makes the log-linear model refuse the batch
        let err = predict_blooms(vec![row(-100.0, 35.0, 0.0)], &model).unwrap_err();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("prediction failed"));
    }

    /// A model that violates the length contract, for the pairing check.
    struct TruncatingModel;

    impl BloomModel for TruncatingModel {
        fn predict(&self, batch: &FeatureBatch) -> Result<Vec<f64>, ModelError> {
            Ok(vec![1.0; batch.values.len().saturating_sub(1)])
        }
    }

    #[test]
    fn test_length_mismatch_detected() {
        let rows = vec![row(-100.0, 35.0, 2500.0), row(-98.0, 33.5, 2500.0)];
        let err = predict_blooms(rows, &TruncatingModel).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Model("model returned 1 predictions for 2 rows".to_string())
        );
    }
}

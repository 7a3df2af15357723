//! JSON output format for regression summaries (`--format json`)

use crate::regression::serde_float;
use crate::regression::{
    CoefficientMetrics, ModelMetrics, RegressionError, SimpleLinearRegression,
};
use serde::{Deserialize, Serialize};

/// A single prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPrediction {
    #[serde(with = "serde_float")]
    pub x: f64,
    #[serde(with = "serde_float")]
    pub y_hat: f64,
}

/// Complete regression report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRegressionReport {
    /// Format version
    pub version: String,
    /// Number of observations used by the fit
    pub sample_size: usize,
    /// Decimals kept in the metrics
    pub precision: u32,
    pub predictions: Vec<JsonPrediction>,
    pub coefficient_metrics: CoefficientMetrics,
    pub model_metrics: ModelMetrics,
}

impl JsonRegressionReport {
    /// Build a report from a fitted estimator, predicting at `inputs`
    pub fn from_estimator(
        slr: &SimpleLinearRegression,
        inputs: &[f64],
    ) -> Result<Self, RegressionError> {
        let model = slr.fitted_model()?;
        let predictions = inputs
            .iter()
            .zip(model.predict(inputs))
            .map(|(&x, y_hat)| JsonPrediction { x, y_hat })
            .collect();

        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            sample_size: model.sample_size,
            precision: model.precision,
            predictions,
            coefficient_metrics: model.coefficient_metrics,
            model_metrics: model.model_metrics,
        })
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

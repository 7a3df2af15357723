// Ordinary least squares estimator for `y = intercept + coefficient * x`
//
// The estimator is either unfit or holds a complete `FittedModel`. A fit is
// computed in full before it replaces the previous state, so a failed fit
// leaves the estimator untouched.

use crate::regression::config::FitConfig;
use crate::regression::error::{RegressionError, Result, MIN_SAMPLES};
use crate::regression::metrics::{
    coefficient_metrics, model_metrics, CoefficientMetrics, ModelMetrics, ResidualSummary,
};
use crate::regression::statistics::{
    mean, residual_sum_of_squares, sum_of_cross_products, sum_of_squares,
};
use tracing::{debug, trace, warn};

/// Parameters and summaries of a successful fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedModel {
    /// Unrounded intercept used for prediction
    pub intercept: f64,
    /// Unrounded slope used for prediction
    pub coefficient: f64,
    pub coefficient_metrics: CoefficientMetrics,
    pub model_metrics: ModelMetrics,
    /// Number of observations the model was fitted on
    pub sample_size: usize,
    /// Decimals the metrics were rounded to
    pub precision: u32,
}

impl FittedModel {
    /// Fit the closed-form OLS line and derive both metric groups
    pub fn estimate(x: &[f64], y: &[f64], config: &FitConfig) -> Result<Self> {
        config.validate()?;
        validate_sample(x, y)?;

        let x_mean = ensure_finite("mean(x)", mean(x))?;
        let y_mean = ensure_finite("mean(y)", mean(y))?;
        let sxx = sum_of_squares(x, x_mean);
        if sxx == 0.0 || is_constant(x) {
            return Err(RegressionError::ZeroVarianceX);
        }
        let sxx = ensure_finite("sxx", sxx)?;
        let sxy = ensure_finite("sxy", sum_of_cross_products(x, x_mean, y, y_mean))?;
        trace!(x_mean, y_mean, sxx, sxy, "accumulated regression sums");

        let coefficient = sxy / sxx;
        let intercept = y_mean - coefficient * x_mean;

        let fitted_values: Vec<f64> = x.iter().map(|xi| intercept + coefficient * xi).collect();
        let summary = ResidualSummary {
            sample_size: x.len(),
            x_mean,
            sxx,
            rss: residual_sum_of_squares(y, &fitted_values),
            tss: sum_of_squares(y, y_mean),
        };
        if summary.tss == 0.0 || is_constant(y) {
            return Err(RegressionError::ZeroVarianceY);
        }
        ensure_finite("tss", summary.tss)?;
        ensure_finite("rss", summary.rss)?;
        if summary.is_perfect_fit() {
            warn!(
                n = summary.sample_size,
                "perfect fit: residuals are all zero, t-statistics are not finite"
            );
        }

        let model_metrics = model_metrics(&summary, config.precision);
        let coefficient_metrics =
            coefficient_metrics(intercept, coefficient, &summary, config.precision)?;

        Ok(Self {
            intercept,
            coefficient,
            coefficient_metrics,
            model_metrics,
            sample_size: summary.sample_size,
            precision: config.precision,
        })
    }

    /// Evaluate the fitted line at every point of `x`
    pub fn predict(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.predict_one(xi)).collect()
    }

    pub fn predict_one(&self, x: f64) -> f64 {
        self.intercept + self.coefficient * x
    }
}

// Finite inputs can still overflow once squared or summed
fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RegressionError::Overflow { quantity })
    }
}

// The mean of identical values can be off by an ulp, leaving a tiny nonzero
// sum of squares, so constancy is checked on the values themselves.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

fn validate_sample(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    if x.len() < MIN_SAMPLES {
        return Err(RegressionError::InsufficientData {
            required: MIN_SAMPLES,
            actual: x.len(),
        });
    }

    for (series, values) in [("x", x), ("y", y)] {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(RegressionError::NonFiniteInput { series, index });
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum FitState {
    #[default]
    Unfit,
    Fitted(FittedModel),
}

/// Simple linear regression fitted by ordinary least squares
///
/// `fit` takes `&mut self`; share an instance across threads behind a lock
/// if it is refitted while being read.
///
/// # Example
/// ```
/// use simple_linreg::regression::SimpleLinearRegression;
///
/// let mut slr = SimpleLinearRegression::new();
/// slr.fit(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
///
/// let preds = slr.predict(&[6.0]).unwrap();
/// assert!((preds[0] - 12.0).abs() < 1e-10);
/// assert_eq!(slr.model_metrics().unwrap().r2, 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpleLinearRegression {
    config: FitConfig,
    state: FitState,
}

impl SimpleLinearRegression {
    /// Create an unfit estimator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FitConfig) -> Self {
        Self {
            config,
            state: FitState::Unfit,
        }
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Fit the model, replacing any previous fit
    ///
    /// On error the estimator keeps whatever state it had before the call.
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        let fitted = FittedModel::estimate(x, y, &self.config)?;
        debug!(
            n = fitted.sample_size,
            intercept = fitted.intercept,
            coefficient = fitted.coefficient,
            "fitted simple linear regression"
        );
        self.state = FitState::Fitted(fitted);
        Ok(())
    }

    /// Predict responses for any number of inputs
    pub fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        Ok(self.fitted_model()?.predict(x))
    }

    pub fn predict_one(&self, x: f64) -> Result<f64> {
        Ok(self.fitted_model()?.predict_one(x))
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self.state, FitState::Fitted(_))
    }

    pub fn fitted(&self) -> Option<&FittedModel> {
        match &self.state {
            FitState::Fitted(model) => Some(model),
            FitState::Unfit => None,
        }
    }

    /// Fitted model, or `NotFitted`
    pub fn fitted_model(&self) -> Result<&FittedModel> {
        self.fitted().ok_or(RegressionError::NotFitted)
    }

    pub fn intercept(&self) -> Option<f64> {
        self.fitted().map(|m| m.intercept)
    }

    pub fn coefficient(&self) -> Option<f64> {
        self.fitted().map(|m| m.coefficient)
    }

    pub fn coefficient_metrics(&self) -> Option<&CoefficientMetrics> {
        self.fitted().map(|m| &m.coefficient_metrics)
    }

    pub fn model_metrics(&self) -> Option<&ModelMetrics> {
        self.fitted().map(|m| &m.model_metrics)
    }

    /// Human-readable coefficient and model summary
    pub fn to_report_string(&self) -> Result<String> {
        Ok(self.fitted_model()?.to_report_string())
    }
}

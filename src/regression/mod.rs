// Simple Linear Regression by Ordinary Least Squares
//
// Fits `y = intercept + coefficient * x` in closed form and summarizes the fit
// with the usual inferential statistics:
// - model metrics: residual standard error, R², adjusted R²
// - coefficient metrics: estimate, standard error, t-statistic and two-sided
//   p-value for the intercept and the slope
//
// Implementation:
// - closed-form sums in a single pass per quantity (statistics.rs)
// - Student's t tail probabilities from statrs
// - the estimator is Unfit or Fitted; there is no NaN sentinel state

mod config;
mod error;
mod estimator;
mod metrics;
mod report;
pub(crate) mod serde_float;
mod statistics;

pub use config::{FitConfig, MAX_PRECISION};
pub use error::{RegressionError, Result, MIN_SAMPLES};
pub use estimator::{FittedModel, SimpleLinearRegression};
pub use metrics::{
    coefficient_metrics, model_metrics, CoefficientMetrics, ModelMetrics, ParameterMetrics,
    ResidualSummary,
};
pub use statistics::{mean, round_to, two_sided_p_value};

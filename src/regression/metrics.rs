// Model-level and coefficient-level summaries of a fitted line
//
// Both summaries are derived from one `ResidualSummary`, so the residual
// variance used for the standard errors is exactly the one behind the RSE.

use crate::regression::error::Result;
use crate::regression::serde_float;
use crate::regression::statistics::{round_to, two_sided_p_value};
use serde::{Deserialize, Serialize};

/// Goodness-of-fit metrics for the whole model
///
/// Non-finite values serialize as "inf", "-inf" or "NaN".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Residual standard error `sqrt(rss / (n - 2))`
    #[serde(with = "serde_float")]
    pub rse: f64,

    /// Coefficient of determination `(tss - rss) / tss`
    #[serde(rename = "r_2", with = "serde_float")]
    pub r2: f64,

    /// R-squared penalized for the estimated slope
    #[serde(rename = "adj_r_2", with = "serde_float")]
    pub adj_r2: f64,
}

/// Inference for a single estimated parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterMetrics {
    #[serde(with = "serde_float")]
    pub estimate: f64,
    #[serde(with = "serde_float")]
    pub std_error: f64,
    /// Infinite for a perfect fit with a nonzero estimate
    #[serde(with = "serde_float")]
    pub t_statistic: f64,
    /// Two-sided p-value
    #[serde(with = "serde_float")]
    pub p_value: f64,
}

/// Inference for both parameters of the line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientMetrics {
    pub intercept: ParameterMetrics,
    pub coefficient: ParameterMetrics,
}

/// Sums over the fit sample shared by both metric groups
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualSummary {
    pub sample_size: usize,
    pub x_mean: f64,
    /// `Σ (xi - x̄)²`
    pub sxx: f64,
    pub rss: f64,
    pub tss: f64,
}

impl ResidualSummary {
    /// Residual degrees of freedom (slope and intercept estimated)
    pub fn residual_df(&self) -> f64 {
        self.sample_size as f64 - 2.0
    }

    /// Unbiased residual variance `rss / (n - 2)`
    pub fn sigma2_hat(&self) -> f64 {
        self.rss / self.residual_df()
    }

    pub fn is_perfect_fit(&self) -> bool {
        self.rss == 0.0
    }
}

/// Residual standard error, R² and adjusted R², rounded to `precision`
pub fn model_metrics(summary: &ResidualSummary, precision: u32) -> ModelMetrics {
    let n = summary.sample_size as f64;

    let rse = summary.sigma2_hat().sqrt();
    let r2 = (summary.tss - summary.rss) / summary.tss;
    let adj_r2 = 1.0 - (1.0 - r2) * (n - 1.0) / summary.residual_df();

    ModelMetrics {
        rse: round_to(rse, precision),
        r2: round_to(r2, precision),
        adj_r2: round_to(adj_r2, precision),
    }
}

/// Standard errors, t-statistics and p-values for intercept and slope
///
/// The slope test uses `n - 1` degrees of freedom and the intercept test
/// `n - 2`.
pub fn coefficient_metrics(
    intercept: f64,
    coefficient: f64,
    summary: &ResidualSummary,
    precision: u32,
) -> Result<CoefficientMetrics> {
    let n = summary.sample_size as f64;
    let sigma2_hat = summary.sigma2_hat();

    let coef_se = (sigma2_hat / summary.sxx).sqrt();
    let coef_t = coefficient / coef_se;
    let coef_p = two_sided_p_value(coef_t, n - 1.0)?;

    let inter_se = (sigma2_hat * (1.0 / n + summary.x_mean.powi(2) / summary.sxx)).sqrt();
    let inter_t = intercept / inter_se;
    let inter_p = two_sided_p_value(inter_t, summary.residual_df())?;

    Ok(CoefficientMetrics {
        intercept: ParameterMetrics::rounded(intercept, inter_se, inter_t, inter_p, precision),
        coefficient: ParameterMetrics::rounded(coefficient, coef_se, coef_t, coef_p, precision),
    })
}

impl ParameterMetrics {
    fn rounded(estimate: f64, std_error: f64, t_statistic: f64, p_value: f64, precision: u32) -> Self {
        Self {
            estimate: round_to(estimate, precision),
            std_error: round_to(std_error, precision),
            t_statistic: round_to(t_statistic, precision),
            p_value: round_to(p_value, precision),
        }
    }
}

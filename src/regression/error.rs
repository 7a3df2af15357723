// Error taxonomy for fitting and querying the estimator
//
// A failed fit never mutates the estimator; every variant below is raised
// before the fitted state is swapped in.

use thiserror::Error;

/// Minimum sample size: the residual variance divides by `n - 2`
pub const MIN_SAMPLES: usize = 3;

/// Errors for regression operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    #[error("x and y must have the same length (x has {x}, y has {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Non-finite value in {series} at index {index}")]
    NonFiniteInput { series: &'static str, index: usize },

    #[error("Regression sums overflow f64: {quantity} is not finite")]
    Overflow { quantity: &'static str },

    #[error("All x values are identical; cannot fit line")]
    ZeroVarianceX,

    #[error("All y values are identical; R-squared is undefined")]
    ZeroVarianceY,

    #[error("Model not fitted")]
    NotFitted,

    #[error("Student's t distribution unavailable: {0}")]
    Distribution(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RegressionError>;

//! simple-linreg - Simple linear regression with inferential summaries
//!
//! This library fits a single-predictor linear model by ordinary least
//! squares and reports standard errors, t-statistics, p-values, residual
//! standard error, R² and adjusted R².

pub mod cli;
pub mod json_output;
pub mod regression;
pub mod sample;

// Configuration for fitting and summarizing a simple linear regression
//
// Stored metrics are rounded for presentation; the fitted parameters used by
// predict are never rounded.

use crate::regression::error::{RegressionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest precision that still survives the `v * 10^p` rounding in f64
pub const MAX_PRECISION: u32 = 12;

/// Configuration for metric summaries
///
/// # Example
/// ```
/// use simple_linreg::regression::FitConfig;
///
/// let config = FitConfig::default();
/// assert_eq!(config.precision, 2); // two decimals
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Number of decimals kept in the stored model and coefficient metrics
    ///
    /// Rounding is half away from zero. Default: 2
    pub precision: u32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl FitConfig {
    /// Configuration that keeps metrics at (nearly) full precision
    pub fn exact() -> Self {
        Self {
            precision: MAX_PRECISION,
        }
    }

    /// Parse a configuration from TOML; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FitConfig =
            toml::from_str(content).map_err(|e| RegressionError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|e| {
            RegressionError::InvalidConfig(format!("{}: {}", path_ref.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(RegressionError::InvalidConfig(format!(
                "precision must be <= {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }

        Ok(())
    }
}

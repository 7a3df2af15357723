//! Paired (x, y) observations and a small CSV loader
//!
//! The loader accepts two comma-separated numeric columns per line. Blank
//! lines and `#` comments are skipped, as is a non-numeric header on the
//! first data line.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors while building or loading a sample
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Failed to read sample file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected 2 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("Line {line}: invalid number '{value}'")]
    Parse { line: usize, value: String },

    #[error("Invalid value '{value}' at position {position} of the list")]
    InvalidValue { position: usize, value: String },

    #[error("x and y must have the same length (x has {x}, y has {y})")]
    LengthMismatch { x: usize, y: usize },
}

/// Predictor and response columns of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Sample {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SampleError> {
        if x.len() != y.len() {
            return Err(SampleError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// House sizes against prices, used when no input file is given
    pub fn demo() -> Self {
        Self {
            x: vec![
                651.0, 762.0, 856.0, 1063.0, 1190.0, 1298.0, 1421.0, 1440.0, 1518.0,
            ],
            y: vec![23.0, 26.0, 30.0, 34.0, 43.0, 48.0, 52.0, 57.0, 58.0],
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Parse two-column CSV text
    ///
    /// # Example
    /// ```
    /// use simple_linreg::sample::Sample;
    ///
    /// let sample = Sample::parse_csv("x,y\n1,2\n2,4\n# note\n3,6\n").unwrap();
    /// assert_eq!(sample.x, vec![1.0, 2.0, 3.0]);
    /// assert_eq!(sample.y, vec![2.0, 4.0, 6.0]);
    /// ```
    pub fn parse_csv(content: &str) -> Result<Self, SampleError> {
        let mut x = Vec::new();
        let mut y = Vec::new();
        let mut seen_data = false;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != 2 {
                return Err(SampleError::ColumnCount {
                    line: line_no,
                    found: fields.len(),
                });
            }

            let parsed = (fields[0].parse::<f64>(), fields[1].parse::<f64>());
            match parsed {
                (Ok(xi), Ok(yi)) => {
                    x.push(xi);
                    y.push(yi);
                }
                // Header row
                (Err(_), Err(_)) if !seen_data => {}
                (Err(_), _) => {
                    return Err(SampleError::Parse {
                        line: line_no,
                        value: fields[0].to_string(),
                    })
                }
                (_, Err(_)) => {
                    return Err(SampleError::Parse {
                        line: line_no,
                        value: fields[1].to_string(),
                    })
                }
            }
            seen_data = true;
        }

        Self::new(x, y)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SampleError> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|source| SampleError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::parse_csv(&contents)
    }
}

/// Parse a comma-separated list of numbers, e.g. `700,850,1200`
///
/// Positions in `InvalidValue` are 1-based and count non-empty entries.
pub fn parse_value_list(list: &str) -> Result<Vec<f64>, SampleError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(idx, s)| {
            s.parse::<f64>().map_err(|_| SampleError::InvalidValue {
                position: idx + 1,
                value: s.to_string(),
            })
        })
        .collect()
}

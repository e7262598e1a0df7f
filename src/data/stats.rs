use serde::Serialize;

use super::error::ValidationError;
use super::model::Table;
use super::validate::grade_values;

// ---------------------------------------------------------------------------
// Descriptive statistics of the Grade column
// ---------------------------------------------------------------------------

/// Summary of the grade values. `stddev` is the population deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
}

impl Statistics {
    /// Compute statistics over `values`, or `None` when empty.
    ///
    /// Sums are accumulated left to right, so the result is reproducible
    /// for a given input order. Inputs must be finite. Sums that would
    /// overflow are redone on values scaled by the largest magnitude, and
    /// the mean always lies within `[min, max]`.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let count = values.len();
        let n = count as f64;

        let mut min = first;
        let mut max = first;
        let mut sum = 0.0;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        if min == max {
            return Some(Statistics {
                count,
                min,
                max,
                mean: min,
                stddev: 0.0,
            });
        }

        // non-zero since min != max
        let scale = min.abs().max(max.abs());

        let mean = if sum.is_finite() {
            sum / n
        } else {
            values.iter().map(|&v| v / scale).sum::<f64>() / n * scale
        };
        let mean = mean.clamp(min, max);

        let sq_dev: f64 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();
        let stddev = if sq_dev.is_finite() {
            (sq_dev / n).sqrt()
        } else {
            let scaled_mean = mean / scale;
            let scaled: f64 = values
                .iter()
                .map(|&v| {
                    let d = v / scale - scaled_mean;
                    d * d
                })
                .sum();
            (scaled / n).sqrt() * scale
        };

        Some(Statistics {
            count,
            min,
            max,
            mean,
            stddev,
        })
    }
}

/// Compute [`Statistics`] for the Grade column of `table`.
///
/// Expects a table that passed `validate_grade_column`; raw tables are
/// converted the same way first. An empty Grade column is an error rather
/// than a set of NaNs.
pub fn compute_statistics(table: &Table) -> Result<Statistics, ValidationError> {
    let stats = match table.grades() {
        Some(values) => Statistics::from_values(values),
        None => Statistics::from_values(&grade_values(table)?),
    };
    stats.ok_or(ValidationError::EmptyDataset)
}

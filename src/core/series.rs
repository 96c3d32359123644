//! MonthlySeries: aggregated values keyed by calendar month.

use crate::core::Month;
use crate::error::{ForecastError, Result};

/// An ordered series of monthly values.
///
/// Months are strictly increasing. Missing months are not filled in: the
/// series index is the position of a month, not its calendar distance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    months: Vec<Month>,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Create a series from parallel month and value vectors.
    pub fn new(months: Vec<Month>, values: Vec<f64>) -> Result<Self> {
        if months.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: months.len(),
                got: values.len(),
            });
        }

        for pair in months.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ForecastError::TimestampError(format!(
                    "months must be strictly increasing ({} follows {})",
                    pair[1], pair[0]
                )));
            }
        }

        Ok(Self { months, values })
    }

    /// Create a series of consecutive months beginning at `start`.
    pub fn consecutive(start: Month, values: Vec<f64>) -> Self {
        let months = std::iter::successors(Some(start), |m| Some(m.succ()))
            .take(values.len())
            .collect();
        Self { months, values }
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Month labels in `YYYY-MM` form.
    pub fn labels(&self) -> Vec<String> {
        self.months.iter().map(|m| m.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<(Month, f64)> {
        self.months.last().copied().zip(self.values.last().copied())
    }

    /// Fail on the first NaN or infinite value.
    pub fn ensure_finite(&self) -> Result<()> {
        ensure_finite(&self.values)
    }

    /// Iterate over `(month, value)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        self.months.iter().copied().zip(self.values.iter().copied())
    }
}

/// Fail on the first NaN or infinite value in `values`.
pub fn ensure_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ForecastError::NonFiniteValue { index }),
        None => Ok(()),
    }
}

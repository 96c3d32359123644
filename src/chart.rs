//! Chart payload for the monthly revenue + forecast line chart.
//!
//! The x axis holds the observed month labels followed by one synthetic
//! label per forecast step (`F+1`, `F+2`, ...). The forecast line is blank
//! (`null`) over the observed months so it starts right after the history.

use crate::core::MonthlySeries;
use crate::models::forecast;
use serde::{Deserialize, Serialize};

/// Labels for `horizon` forecast steps.
pub fn forecast_labels(horizon: usize) -> Vec<String> {
    (1..=horizon).map(|j| format!("F+{j}")).collect()
}

/// Two line series sharing one label axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastChart {
    pub labels: Vec<String>,
    pub actual: Vec<f64>,
    pub forecast: Vec<Option<f64>>,
}

impl ForecastChart {
    pub fn build(series: &MonthlySeries, horizon: usize) -> Self {
        let mut labels = series.labels();
        labels.extend(forecast_labels(horizon));

        let actual = series.values().to_vec();

        let mut padded: Vec<Option<f64>> = vec![None; actual.len()];
        padded.extend(forecast(&actual, horizon).into_iter().map(Some));

        Self {
            labels,
            actual,
            forecast: padded,
        }
    }

    /// Number of forecast steps in the chart.
    pub fn horizon(&self) -> usize {
        self.forecast.iter().filter(|v| v.is_some()).count()
    }

    /// The forecast values without the leading gap.
    pub fn forecast_values(&self) -> Vec<f64> {
        self.forecast.iter().flatten().copied().collect()
    }
}

//! Linear trend forecasting.
//!
//! Fits an OLS line through the series against its month index and extends
//! it past the last observed month.

use crate::core::{Forecast, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::{fit_index_line, LineFit};
use tracing::debug;

/// Forecast `horizon` future values of `series` by linear regression.
///
/// Step `j` (1-based) estimates index `series.len() - 1 + j`. A series with
/// fewer than two points has no trend: a single point is repeated, an empty
/// series forecasts zeros. Never fails; `horizon == 0` yields an empty vector.
///
/// # Example
///
/// ```
/// use sales_forecast::forecast;
///
/// assert_eq!(forecast(&[1.0, 2.0, 3.0, 4.0], 3), vec![5.0, 6.0, 7.0]);
/// assert_eq!(forecast(&[5.0], 2), vec![5.0, 5.0]);
/// assert_eq!(forecast(&[], 2), vec![0.0, 0.0]);
/// ```
pub fn forecast(series: &[f64], horizon: usize) -> Vec<f64> {
    match fit_index_line(series) {
        Some(line) => line.extrapolate(series.len(), horizon),
        None => vec![series.last().copied().unwrap_or(0.0); horizon],
    }
}

/// Linear trend forecaster over a monthly series.
#[derive(Debug, Clone, Default)]
pub struct LinearTrend {
    line: Option<LineFit>,
    observations: usize,
    /// Value repeated when the series is too short to carry a trend.
    level: Option<f64>,
    fitted: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
}

impl LinearTrend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted line, if the series had at least two points.
    pub fn line(&self) -> Option<LineFit> {
        self.line
    }

    pub fn slope(&self) -> Option<f64> {
        self.line.map(|l| l.slope)
    }

    pub fn intercept(&self) -> Option<f64> {
        self.line.map(|l| l.intercept)
    }
}

impl Forecaster for LinearTrend {
    fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        let values = series.values();
        self.observations = values.len();
        self.line = fit_index_line(values);

        let fitted = match self.line {
            Some(line) => {
                debug!(
                    slope = line.slope,
                    intercept = line.intercept,
                    observations = values.len(),
                    "fitted linear trend"
                );
                self.level = None;
                line.fitted(values.len())
            }
            None => {
                debug!(observations = values.len(), "series too short for a trend");
                self.level = Some(values.last().copied().unwrap_or(0.0));
                values.to_vec()
            }
        };

        self.residuals = Some(
            values
                .iter()
                .zip(fitted.iter())
                .map(|(y, f)| y - f)
                .collect(),
        );
        self.fitted = Some(fitted);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        if self.fitted.is_none() {
            return Err(ForecastError::FitRequired);
        }

        let predictions = match (self.line, self.level) {
            (Some(line), _) => line.extrapolate(self.observations, horizon),
            (None, Some(level)) => vec![level; horizon],
            (None, None) => return Err(ForecastError::FitRequired),
        };

        Ok(Forecast::from_values(predictions))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "LinearTrend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Month;
    use approx::assert_relative_eq;

    fn make_series(values: Vec<f64>) -> MonthlySeries {
        MonthlySeries::consecutive(Month::new(2024, 1).unwrap(), values)
    }

    #[test]
    fn forecast_empty_series_is_zeros() {
        assert_eq!(forecast(&[], 3), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn forecast_single_point_repeats() {
        assert_eq!(forecast(&[5.0], 3), vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn forecast_perfect_line_extends() {
        assert_eq!(forecast(&[1.0, 2.0, 3.0, 4.0], 3), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn forecast_constant_series_stays_constant() {
        assert_eq!(forecast(&[10.0, 10.0, 10.0], 2), vec![10.0, 10.0]);
    }

    #[test]
    fn forecast_zero_horizon_is_empty() {
        assert!(forecast(&[1.0, 2.0, 3.0], 0).is_empty());
        assert!(forecast(&[], 0).is_empty());
    }

    #[test]
    fn forecast_decreasing_revenue() {
        // slope -150, intercept 1000
        let revenue = vec![1000.0, 850.0, 700.0, 550.0];
        let out = forecast(&revenue, 2);
        assert_relative_eq!(out[0], 400.0, epsilon = 1e-9);
        assert_relative_eq!(out[1], 250.0, epsilon = 1e-9);
    }

    #[test]
    fn linear_trend_matches_free_function() {
        let values = vec![120.0, 95.0, 140.0, 160.0, 150.0, 190.0];
        let mut model = LinearTrend::new();
        model.fit(&make_series(values.clone())).unwrap();

        let predicted = model.predict(4).unwrap();
        assert_eq!(predicted.values(), forecast(&values, 4).as_slice());
    }

    #[test]
    fn linear_trend_exposes_line() {
        let mut model = LinearTrend::new();
        model.fit(&make_series(vec![3.0, 5.0, 7.0, 9.0])).unwrap();

        assert_relative_eq!(model.slope().unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(model.intercept().unwrap(), 3.0, epsilon = 1e-12);

        let residuals = model.residuals().unwrap();
        assert!(residuals.iter().all(|r| r.abs() < 1e-9));
    }

    #[test]
    fn linear_trend_short_series_falls_back() {
        let mut model = LinearTrend::new();
        model.fit(&make_series(vec![42.0])).unwrap();

        assert!(model.line().is_none());
        assert_eq!(model.predict(2).unwrap().values(), &[42.0, 42.0]);
        assert_eq!(model.fitted_values().unwrap(), &[42.0]);
        assert_eq!(model.residuals().unwrap(), &[0.0]);

        let mut empty = LinearTrend::new();
        empty.fit(&MonthlySeries::default()).unwrap();
        assert!(empty.is_fitted());
        assert_eq!(empty.predict(3).unwrap().values(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn linear_trend_refit_replaces_state() {
        let mut model = LinearTrend::new();
        model.fit(&make_series(vec![1.0, 2.0, 3.0])).unwrap();
        model.fit(&make_series(vec![7.0])).unwrap();

        assert!(model.line().is_none());
        assert_eq!(model.predict(1).unwrap().values(), &[7.0]);
    }

    #[test]
    fn linear_trend_requires_fit_before_predict() {
        let model = LinearTrend::new();
        assert!(matches!(model.predict(3), Err(ForecastError::FitRequired)));
    }

    #[test]
    fn linear_trend_name_is_correct() {
        assert_eq!(LinearTrend::new().name(), "LinearTrend");
    }
}

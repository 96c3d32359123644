//! Forecaster trait defining the common interface for sales models.

use crate::core::{Forecast, MonthlySeries};
use crate::error::Result;

/// Common interface for forecasting models fitted to a monthly series.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to the monthly series.
    fn fit(&mut self, series: &MonthlySeries) -> Result<()>;

    /// Generate predictions for the specified horizon.
    fn predict(&self, horizon: usize) -> Result<Forecast>;

    /// Get the fitted values (in-sample predictions).
    fn fitted_values(&self) -> Option<&[f64]>;

    /// Get the residuals (actual - fitted).
    fn residuals(&self) -> Option<&[f64]>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.fitted_values().is_some()
    }
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use sales_forecast::models::{BoxedForecaster, Forecaster, LinearTrend};
///
/// let model: BoxedForecaster = Box::new(LinearTrend::new());
/// assert_eq!(model.name(), "LinearTrend");
/// ```
pub type BoxedForecaster = Box<dyn Forecaster + Send + Sync>;

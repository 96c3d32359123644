//! Forecasting models.

mod linear;
mod traits;

pub use linear::{forecast, LinearTrend};
pub use traits::{BoxedForecaster, Forecaster};

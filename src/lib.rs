//! # sales-forecast
//!
//! Monthly sales aggregation and linear-trend revenue forecasting.
//!
//! Product records with monthly sales histories are summed per calendar
//! month into a [`MonthlySeries`](core::MonthlySeries). An ordinary least
//! squares line through that series (value against month index) is
//! extended to estimate the months that follow. The results are packaged
//! for a two-line chart (history plus forecast) or served over HTTP.
//!
//! ```
//! use sales_forecast::prelude::*;
//!
//! let products = vec![Product::new("E-Reader", 50.0, 89.0, 130.0, "North").with_sales(vec![
//!     MonthlySale::new("2024-01", 50.0, 89.0, 10.0),
//!     MonthlySale::new("2024-02", 50.0, 89.0, 20.0),
//! ])];
//!
//! let series = monthly_revenue(&products).unwrap();
//! let chart = ForecastChart::build(&series, 3);
//! assert_eq!(chart.labels, vec!["2024-01", "2024-02", "F+1", "F+2", "F+3"]);
//! ```

pub mod chart;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod sales;
pub mod server;
pub mod utils;

pub use error::{ForecastError, Result};
pub use models::forecast;

pub mod prelude {
    pub use crate::chart::ForecastChart;
    pub use crate::config::ForecastConfig;
    pub use crate::core::{Forecast, Month, MonthlySeries};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{forecast, Forecaster, LinearTrend};
    pub use crate::sales::{monthly_revenue, Insights, MonthlySale, Product};
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
}

//! Utility functions for forecasting models.

pub mod metrics;
pub mod ols;

pub use metrics::{calculate_metrics, AccuracyMetrics};
pub use ols::{fit_index_line, LineFit};

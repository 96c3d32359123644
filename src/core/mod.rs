//! Core data structures for monthly sales forecasting.

mod forecast;
mod month;
mod series;

pub use forecast::Forecast;
pub use month::Month;
pub use series::{ensure_finite, MonthlySeries};

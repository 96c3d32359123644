//! Sales records and the aggregations that feed the forecaster.
//!
//! Products carry base figures plus a monthly history. Monthly histories
//! are summed per calendar month into a [`MonthlySeries`](crate::core::MonthlySeries),
//! the input of the linear forecaster.

mod aggregate;
mod insights;
mod record;

pub use aggregate::{
    monthly_revenue, monthly_totals, revenue_by_product, revenue_by_region, ProductRevenue,
};
pub use insights::Insights;
pub use record::{load_products, Metric, MonthlySale, Product};

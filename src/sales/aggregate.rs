//! Aggregation of product records into chartable totals.

use crate::core::{Month, MonthlySeries};
use crate::error::Result;
use crate::sales::{Metric, Product};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Base revenue of a single product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRevenue {
    pub name: String,
    pub region: String,
    pub revenue: f64,
}

/// Sum a monthly metric across all products, one value per month.
///
/// Months are ordered chronologically; months with no records are absent.
pub fn monthly_totals(products: &[Product], metric: Metric) -> Result<MonthlySeries> {
    let mut totals: BTreeMap<Month, f64> = BTreeMap::new();

    for product in products {
        for sale in &product.monthly_sales {
            let month: Month = sale.month.parse()?;
            *totals.entry(month).or_insert(0.0) += metric.of(sale);
        }
    }

    debug!(?metric, months = totals.len(), "aggregated monthly totals");

    let (months, values) = totals.into_iter().unzip();
    MonthlySeries::new(months, values)
}

/// Total revenue per month across all products.
pub fn monthly_revenue(products: &[Product]) -> Result<MonthlySeries> {
    monthly_totals(products, Metric::Revenue)
}

/// Base revenue grouped by region, regions in order of first appearance.
pub fn revenue_by_region(products: &[Product]) -> Vec<(String, f64)> {
    let mut regions: Vec<(String, f64)> = Vec::new();
    for product in products {
        match regions.iter_mut().find(|(name, _)| *name == product.region) {
            Some((_, total)) => *total += product.base_revenue(),
            None => regions.push((product.region.clone(), product.base_revenue())),
        }
    }
    regions
}

/// Base revenue for each product, in input order.
pub fn revenue_by_product(products: &[Product]) -> Vec<ProductRevenue> {
    products
        .iter()
        .map(|p| ProductRevenue {
            name: p.product_name.clone(),
            region: p.region.clone(),
            revenue: p.base_revenue(),
        })
        .collect()
}

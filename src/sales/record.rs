//! Product and monthly-sale records.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One month of sales for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySale {
    /// Month key, e.g. `"2024-01"`.
    pub month: String,
    #[serde(default)]
    pub cost_price: f64,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default)]
    pub units_sold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
}

impl MonthlySale {
    pub fn new(
        month: impl Into<String>,
        cost_price: f64,
        selling_price: f64,
        units_sold: f64,
    ) -> Self {
        Self {
            month: month.into(),
            cost_price,
            selling_price,
            units_sold,
            revenue: None,
            profit: None,
        }
    }

    /// Stored revenue, or selling price times units sold.
    pub fn revenue(&self) -> f64 {
        self.revenue.unwrap_or(self.selling_price * self.units_sold)
    }

    /// Stored profit, or per-unit margin times units sold.
    pub fn profit(&self) -> f64 {
        self.profit.unwrap_or((self.selling_price - self.cost_price) * self.units_sold)
    }

    /// Recompute and store revenue and profit from prices and units.
    pub fn with_derived(mut self) -> Self {
        self.revenue = Some(self.selling_price * self.units_sold);
        self.profit = Some((self.selling_price - self.cost_price) * self.units_sold);
        self
    }
}

/// Which monthly figure to chart or aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Units,
    Revenue,
    Profit,
}

impl Metric {
    pub fn of(&self, sale: &MonthlySale) -> f64 {
        match self {
            Metric::Units => sale.units_sold,
            Metric::Revenue => sale.revenue(),
            Metric::Profit => sale.profit(),
        }
    }
}

/// A product with its base figures and monthly history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_name: String,
    #[serde(default)]
    pub cost_price: f64,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default)]
    pub units_sold: f64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub monthly_sales: Vec<MonthlySale>,
}

impl Product {
    pub fn new(
        product_name: impl Into<String>,
        cost_price: f64,
        selling_price: f64,
        units_sold: f64,
        region: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            cost_price,
            selling_price,
            units_sold,
            region: region.into(),
            monthly_sales: Vec::new(),
        }
    }

    pub fn with_sales(mut self, sales: Vec<MonthlySale>) -> Self {
        self.monthly_sales = sales;
        self
    }

    /// Revenue from the base selling price and units sold.
    pub fn base_revenue(&self) -> f64 {
        self.selling_price * self.units_sold
    }

    /// Month labels and values of one metric, in recorded order.
    pub fn monthly_series(&self, metric: Metric) -> (Vec<String>, Vec<f64>) {
        self.monthly_sales
            .iter()
            .map(|m| (m.month.clone(), metric.of(m)))
            .unzip()
    }
}

/// Load products from a JSON array file.
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&text)?;
    debug!(path = %path.display(), products = products.len(), "loaded products");
    Ok(products)
}

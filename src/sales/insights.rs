//! Dashboard insights derived from the product list.

use crate::error::Result;
use crate::models::forecast;
use crate::sales::aggregate::{monthly_revenue, revenue_by_product, revenue_by_region};
use crate::sales::{Product, ProductRevenue};
use serde::Serialize;
use std::fmt;

/// Headline figures for a product list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    /// Product with the highest base revenue.
    pub top_product: Option<ProductRevenue>,
    pub total_revenue: f64,
    /// Region with the highest base revenue.
    pub best_region: Option<String>,
    /// Aggregated monthly revenue for the months after the last record.
    pub forecast: Vec<f64>,
}

impl Insights {
    pub fn from_products(products: &[Product], horizon: usize) -> Result<Self> {
        let by_product = revenue_by_product(products);
        let total_revenue = by_product.iter().map(|p| p.revenue).sum();

        // Earliest product wins a tie
        let top_product = by_product.into_iter().fold(None, |best: Option<ProductRevenue>, p| {
            match best {
                Some(b) if b.revenue >= p.revenue => Some(b),
                _ => Some(p),
            }
        });

        // First-seen region wins a tie
        let best_region = revenue_by_region(products)
            .into_iter()
            .fold(None, |best: Option<(String, f64)>, (region, revenue)| match best {
                Some(b) if b.1 >= revenue => Some(b),
                _ => Some((region, revenue)),
            })
            .map(|(region, _)| region);

        let series = monthly_revenue(products)?;
        let forecast = forecast(series.values(), horizon);

        Ok(Self {
            top_product,
            total_revenue,
            best_region,
            forecast,
        })
    }
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(top) = &self.top_product {
            writeln!(f, "Top Product: {} ({:.2})", top.name, top.revenue)?;
        }
        writeln!(f, "Total Revenue: {:.2}", self.total_revenue)?;
        if let Some(region) = &self.best_region {
            writeln!(f, "Best Region: {}", region)?;
        }
        let next: Vec<String> = self.forecast.iter().map(|v| format!("{:.0}", v)).collect();
        write!(
            f,
            "Forecast (Next {} Months): {}",
            self.forecast.len(),
            next.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sales::MonthlySale;
    use approx::assert_relative_eq;

    fn products() -> Vec<Product> {
        vec![
            Product::new("Smart Speaker", 15.0, 24.0, 150.0, "West").with_sales(vec![
                MonthlySale::new("2024-01", 15.0, 10.0, 10.0),
                MonthlySale::new("2024-02", 15.0, 10.0, 20.0),
            ]),
            Product::new("Wireless Earbuds", 30.0, 59.0, 220.0, "South").with_sales(vec![
                MonthlySale::new("2024-03", 30.0, 10.0, 30.0),
            ]),
            Product::new("E-Reader", 50.0, 89.0, 130.0, "North"),
        ]
    }

    #[test]
    fn insights_pick_leaders_and_forecast() {
        let insights = Insights::from_products(&products(), 3).unwrap();

        assert_eq!(insights.top_product.as_ref().unwrap().name, "Wireless Earbuds");
        assert_relative_eq!(insights.total_revenue, 3600.0 + 12980.0 + 11570.0);
        assert_eq!(insights.best_region.as_deref(), Some("South"));
        // monthly revenue 100, 200, 300 -> 400, 500, 600
        assert_eq!(insights.forecast.len(), 3);
        assert_relative_eq!(insights.forecast[0], 400.0, epsilon = 1e-9);
        assert_relative_eq!(insights.forecast[2], 600.0, epsilon = 1e-9);
    }

    #[test]
    fn tie_keeps_first_product() {
        let products = vec![
            Product::new("A", 1.0, 10.0, 10.0, "North"),
            Product::new("B", 1.0, 10.0, 10.0, "South"),
        ];
        let insights = Insights::from_products(&products, 1).unwrap();
        assert_eq!(insights.top_product.unwrap().name, "A");
        assert_eq!(insights.best_region.as_deref(), Some("North"));
        assert_eq!(insights.forecast, vec![0.0]);
    }

    #[test]
    fn tie_keeps_first_seen_region() {
        let products = vec![
            Product::new("A", 1.0, 10.0, 10.0, "West"),
            Product::new("B", 1.0, 10.0, 10.0, "East"),
        ];
        let insights = Insights::from_products(&products, 1).unwrap();
        assert_eq!(insights.best_region.as_deref(), Some("West"));
    }

    #[test]
    fn empty_product_list() {
        let insights = Insights::from_products(&[], 3).unwrap();
        assert!(insights.top_product.is_none());
        assert!(insights.best_region.is_none());
        assert_eq!(insights.total_revenue, 0.0);
        assert_eq!(insights.forecast, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn display_lists_each_insight() {
        let text = Insights::from_products(&products(), 3).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Top Product: Wireless Earbuds (12980.00)");
        assert_eq!(lines[1], "Total Revenue: 28150.00");
        assert_eq!(lines[2], "Best Region: South");
        assert_eq!(lines[3], "Forecast (Next 3 Months): 400, 500, 600");
    }
}

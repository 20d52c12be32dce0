// 📊 Aggregator - Per-customer totals, category revenue, product frequency
//
// Pure function of the grouped orders. Every derived mapping is kept as an
// ordered association list: customers in group order, categories and
// products in first-discovery order. Downstream tie-breaks depend on this.

use crate::error::AnalyticsError;
use crate::grouper::CustomerOrders;
use serde::{Deserialize, Serialize};

// ============================================================================
// AGGREGATES
// ============================================================================

/// Everything derived from one scan over the grouped orders.
///
/// Invariant: the sum of `category_revenue` values, the sum of
/// `customer_totals` values and the sum of `order_prices` are all equal
/// (revenue conservation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    /// (customer, total spend) in first-appearance order
    pub customer_totals: Vec<(String, u64)>,

    /// (category, revenue) in first-discovery order
    pub category_revenue: Vec<(String, u64)>,

    /// (product, order count) in first-discovery order
    pub product_frequency: Vec<(String, usize)>,

    /// Every order price, group order then within-customer order
    pub order_prices: Vec<u64>,
}

impl Aggregates {
    /// Derive all aggregates from the grouped orders in one pass.
    pub fn from_groups(groups: &CustomerOrders) -> Self {
        let mut customer_totals: Vec<(String, u64)> = Vec::new();
        let mut category_revenue: Vec<(String, u64)> = Vec::new();
        let mut product_frequency: Vec<(String, usize)> = Vec::new();
        let mut order_prices: Vec<u64> = Vec::new();

        for (customer, lines) in groups.iter() {
            let mut total: u64 = 0;

            for line in lines {
                total += line.price;
                order_prices.push(line.price);

                bump(&mut category_revenue, &line.category, line.price);
                bump(&mut product_frequency, &line.product, 1);
            }

            customer_totals.push((customer.to_string(), total));
        }

        Aggregates {
            customer_totals,
            category_revenue,
            product_frequency,
            order_prices,
        }
    }

    /// Sum of all order prices.
    pub fn total_revenue(&self) -> u64 {
        self.category_revenue.iter().map(|(_, v)| v).sum()
    }

    /// How many orders were placed for the given product.
    pub fn frequency_of(&self, product: &str) -> usize {
        self.product_frequency
            .iter()
            .find(|(p, _)| p == product)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Distinct categories in first-discovery order.
    pub fn unique_categories(&self) -> impl Iterator<Item = &str> {
        self.category_revenue.iter().map(|(c, _)| c.as_str())
    }

    pub fn unique_product_count(&self) -> usize {
        self.product_frequency.len()
    }

    pub fn highest_order_value(&self) -> Result<u64, AnalyticsError> {
        self.order_prices
            .iter()
            .max()
            .copied()
            .ok_or_else(|| AnalyticsError::empty("highest order value"))
    }

    pub fn lowest_order_value(&self) -> Result<u64, AnalyticsError> {
        self.order_prices
            .iter()
            .min()
            .copied()
            .ok_or_else(|| AnalyticsError::empty("lowest order value"))
    }

    pub fn average_order_value(&self) -> Result<f64, AnalyticsError> {
        if self.order_prices.is_empty() {
            return Err(AnalyticsError::empty("average order value"));
        }
        let sum: u64 = self.order_prices.iter().sum();
        Ok(sum as f64 / self.order_prices.len() as f64)
    }

    pub fn average_spend_per_customer(&self) -> Result<f64, AnalyticsError> {
        if self.customer_totals.is_empty() {
            return Err(AnalyticsError::empty("average spend per customer"));
        }
        let sum: u64 = self.customer_totals.iter().map(|(_, t)| t).sum();
        Ok(sum as f64 / self.customer_totals.len() as f64)
    }
}

/// Add `amount` to `key`'s entry, appending the key on first discovery.
fn bump<T: std::ops::AddAssign + Copy>(list: &mut Vec<(String, T)>, key: &str, amount: T) {
    match list.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v += amount,
        None => list.push((key.to_string(), amount)),
    }
}

// ============================================================================
// TESTS
// ============================================================================

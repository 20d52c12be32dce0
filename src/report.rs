// 📋 Analytics Report - Runs the full pipeline and collects the results
//
// Loader → Grouper → Aggregator → {Classifier, Ranker} feed into one
// serializable result object. Presentation (formatting, currency symbols,
// alignment) is entirely the caller's concern; nothing here formats text.

use crate::aggregator::Aggregates;
use crate::classifier::Tier;
use crate::error::AnalyticsError;
use crate::grouper::CustomerOrders;
use crate::insights;
use crate::model::OrderRecord;
use serde::{Deserialize, Serialize};

/// How many customers the top-spender ranking keeps.
pub const TOP_CUSTOMER_COUNT: usize = 3;

// ============================================================================
// SUMMARY STATISTICS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_revenue: u64,
    pub customer_count: usize,
    pub order_count: usize,
    pub unique_product_count: usize,
    pub high_value_count: usize,
    pub medium_value_count: usize,
    pub low_value_count: usize,
    pub average_spend_per_customer: f64,
    pub highest_order_value: u64,
    pub lowest_order_value: u64,
    pub average_order_value: f64,
}

// ============================================================================
// ANALYTICS REPORT
// ============================================================================

/// The complete output of one pipeline run over an order dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// (customer, total spend) in first-appearance order
    pub customer_totals: Vec<(String, u64)>,

    /// (customer, tier) in first-appearance order
    pub classification: Vec<(String, Tier)>,

    /// (category, revenue) in first-discovery order
    pub category_revenue: Vec<(String, u64)>,

    /// Top spenders, descending, stable on ties
    pub top_customers: Vec<(String, u64)>,

    pub most_frequent_product: String,
    pub most_profitable_category: String,
    pub most_active_customer: String,

    /// Customers buying from more than one category
    pub multi_category_customers: Vec<String>,

    /// Customers buying both Electronics and Clothing
    pub electronics_and_clothing_customers: Vec<String>,

    /// Customers with at least one Electronics order
    pub electronics_customers: Vec<String>,

    /// Favorite category of the top spenders
    pub top_category_among_top_customers: String,

    pub summary: SummaryStats,
}

impl AnalyticsReport {
    /// Run the whole pipeline over a source sequence of orders.
    ///
    /// Fails with `EmptyInput` when `orders` is empty (the rankings and
    /// order-value extrema have no defined result) and `MalformedRecord`
    /// when a record fails validation.
    pub fn build(orders: &[OrderRecord]) -> Result<Self, AnalyticsError> {
        let groups = CustomerOrders::group(orders)?;
        let agg = Aggregates::from_groups(&groups);

        let classification: Vec<(String, Tier)> = agg
            .customer_totals
            .iter()
            .map(|(name, total)| (name.clone(), Tier::classify(*total as f64)))
            .collect();

        let top_customers = insights::top_customers(&agg, TOP_CUSTOMER_COUNT)?;
        let top_names: Vec<String> = top_customers.iter().map(|(name, _)| name.clone()).collect();

        let tier_count =
            |tier: Tier| classification.iter().filter(|(_, t)| *t == tier).count();

        let summary = SummaryStats {
            total_revenue: agg.total_revenue(),
            customer_count: groups.customer_count(),
            order_count: groups.order_count(),
            unique_product_count: agg.unique_product_count(),
            high_value_count: tier_count(Tier::HighValue),
            medium_value_count: tier_count(Tier::MediumValue),
            low_value_count: tier_count(Tier::LowValue),
            average_spend_per_customer: agg.average_spend_per_customer()?,
            highest_order_value: agg.highest_order_value()?,
            lowest_order_value: agg.lowest_order_value()?,
            average_order_value: agg.average_order_value()?,
        };

        Ok(AnalyticsReport {
            most_frequent_product: insights::most_frequent_product(&agg)?,
            most_profitable_category: insights::most_profitable_category(&agg)?,
            most_active_customer: insights::most_active_customer(&agg)?,
            multi_category_customers: insights::multi_category_customers(&groups),
            electronics_and_clothing_customers: insights::customers_with_categories(
                &groups,
                &["Electronics", "Clothing"],
            ),
            electronics_customers: insights::customers_in_category(&groups, "Electronics"),
            top_category_among_top_customers: insights::top_category_among(
                &groups, &agg, &top_names,
            )?,
            customer_totals: agg.customer_totals,
            classification,
            category_revenue: agg.category_revenue,
            top_customers,
            summary,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demo_orders;

    #[test]
    fn test_demo_scenario() {
        let report = AnalyticsReport::build(&demo_orders()).unwrap();

        let roshan_total = report
            .customer_totals
            .iter()
            .find(|(name, _)| name == "Roshan")
            .unwrap()
            .1;
        assert_eq!(roshan_total, 2400);

        let roshan_tier = report
            .classification
            .iter()
            .find(|(name, _)| name == "Roshan")
            .unwrap()
            .1;
        assert_eq!(roshan_tier, Tier::HighValue);

        assert_eq!(
            report.top_customers,
            vec![
                ("Roshan".to_string(), 2400),
                ("Rahul".to_string(), 1200),
                ("Renu".to_string(), 180),
            ]
        );

        assert_eq!(report.most_frequent_product, "Shirt");
        assert_eq!(report.most_profitable_category, "Electronics");
        assert_eq!(report.most_active_customer, "Roshan");
        assert_eq!(report.top_category_among_top_customers, "Electronics");

        assert_eq!(report.multi_category_customers, vec!["Roshan".to_string()]);
        assert_eq!(
            report.electronics_and_clothing_customers,
            vec!["Roshan".to_string()]
        );
        assert_eq!(
            report.electronics_customers,
            vec!["Roshan".to_string(), "Rahul".to_string(), "Sita".to_string()]
        );
    }

    #[test]
    fn test_demo_summary() {
        let report = AnalyticsReport::build(&demo_orders()).unwrap();
        let s = &report.summary;

        assert_eq!(s.total_revenue, 4330);
        assert_eq!(s.customer_count, 10);
        assert_eq!(s.order_count, 11);
        assert_eq!(s.unique_product_count, 10);
        assert_eq!(s.high_value_count, 5);
        assert_eq!(s.medium_value_count, 2);
        assert_eq!(s.low_value_count, 3);
        assert_eq!(s.highest_order_value, 1700);
        assert_eq!(s.lowest_order_value, 25);
        assert!((s.average_spend_per_customer - 433.0).abs() < 1e-9);
        assert!((s.average_order_value - 4330.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let orders = demo_orders();
        let first = AnalyticsReport::build(&orders).unwrap();
        let second = AnalyticsReport::build(&orders).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = AnalyticsReport::build(&[]).unwrap_err();
        assert!(matches!(err, AnalyticsError::EmptyInput(_)));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = AnalyticsReport::build(&demo_orders()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"High-Value\""));
        assert!(json.contains("\"total_revenue\":4330"));

        let back: AnalyticsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}

// 👥 Grouper - Partitions orders by customer, insertion order preserved
//
// First stage of the pipeline. Customers appear in first-encounter order,
// and each customer's orders keep their source order, so every later
// tie-break that says "first appearance wins" is decided right here.

use crate::error::AnalyticsError;
use crate::model::OrderRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// ORDER LINE
// ============================================================================

/// One order as seen inside a customer's group (the customer key is the
/// group itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: String,
    pub price: u64,
    pub category: String,
}

// ============================================================================
// CUSTOMER ORDERS
// ============================================================================

/// Orders grouped by customer.
///
/// Backed by an association list so that iteration order is exactly
/// first-appearance order, with a side index for name lookup. Built once,
/// then read-only.
#[derive(Debug, Clone)]
pub struct CustomerOrders {
    /// (customer, orders) pairs in first-appearance order
    groups: Vec<(String, Vec<OrderLine>)>,

    /// customer name → position in `groups`
    index: HashMap<String, usize>,
}

impl CustomerOrders {
    /// Group a source sequence of orders by customer.
    ///
    /// Records are validated on the way in; an empty input yields an empty
    /// grouping, which is not an error at this stage.
    pub fn group(orders: &[OrderRecord]) -> Result<Self, AnalyticsError> {
        let mut groups: Vec<(String, Vec<OrderLine>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, order) in orders.iter().enumerate() {
            order.validate(i)?;

            let line = OrderLine {
                product: order.product.clone(),
                price: order.price,
                category: order.category.clone(),
            };

            match index.get(&order.customer) {
                Some(&pos) => groups[pos].1.push(line),
                None => {
                    index.insert(order.customer.clone(), groups.len());
                    groups.push((order.customer.clone(), vec![line]));
                }
            }
        }

        Ok(CustomerOrders { groups, index })
    }

    /// Iterate (customer, orders) in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[OrderLine])> {
        self.groups
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice()))
    }

    /// Orders for one customer, if present.
    pub fn get(&self, customer: &str) -> Option<&[OrderLine]> {
        self.index
            .get(customer)
            .map(|&pos| self.groups[pos].1.as_slice())
    }

    /// Number of distinct customers.
    pub fn customer_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of orders across all groups.
    pub fn order_count(&self) -> usize {
        self.groups.iter().map(|(_, lines)| lines.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
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
    fn test_grouping_preserves_order_count() {
        let orders = demo_orders();
        let grouped = CustomerOrders::group(&orders).unwrap();
        assert_eq!(grouped.order_count(), orders.len());
    }

    #[test]
    fn test_customers_in_first_appearance_order() {
        let grouped = CustomerOrders::group(&demo_orders()).unwrap();
        let names: Vec<&str> = grouped.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "Roshan", "Rupesh", "Karan", "Sytam", "Rahul", "Ravi", "Naha", "Sita", "Rubi",
                "Renu"
            ]
        );
    }

    #[test]
    fn test_repeat_customer_keeps_source_order() {
        let grouped = CustomerOrders::group(&demo_orders()).unwrap();
        let roshan = grouped.get("Roshan").unwrap();
        assert_eq!(roshan.len(), 2);
        assert_eq!(roshan[0].product, "Smartphone");
        assert_eq!(roshan[1].product, "Shirt");
        assert_eq!(roshan[1].price, 1700);
    }

    #[test]
    fn test_empty_input_yields_empty_grouping() {
        let grouped = CustomerOrders::group(&[]).unwrap();
        assert!(grouped.is_empty());
        assert_eq!(grouped.customer_count(), 0);
        assert_eq!(grouped.order_count(), 0);
    }

    #[test]
    fn test_malformed_record_is_rejected() {
        let orders = vec![crate::model::OrderRecord::new("", "Laptop", 10, "Electronics")];
        let err = CustomerOrders::group(&orders).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AnalyticsError::MalformedRecord { index: 0, .. }
        ));
    }

    #[test]
    fn test_unknown_customer_lookup() {
        let grouped = CustomerOrders::group(&demo_orders()).unwrap();
        assert!(grouped.get("Nobody").is_none());
    }
}

// 🛒 Order Records - Immutable input data for the analytics pipeline
//
// In production the loader would be backed by a file, API or database
// query; here it supplies a fixed demo dataset. The core only ever sees
// a finite ordered slice of records.

use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};

// ============================================================================
// ORDER RECORD
// ============================================================================

/// A single customer order. Created once at load time, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Customer name (e.g., "Roshan")
    pub customer: String,

    /// Product name (e.g., "Smartphone")
    pub product: String,

    /// Order price in whole currency units. Non-negative by type.
    pub price: u64,

    /// Product category (e.g., "Electronics")
    pub category: String,
}

impl OrderRecord {
    pub fn new(customer: &str, product: &str, price: u64, category: &str) -> Self {
        OrderRecord {
            customer: customer.to_string(),
            product: product.to_string(),
            price,
            category: category.to_string(),
        }
    }

    /// Defensive validation applied once at grouping time.
    ///
    /// The price field cannot be negative by construction, so the only
    /// malformed shapes left are empty identifying strings.
    pub fn validate(&self, index: usize) -> Result<(), AnalyticsError> {
        let reason = if self.customer.trim().is_empty() {
            Some("customer name is empty")
        } else if self.product.trim().is_empty() {
            Some("product name is empty")
        } else if self.category.trim().is_empty() {
            Some("category is empty")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(AnalyticsError::MalformedRecord {
                index,
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

// ============================================================================
// DEMO DATASET
// ============================================================================

/// The built-in 11-order demo dataset the report CLI runs against.
pub fn demo_orders() -> Vec<OrderRecord> {
    vec![
        OrderRecord::new("Roshan", "Smartphone", 700, "Electronics"),
        OrderRecord::new("Rupesh", "Jacket", 120, "Clothing"),
        OrderRecord::new("Karan", "T-shirt", 25, "Clothing"),
        OrderRecord::new("Sytam", "Jeans", 45, "Clothing"),
        OrderRecord::new("Rahul", "Laptop", 1200, "Electronics"),
        OrderRecord::new("Ravi", "Blender", 80, "Home Essentials"),
        OrderRecord::new("Naha", "Microwave", 150, "Home Essentials"),
        OrderRecord::new("Sita", "Headphones", 90, "Electronics"),
        OrderRecord::new("Rubi", "Shirt", 40, "Clothing"),
        OrderRecord::new("Renu", "Vacuum Cleaner", 180, "Home Essentials"),
        OrderRecord::new("Roshan", "Shirt", 1700, "Clothing"),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_size() {
        assert_eq!(demo_orders().len(), 11);
    }

    #[test]
    fn test_demo_dataset_is_well_formed() {
        for (i, order) in demo_orders().iter().enumerate() {
            assert!(order.validate(i).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_empty_customer() {
        let order = OrderRecord::new("", "Laptop", 1200, "Electronics");
        let err = order.validate(4).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::MalformedRecord {
                index: 4,
                reason: "customer name is empty".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_blank_category() {
        let order = OrderRecord::new("Ravi", "Blender", 80, "   ");
        assert!(order.validate(0).is_err());
    }
}

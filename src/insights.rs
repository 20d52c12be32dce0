// 🔎 Insights - Rankings and affinity selections over the aggregates
//
// Every selector is a pure derivation. Ties are always broken by
// first-appearance order (customers, products) or first-discovery order
// (categories): iteration walks the ordered aggregates and only a strictly
// greater value displaces the current winner.

use crate::aggregator::Aggregates;
use crate::error::AnalyticsError;
use crate::grouper::CustomerOrders;

// ============================================================================
// RANKINGS
// ============================================================================

/// Top `n` customers by total spend, descending, stable on ties.
pub fn top_customers(agg: &Aggregates, n: usize) -> Result<Vec<(String, u64)>, AnalyticsError> {
    if agg.customer_totals.is_empty() {
        return Err(AnalyticsError::empty("top customers"));
    }

    let mut ranked = agg.customer_totals.clone();
    // Stable sort keeps first-appearance order among equal totals
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    Ok(ranked)
}

/// The product with the most orders across all customers.
pub fn most_frequent_product(agg: &Aggregates) -> Result<String, AnalyticsError> {
    max_by_value(&agg.product_frequency)
        .ok_or_else(|| AnalyticsError::empty("most frequent product"))
}

/// The category with the highest revenue.
pub fn most_profitable_category(agg: &Aggregates) -> Result<String, AnalyticsError> {
    max_by_value(&agg.category_revenue)
        .ok_or_else(|| AnalyticsError::empty("most profitable category"))
}

/// The customer with the highest total spend.
pub fn most_active_customer(agg: &Aggregates) -> Result<String, AnalyticsError> {
    max_by_value(&agg.customer_totals)
        .ok_or_else(|| AnalyticsError::empty("most active customer"))
}

// ============================================================================
// AFFINITY SELECTIONS
// ============================================================================

/// Customers whose orders span more than one distinct category.
pub fn multi_category_customers(groups: &CustomerOrders) -> Vec<String> {
    groups
        .iter()
        .filter(|(_, lines)| distinct_categories(lines).len() > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Customers whose order categories cover every category in `required`.
pub fn customers_with_categories(groups: &CustomerOrders, required: &[&str]) -> Vec<String> {
    groups
        .iter()
        .filter(|(_, lines)| {
            let own = distinct_categories(lines);
            required.iter().all(|r| own.iter().any(|c| c == r))
        })
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Customers with at least one order in `category`, in group order.
pub fn customers_in_category(groups: &CustomerOrders, category: &str) -> Vec<String> {
    groups
        .iter()
        .filter(|(_, lines)| lines.iter().any(|line| line.category == category))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Among all discovered categories, the one with the most orders placed by
/// the given customers. Tie-break is category first-discovery order.
pub fn top_category_among(
    groups: &CustomerOrders,
    agg: &Aggregates,
    customers: &[String],
) -> Result<String, AnalyticsError> {
    let counted: Vec<(String, usize)> = agg
        .unique_categories()
        .map(|category| {
            let count = customers
                .iter()
                .filter_map(|name| groups.get(name))
                .flatten()
                .filter(|line| line.category == category)
                .count();
            (category.to_string(), count)
        })
        .collect();

    max_by_value(&counted).ok_or_else(|| AnalyticsError::empty("top category among top customers"))
}

// ============================================================================
// HELPERS
// ============================================================================

/// Key of the strictly greatest value; earlier entries win ties.
fn max_by_value<T: PartialOrd + Copy>(list: &[(String, T)]) -> Option<String> {
    let mut best: Option<(&str, T)> = None;
    for (key, value) in list {
        match best {
            Some((_, top)) if *value <= top => {}
            _ => best = Some((key, *value)),
        }
    }
    best.map(|(key, _)| key.to_string())
}

fn distinct_categories(lines: &[crate::grouper::OrderLine]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for line in lines {
        if !seen.contains(&line.category.as_str()) {
            seen.push(&line.category);
        }
    }
    seen
}

// ============================================================================
// TESTS
// ============================================================================

// Report CLI - runs the pipeline over the demo dataset and prints it.
// The library never formats text; everything presentational lives here.

use anyhow::{Context, Result};
use std::env;

use order_analytics::{demo_orders, AnalyticsReport};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let orders = demo_orders();
    let report = AnalyticsReport::build(&orders)
        .context("failed to compute order analytics")?;

    if args.len() > 1 && args[1] == "json" {
        // JSON mode (for piping into other tools)
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &AnalyticsReport) {
    println!("================ CUSTOMER SUMMARY ================\n");
    for (name, total) in &report.customer_totals {
        let tier = report
            .classification
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_str())
            .unwrap_or("?");
        println!("Customer: {:<10}  Total Spent: ${:<6}  Tier: {}", name, total, tier);
    }

    println!("\n================ CATEGORY REVENUE ================\n");
    for (category, revenue) in &report.category_revenue {
        println!("{:<20}: ${}", category, revenue);
    }

    println!("\n================ TOP CUSTOMERS ================\n");
    for (name, total) in &report.top_customers {
        println!("{}: ${}", name, total);
    }

    println!(
        "\nCustomers Who Bought From Multiple Categories: {:?}",
        report.multi_category_customers
    );
    println!(
        "Customers Who Bought Electronics & Clothing: {:?}",
        report.electronics_and_clothing_customers
    );

    let s = &report.summary;
    println!("\n================ BUSINESS INSIGHTS ================\n");
    println!("Total Revenue: ${}", s.total_revenue);
    println!("Most Profitable Category: {}", report.most_profitable_category);
    println!("Most Frequently Purchased Product: {}", report.most_frequent_product);
    println!("Most Active Customer: {}", report.most_active_customer);
    println!("Total Unique Products Sold: {}", s.unique_product_count);
    println!(
        "Most Popular Category Among Top Customers: {}",
        report.top_category_among_top_customers
    );
    println!("Electronics Customers: {:?}", report.electronics_customers);
    println!("Average Spending Per Customer: ${:.2}", s.average_spend_per_customer);
    println!("Total Unique Customers: {}", s.customer_count);
    println!("Total Orders: {}", s.order_count);
    println!("High-Value Customers: {}", s.high_value_count);
    println!("Medium-Value Customers: {}", s.medium_value_count);
    println!("Low-Value Customers: {}", s.low_value_count);
    println!("Highest Single Order Value: ${}", s.highest_order_value);
    println!("Lowest Single Order Value: ${}", s.lowest_order_value);
    println!("Average Order Value: ${:.2}", s.average_order_value);

    println!("\n================ END OF REPORT ================");
}

// Customer Order Analytics - Core Library
// Exposes the pipeline stages for use in the CLI and tests

pub mod error;
pub mod model;       // Loader: order records + demo dataset
pub mod grouper;     // Stage 1: partition orders by customer
pub mod aggregator;  // Stage 2: totals, category revenue, frequencies
pub mod classifier;  // Stage 3: spend tiers
pub mod insights;    // Stage 4: rankings and affinity selections
pub mod report;      // Pipeline assembly + result object

// Re-export commonly used types
pub use aggregator::Aggregates;
pub use classifier::Tier;
pub use error::AnalyticsError;
pub use grouper::{CustomerOrders, OrderLine};
pub use model::{demo_orders, OrderRecord};
pub use report::{AnalyticsReport, SummaryStats, TOP_CUSTOMER_COUNT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

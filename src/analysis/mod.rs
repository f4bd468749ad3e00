pub mod aggregate;
pub mod group_stats;
pub mod metric;
pub mod model;

pub use aggregate::{aggregate, overall_winrate, SummaryRow};
pub use metric::Metric;

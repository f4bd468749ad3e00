pub mod chart;
pub mod output;

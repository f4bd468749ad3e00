pub mod dataset;
pub mod record;

pub use dataset::{Dataset, LoadReport};
pub use record::Record;

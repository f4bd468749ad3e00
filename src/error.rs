use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown metric: {0} (expected one of gold, dragon, baron, towers, kills, vision)")]
    UnknownMetric(String),

    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    #[error("Failed to read dataset {path}: {reason}")]
    DatasetError { path: String, reason: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

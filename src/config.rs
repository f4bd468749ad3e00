use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATASET: &str = "lol_team_clean.csv";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset: PathBuf,
    pub export_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let dataset = env::var("EARLY_EDGE_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET));

        let export_dir = match env::var("EARLY_EDGE_EXPORT_DIR") {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(AppError::ConfigError(
                    "EARLY_EDGE_EXPORT_DIR is set but empty".to_string(),
                ));
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => Self::default_export_dir(),
        };

        let log_filter =
            env::var("EARLY_EDGE_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            dataset,
            export_dir,
            log_filter,
        })
    }

    pub fn default_export_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".early_edge")
    }
}

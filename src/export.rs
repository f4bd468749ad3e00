use crate::analysis::Metric;
use crate::controller::ChartView;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Chart payload for an external front-end.
#[derive(Debug, Serialize)]
pub struct ChartExport<'a> {
    #[serde(flatten)]
    pub view: &'a ChartView,
    pub generated_at: DateTime<Utc>,
}

impl<'a> ChartExport<'a> {
    pub fn new(view: &'a ChartView) -> Self {
        ChartExport {
            view,
            generated_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize chart: {}", e)))
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), metric = %self.view.metric, "chart exported");
        Ok(())
    }
}

pub fn default_export_path(dir: &Path, metric: Metric) -> PathBuf {
    dir.join(format!("{}.json", metric.id()))
}

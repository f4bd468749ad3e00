use crate::analysis::{aggregate, model, overall_winrate, Metric, SummaryRow};
use crate::data::Dataset;
use crate::error::AppError;
use serde::Serialize;
use tracing::debug;

/// Everything the renderer needs to draw one metric's chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub metric: Metric,
    pub title: &'static str,
    pub description: &'static str,
    pub overall_winrate: f64,
    pub rows: Vec<SummaryRow>,
}

/// Built after the dataset has loaded; holds it read-only.
pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    baseline: f64,
}

impl<'a> Dashboard<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        let baseline = overall_winrate(dataset.records());
        Dashboard { dataset, baseline }
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn select(&self, metric: Metric) -> ChartView {
        debug!(%metric, "metric selected");
        ChartView {
            metric,
            title: metric.title(),
            description: metric.description(),
            overall_winrate: self.baseline,
            rows: aggregate(self.dataset.records(), &metric.strategy()),
        }
    }

    /// Selection by identifier; an unknown identifier is a caller error.
    pub fn select_by_id(&self, id: &str) -> Result<ChartView, AppError> {
        Ok(self.select(id.parse()?))
    }
}

/// Caption band for a rounded win percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outlook {
    Behind,
    Even,
    Ahead,
}

impl Outlook {
    pub fn from_percent(pct: u32) -> Self {
        if pct < 40 {
            Outlook::Behind
        } else if pct <= 60 {
            Outlook::Even
        } else {
            Outlook::Ahead
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Outlook::Behind => "Your team is statistically behind based on the first 10 minutes, but comebacks are still possible.",
            Outlook::Even => "The game is relatively even at 10 minutes. Small decisions and teamfights can swing the outcome.",
            Outlook::Ahead => "Your team has a strong early lead. Historically, teams in this position convert their advantage into a win.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimInputs {
    pub gold_diff_10: f64,
    pub kills_diff_10: i64,
    pub first_dragon: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimReading {
    pub probability: f64,
    pub percent: u32,
    pub outlook: Outlook,
}

pub struct Simulator;

impl Simulator {
    pub fn evaluate(inputs: SimInputs) -> SimReading {
        let probability = model::predict(
            inputs.gold_diff_10,
            inputs.kills_diff_10,
            inputs.first_dragon,
        );
        let percent = to_percent(probability);
        SimReading {
            probability,
            percent,
            outlook: Outlook::from_percent(percent),
        }
    }
}

/// Probability as a whole percentage, halves rounded up.
pub fn to_percent(probability: f64) -> u32 {
    (probability * 100.0 + 0.5).floor().clamp(0.0, 100.0) as u32
}

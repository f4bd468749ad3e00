mod analysis;
mod config;
mod controller;
mod data;
mod display;
mod error;
mod export;

use analysis::Metric;
use clap::{Parser, Subcommand};
use config::Config;
use controller::{Dashboard, SimInputs, Simulator};
use data::Dataset;
use display::chart::draw_chart;
use display::output::{
    display_error, display_info, display_load_report, display_prediction, display_success,
    display_tooltips,
};
use error::AppError;
use export::{default_export_path, ChartExport};
use indicatif::ProgressBar;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Early Edge")]
#[command(about = "How early-game stats relate to winning, plus a 10-minute win probability calculator", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Win rate chart for one metric
    Chart {
        /// gold, dragon, baron, towers, kills or vision
        metric: String,

        /// Team-match CSV (default: $EARLY_EDGE_DATASET or lol_team_clean.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Baseline plus the chart for every metric
    Overview {
        /// Team-match CSV (default: $EARLY_EDGE_DATASET or lol_team_clean.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Win probability from the state of the game at 10 minutes
    Predict {
        /// Gold difference at 10 minutes
        #[arg(short, long, allow_hyphen_values = true, default_value = "0", value_parser = parse_finite)]
        gold: f64,

        /// Kill difference at 10 minutes
        #[arg(short, long, allow_hyphen_values = true, default_value = "0")]
        kills: i64,

        /// Your team took the first dragon
        #[arg(long)]
        first_dragon: bool,
    },

    /// Write one metric's chart data as JSON
    Export {
        /// gold, dragon, baron, towers, kills or vision
        metric: String,

        /// Team-match CSV (default: $EARLY_EDGE_DATASET or lol_team_clean.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output file (default: ~/.early_edge/<metric>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    if let Err(e) = run(args, config) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args, config: Config) -> Result<(), AppError> {
    match args.command {
        Command::Chart { metric, data } => {
            let dataset = load_dataset(data.as_deref().unwrap_or(config.dataset.as_path()))?;
            let dashboard = Dashboard::new(&dataset);

            let view = dashboard.select_by_id(&metric)?;
            draw_chart(&view);
            display_tooltips(&view);
        }
        Command::Overview { data } => {
            let dataset = load_dataset(data.as_deref().unwrap_or(config.dataset.as_path()))?;
            let dashboard = Dashboard::new(&dataset);

            for metric in Metric::ALL {
                draw_chart(&dashboard.select(metric));
            }
        }
        Command::Predict {
            gold,
            kills,
            first_dragon,
        } => {
            let inputs = SimInputs {
                gold_diff_10: gold,
                kills_diff_10: kills,
                first_dragon,
            };
            display_prediction(inputs, Simulator::evaluate(inputs));
        }
        Command::Export {
            metric,
            data,
            output,
        } => {
            let dataset = load_dataset(data.as_deref().unwrap_or(config.dataset.as_path()))?;
            let dashboard = Dashboard::new(&dataset);

            let view = dashboard.select_by_id(&metric)?;
            let path =
                output.unwrap_or_else(|| default_export_path(&config.export_dir, view.metric));
            ChartExport::new(&view).save(&path)?;
            display_success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}

fn parse_finite(arg: &str) -> Result<f64, String> {
    let value: f64 = arg.trim().parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("expected a finite number, got {}", arg))
    }
}

/// Loads the dataset once; everything after works on the returned value.
fn load_dataset(path: &Path) -> Result<Dataset, AppError> {
    display_info(&format!("Loading {}", path.display()));

    let pb = ProgressBar::new_spinner();
    pb.set_message("Parsing team-match rows");
    pb.enable_steady_tick(Duration::from_millis(100));

    let dataset = Dataset::load(path);
    pb.finish_and_clear();

    let dataset = dataset?;
    let baseline = analysis::overall_winrate(dataset.records());
    display_load_report(dataset.report(), baseline);
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_input_must_be_finite() {
        assert_eq!(parse_finite("-1500"), Ok(-1500.0));
        assert!(parse_finite("NaN").is_err());
        assert!(parse_finite("inf").is_err());
        assert!(parse_finite("-infinity").is_err());
        assert!(parse_finite("lots").is_err());
    }

    #[test]
    fn predict_rejects_non_finite_gold() {
        let err = Args::try_parse_from(["early_edge", "predict", "--gold", "NaN"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let args = Args::try_parse_from(["early_edge", "predict", "--gold", "-2500", "--kills", "-3"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Predict { gold, kills: -3, first_dragon: false } if gold == -2500.0
        ));
    }

    #[test]
    fn chart_metric_is_checked_after_parsing() {
        let args = Args::try_parse_from(["early_edge", "chart", "wards"]).unwrap();
        assert!(matches!(args.command, Command::Chart { ref metric, .. } if metric == "wards"));
    }
}

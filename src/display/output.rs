use super::chart::format_winrate;
use crate::controller::{ChartView, Outlook, SimInputs, SimReading};
use crate::data::LoadReport;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct TooltipRow {
    #[tabled(rename = "Group")]
    heading: String,
    #[tabled(rename = "Win rate")]
    win_rate: String,
    #[tabled(rename = "Games")]
    games: String,
}

fn tooltip_rows(view: &ChartView) -> Vec<TooltipRow> {
    view.rows
        .iter()
        .map(|row| TooltipRow {
            heading: view.metric.bar_heading(&row.label),
            win_rate: format_winrate(row.winrate),
            games: row.count.to_string(),
        })
        .collect()
}

pub fn display_tooltips(view: &ChartView) {
    if view.rows.is_empty() {
        return;
    }

    let mut table = Table::new(tooltip_rows(view));
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_load_report(report: LoadReport, baseline: f64) {
    display_success(&format!("Loaded {} team-match rows", report.loaded));
    if report.skipped > 0 {
        println!(
            "{} {} rows skipped (win flag not 0/1)",
            "⚠️".yellow(),
            report.skipped
        );
    }
    println!(
        "{} {}\n",
        "📈 Overall win rate:".bold(),
        format_winrate(baseline)
    );
}

pub fn display_prediction(inputs: SimInputs, reading: SimReading) {
    println!("\n{}", "🎲 WIN PROBABILITY @ 10 MIN".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    println!("  Gold difference:  {:+}", inputs.gold_diff_10);
    println!("  Kill difference:  {:+}", inputs.kills_diff_10);
    println!(
        "  First dragon:     {}",
        if inputs.first_dragon { "yes" } else { "no" }
    );

    let pct = format!("{}%", reading.percent);
    let pct = match reading.outlook {
        Outlook::Behind => pct.red(),
        Outlook::Even => pct.yellow(),
        Outlook::Ahead => pct.green(),
    };
    println!(
        "\n  {} {} {}",
        "Win probability:".bold(),
        pct.bold(),
        format!("(p = {:.4})", reading.probability).dimmed()
    );
    println!("  {}\n", reading.outlook.caption());
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

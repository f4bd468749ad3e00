use crate::controller::ChartView;
use colored::*;

/// Width of a 100% bar in terminal cells.
pub const BAR_WIDTH: usize = 40;

const FILL: char = '█';
const BASELINE: char = '┆';
const BASELINE_ON_BAR: char = '┃';

fn scale(winrate: f64) -> usize {
    (winrate.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize
}

/// One-decimal percentage used for bar values and tooltips.
pub fn format_winrate(winrate: f64) -> String {
    format!("{:.1}%", winrate * 100.0)
}

/// Whole-number percentage used for the baseline legend.
pub fn format_baseline(winrate: f64) -> String {
    format!("Overall ≈ {:.0}%", winrate * 100.0)
}

fn bar(winrate: f64, baseline_col: usize) -> String {
    let filled = scale(winrate);
    (0..BAR_WIDTH)
        .map(|col| match (col < filled, col == baseline_col) {
            (true, true) => BASELINE_ON_BAR,
            (true, false) => FILL,
            (false, true) => BASELINE,
            (false, false) => ' ',
        })
        .collect()
}

/// Plain-text chart body: one line per row plus the baseline legend.
pub fn render_bars(view: &ChartView) -> Vec<String> {
    let label_width = view
        .rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);
    let baseline_col = scale(view.overall_winrate).min(BAR_WIDTH - 1);

    let mut lines: Vec<String> = view
        .rows
        .iter()
        .map(|row| {
            format!(
                "{:>lw$} │{}│ {:>6} (n={})",
                row.label,
                bar(row.winrate, baseline_col),
                format_winrate(row.winrate),
                row.count,
                lw = label_width
            )
        })
        .collect();

    lines.push(format!(
        "{:>lw$}  {}^ {}",
        "",
        " ".repeat(baseline_col),
        format_baseline(view.overall_winrate),
        lw = label_width
    ));
    lines
}

pub fn draw_chart(view: &ChartView) {
    println!("\n{}", view.title.bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());
    println!("{}\n", view.description.dimmed());

    if view.rows.is_empty() {
        println!("{}", "No rows with a value for this metric".yellow());
        return;
    }

    let lines = render_bars(view);
    if let Some((legend, body)) = lines.split_last() {
        for line in body {
            println!("{}", line.blue());
        }
        println!("{}\n", legend.bright_black());
    }
}

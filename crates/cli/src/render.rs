use crate::session::SessionState;
use tracker_core::domain::quote::Series;
use tracker_core::domain::recommendation::Recommendation;
use tracker_core::predict;

const CHART_HEIGHT: usize = 10;

/// One panel per UI phase; the phases are mutually exclusive by
/// construction of `SessionState`.
pub fn panel_for(state: &SessionState) -> String {
    match state {
        SessionState::Idle => instructions(),
        SessionState::Loading => loading(),
        SessionState::Failed(message) => error_panel(message),
        SessionState::Loaded(series) => results(series, predict::recommend(series)),
    }
}

pub fn instructions() -> String {
    "Enter a stock symbol (e.g., AAPL, MSFT, TSLA) to view its performance".to_string()
}

pub fn loading() -> String {
    "Loading...".to_string()
}

pub fn error_panel(message: &str) -> String {
    format!("Error:\n  {message}")
}

/// Header, chart, and the recommendation block. The block is omitted when
/// the predictor has nothing to say (empty series).
pub fn results(series: &Series, recommendation: Option<Recommendation>) -> String {
    let mut out = format!("{} - Last 30 Days\n\n", series.symbol());
    out.push_str(&line_chart(series, CHART_HEIGHT));

    if let Some(rec) = recommendation {
        out.push_str(&format!("\nInvestment Recommendation:\n  {rec}\n"));
    }
    out
}

/// Plain-text line chart: one column per quote, y-axis scaled to the
/// series min/max, x-axis labeled with the first and last dates.
pub fn line_chart(series: &Series, height: usize) -> String {
    let quotes = series.quotes();
    if quotes.is_empty() {
        return "(no data points in window)\n".to_string();
    }

    let closes = series.closes();
    let min = closes.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = closes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let height = height.max(1);

    let max_label = format!("{max:.2}");
    let min_label = format!("{min:.2}");
    let label_width = max_label.len().max(min_label.len());

    let mut grid = vec![vec![' '; quotes.len()]; height];
    for (col, close) in closes.iter().enumerate() {
        // Flat series sits on the middle row.
        let row = if max == min {
            height / 2
        } else {
            let t = (close - min) / (max - min);
            ((1.0 - t) * (height - 1) as f64).round() as usize
        };
        grid[row][col] = '*';
    }

    let mut out = String::new();
    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            max_label.as_str()
        } else if i == height - 1 {
            min_label.as_str()
        } else {
            ""
        };
        let mut line = format!("{label:>label_width$} |");
        line.extend(row.iter());
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&format!(
        "{:>w$} +{}\n",
        "",
        "-".repeat(quotes.len()),
        w = label_width
    ));

    let first = quotes.first().map(|q| q.date).unwrap_or_default();
    let last = quotes.last().map(|q| q.date).unwrap_or_default();
    let axis = if first == last {
        first.to_string()
    } else {
        let left = first.to_string();
        let right = last.to_string();
        if quotes.len() >= left.len() + right.len() + 2 {
            let gap = quotes.len() - left.len() - right.len();
            format!("{left}{}{right}", " ".repeat(gap))
        } else {
            format!("{left} .. {right}")
        }
    };
    out.push_str(&format!("{:>w$}  {axis}\n", "", w = label_width));

    out
}

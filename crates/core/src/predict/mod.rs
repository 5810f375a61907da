use crate::domain::quote::Series;
use crate::domain::recommendation::Recommendation;

/// Compare the most recent close against the window mean.
///
/// Strictly above the mean reads as upward momentum (`Hold/Buy`);
/// everything else, a tie included, reads as `Sell`. An empty series
/// yields no recommendation and the renderer omits the block.
pub fn recommend(series: &Series) -> Option<Recommendation> {
    let last = series.last_close()?;
    let mean = mean_close(series)?;

    if last > mean {
        Some(Recommendation::HoldBuy)
    } else {
        Some(Recommendation::Sell)
    }
}

fn mean_close(series: &Series) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    let closes = series.closes();
    Some(closes.iter().sum::<f64>() / closes.len() as f64)
}

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::fmt;

/// Trailing window length for the end-of-day fetch, in calendar days.
pub const EOD_WINDOW_DAYS: i64 = 30;

/// Inclusive calendar date range sent to the quotes endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// `date_from` query value, `YYYY-MM-DD`.
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// `date_to` query value, `YYYY-MM-DD`.
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_param(), self.end_param())
    }
}

/// Window ending on the current UTC date and starting `days` calendar days
/// earlier. The clock is injected so callers and tests pin exact dates.
pub fn trailing_window(now_utc: DateTime<Utc>, days: i64) -> DateWindow {
    let end = now_utc.date_naive();
    DateWindow {
        start: end - Duration::days(days),
        end,
    }
}

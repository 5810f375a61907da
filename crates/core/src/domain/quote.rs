use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day's end-of-day record for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub date: NaiveDate,
    pub close: f64,
}

/// Chronologically ordered quotes for one symbol over a fetch window.
///
/// A series only ever comes from a single successful provider response;
/// there is no partial or incremental population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    symbol: String,
    quotes: Vec<Quote>,
}

impl Series {
    /// Build a series from provider quotes. The upstream may deliver rows
    /// newest-first; ordering here is normalized to ascending date so
    /// "last" always means most recent.
    pub fn from_quotes(symbol: impl Into<String>, mut quotes: Vec<Quote>) -> Self {
        quotes.sort_by_key(|q| q.date);
        Self {
            symbol: symbol.into(),
            quotes,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn closes(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.close).collect()
    }

    /// Most recent close, by date.
    pub fn last_close(&self) -> Option<f64> {
        self.quotes.last().map(|q| q.close)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

use chrono::Utc;
use tracker_core::domain::quote::Series;
use tracker_core::ingest::{FetchError, QuoteProvider};
use tracker_core::time::{trailing_window, EOD_WINDOW_DAYS};

/// UI phase. Exactly one holds at a time; the variants replace the
/// original flag soup (loading/error/data) so impossible combinations
/// cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Loaded(Series),
    Failed(String),
}

pub struct Session<P> {
    provider: P,
    state: SessionState,
}

impl<P: QuoteProvider> Session<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Run one search. The previous result (success or failure) is
    /// discarded when the new fetch starts; while a fetch is pending the
    /// trigger is disabled and a second call is ignored.
    pub async fn search(&mut self, raw_symbol: &str) {
        if self.is_loading() {
            tracing::warn!("search ignored: fetch already in flight");
            return;
        }

        let symbol = normalize_symbol(raw_symbol);
        self.state = SessionState::Loading;

        let window = trailing_window(Utc::now(), EOD_WINDOW_DAYS);
        tracing::info!(%symbol, %window, provider = self.provider.provider_name(), "fetching quotes");

        match self.provider.fetch_eod(&symbol, window).await {
            Ok(series) => {
                self.state = SessionState::Loaded(series);
            }
            Err(err) => {
                sentry_anyhow::capture_anyhow(&err);
                tracing::error!(%symbol, error = %err, "fetch failed");
                self.state = SessionState::Failed(user_message(&err));
            }
        }
    }
}

/// Uppercase the ticker; no further validation. An empty or malformed
/// symbol goes upstream as-is and the API rejects it.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn user_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<FetchError>() {
        Some(fetch) => fetch.user_message().to_string(),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tracker_core::domain::quote::Quote;
    use tracker_core::time::DateWindow;

    struct StubProvider {
        response: serde_json::Value,
    }

    #[async_trait::async_trait]
    impl QuoteProvider for StubProvider {
        fn provider_name(&self) -> &'static str {
            "stub"
        }

        async fn fetch_eod(&self, symbol: &str, _window: DateWindow) -> Result<Series> {
            let rows = self
                .response
                .get("data")
                .and_then(|d| d.as_array())
                .ok_or_else(|| FetchError::invalid_response("Invalid API response", None))?;

            let quotes = rows
                .iter()
                .map(|row| Quote {
                    symbol: symbol.to_string(),
                    date: row["date"].as_str().unwrap().parse().unwrap(),
                    close: row["close"].as_f64().unwrap(),
                })
                .collect();
            Ok(Series::from_quotes(symbol, quotes))
        }
    }

    #[test]
    fn symbol_is_trimmed_and_uppercased() {
        assert_eq!(normalize_symbol("  aapl "), "AAPL");
        assert_eq!(normalize_symbol("msft"), "MSFT");
        assert_eq!(normalize_symbol(""), "");
    }

    #[test]
    fn fresh_session_is_idle() {
        let session = Session::new(StubProvider {
            response: serde_json::json!({}),
        });
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn successful_search_loads_a_series() {
        let mut session = Session::new(StubProvider {
            response: serde_json::json!({
                "data": [
                    {"date": "2026-08-27", "close": 10.0},
                    {"date": "2026-08-28", "close": 20.0}
                ]
            }),
        });

        session.search("aapl").await;

        let SessionState::Loaded(series) = session.state() else {
            panic!("expected Loaded, got {:?}", session.state());
        };
        assert_eq!(series.symbol(), "AAPL");
        assert_eq!(series.len(), 2);
    }

    #[tokio::test]
    async fn payload_without_data_fails_and_leaves_no_series() {
        let mut session = Session::new(StubProvider {
            response: serde_json::json!({"pagination": {}}),
        });

        session.search("AAPL").await;

        assert_eq!(
            *session.state(),
            SessionState::Failed("Invalid API response".to_string())
        );
    }

    #[tokio::test]
    async fn failed_search_can_be_retried() {
        let mut session = Session::new(StubProvider {
            response: serde_json::json!({"data": [{"date": "2026-08-28", "close": 20.0}]}),
        });

        session.state = SessionState::Failed("boom".to_string());
        session.search("TSLA").await;

        assert!(matches!(session.state(), SessionState::Loaded(_)));
    }

    #[tokio::test]
    async fn search_is_ignored_while_loading() {
        let mut session = Session::new(StubProvider {
            response: serde_json::json!({"data": []}),
        });

        session.state = SessionState::Loading;
        session.search("AAPL").await;

        // Still loading: the re-entrant trigger did nothing.
        assert_eq!(*session.state(), SessionState::Loading);
    }
}

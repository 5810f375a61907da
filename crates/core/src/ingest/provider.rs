use crate::config::Settings;
use crate::domain::quote::{Quote, Series};
use crate::ingest::error::FetchError;
use crate::ingest::types::EodResponse;
use crate::time::DateWindow;
use anyhow::Result;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.marketstack.com/v1";
const EOD_PATH: &str = "/eod";

#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    /// Fetch end-of-day quotes for one symbol over the given window.
    /// The symbol is sent as given; the upstream rejects malformed ones.
    async fn fetch_eod(&self, symbol: &str, window: DateWindow) -> Result<Series>;
}

#[derive(Debug, Clone)]
pub struct MarketstackClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl MarketstackClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let access_key = settings.require_marketstack_access_key()?.to_string();
        let base_url = settings
            .marketstack_base_url
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // No default request timeout: the application relies on transport
        // defaults unless one is configured explicitly.
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_secs) = std::env::var("MARKETSTACK_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            access_key,
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), EOD_PATH)
    }

    fn query(&self, symbol: &str, window: DateWindow) -> [(&'static str, String); 4] {
        [
            ("access_key", self.access_key.clone()),
            ("symbols", symbol.to_string()),
            ("date_from", window.start_param()),
            ("date_to", window.end_param()),
        ]
    }
}

#[async_trait::async_trait]
impl QuoteProvider for MarketstackClient {
    fn provider_name(&self) -> &'static str {
        "marketstack"
    }

    async fn fetch_eod(&self, symbol: &str, window: DateWindow) -> Result<Series> {
        let res = self
            .http
            .get(self.url())
            .query(&self.query(symbol, window))
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| FetchError::transport(format!("failed to read response body: {e}")))?;

        let raw_json = serde_json::from_str::<Value>(&text).map_err(|_| {
            FetchError::invalid_response(format!("response is not valid JSON: {text}"), None)
        })?;

        // Upstream-reported errors (bad symbol, rate limit) share the
        // transport path; the application does not interpret status codes.
        if !status.is_success() {
            return Err(FetchError::transport(format!("HTTP {status}: {raw_json}")).into());
        }

        let series = parse_series(symbol, raw_json)?;
        tracing::debug!(
            symbol = %series.symbol(),
            %window,
            quotes = series.len(),
            "fetched eod series"
        );
        Ok(series)
    }
}

/// Turn a 2xx payload into a series. A body without `data` is the
/// invalid-response condition.
fn parse_series(requested_symbol: &str, raw_json: Value) -> Result<Series, FetchError> {
    let parsed = serde_json::from_value::<EodResponse>(raw_json.clone()).map_err(|e| {
        FetchError::invalid_response(
            format!("failed to parse quotes payload: {e}"),
            Some(raw_json.clone()),
        )
    })?;

    let Some(rows) = parsed.data else {
        return Err(FetchError::invalid_response(
            "Invalid API response",
            Some(raw_json),
        ));
    };

    let quotes: Vec<Quote> = rows.into_iter().map(Quote::from).collect();
    let symbol = quotes
        .first()
        .map(|q| q.symbol.clone())
        .unwrap_or_else(|| requested_symbol.to_string());

    Ok(Series::from_quotes(symbol, quotes))
}

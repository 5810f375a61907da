use crate::domain::quote::Quote;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Wire shape of the end-of-day quotes endpoint.
///
/// `data` is optional on purpose: a response without it is the
/// invalid-response condition, not a deserialization failure, so the
/// caller can attach the raw payload to the error it reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EodResponse {
    #[serde(default)]
    pub data: Option<Vec<EodQuote>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EodQuote {
    pub symbol: String,
    /// Upstream sends an ISO-8601 timestamp (observed: midnight with a
    /// colon-less offset, "2026-08-28T00:00:00+0000"). Only the date part
    /// is meaningful for an end-of-day record.
    #[serde(deserialize_with = "de_eod_date")]
    pub date: NaiveDate,
    pub close: f64,
}

impl From<EodQuote> for Quote {
    fn from(q: EodQuote) -> Self {
        Quote {
            symbol: q.symbol,
            date: q.date,
            close: q.close,
        }
    }
}

fn de_eod_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let date_part = s.split('T').next().unwrap_or(&s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_expected_shape() {
        let v = json!({
            "pagination": {"limit": 100, "offset": 0, "count": 1, "total": 1},
            "data": [
                {
                    "symbol": "AAPL",
                    "date": "2026-08-28T00:00:00+0000",
                    "open": 230.1,
                    "close": 232.56,
                    "volume": 44.0e6
                }
            ]
        });

        let parsed: EodResponse = serde_json::from_value(v).unwrap();
        let data = parsed.data.unwrap();
        assert_eq!(data.len(), 1);

        let q: Quote = data[0].clone().into();
        assert_eq!(q.symbol, "AAPL");
        assert_eq!(q.date, NaiveDate::from_ymd_opt(2026, 8, 28).unwrap());
        assert_eq!(q.close, 232.56);
    }

    #[test]
    fn accepts_colon_offset_and_bare_date_forms() {
        for date in ["2026-08-28T00:00:00+00:00", "2026-08-28"] {
            let v = json!({
                "data": [{"symbol": "AAPL", "date": date, "close": 1.0}]
            });
            let parsed: EodResponse = serde_json::from_value(v).unwrap();
            assert_eq!(
                parsed.data.unwrap()[0].date,
                NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
            );
        }
    }

    #[test]
    fn missing_data_field_parses_to_none() {
        let v = json!({"error": {"code": "invalid_access_key"}});
        let parsed: EodResponse = serde_json::from_value(v).unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn rejects_non_numeric_close() {
        let v = json!({
            "data": [
                {"symbol": "AAPL", "date": "2026-08-28T00:00:00+0000", "close": "232.56"}
            ]
        });
        assert!(serde_json::from_value::<EodResponse>(v).is_err());
    }
}

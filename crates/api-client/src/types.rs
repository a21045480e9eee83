// In crates/api-client/src/types.rs

use crate::{Error, Result};
use chrono::{TimeZone, Utc};
use core_types::Kline;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// The client for Binance's public spot market-data endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The persistent HTTP client.
    pub http_client: Client,
    /// The base URL for the Binance REST API.
    pub base_url: String,
}

/// Temporary struct to deserialize the kline response from Binance,
/// which is a JSON array of mixed types.
#[derive(Debug, Deserialize)]
pub struct RawKline(
    pub i64,         // 0: Open time
    pub String,      // 1: Open
    pub String,      // 2: High
    pub String,      // 3: Low
    pub String,      // 4: Close
    pub String,      // 5: Volume
    pub i64,         // 6: Close time
    pub String,      // 7: Quote asset volume
    pub i64,         // 8: Number of trades
    pub String,      // 9: Taker buy base asset volume
    pub String,      // 10: Taker buy quote asset volume
    pub String,      // 11: Ignore
);

impl RawKline {
    /// Converts the wire row into our internal `Kline`, failing on any field
    /// that does not parse instead of substituting a default.
    pub fn into_kline(self) -> Result<Kline> {
        let open_time = Utc
            .timestamp_millis_opt(self.0)
            .single()
            .ok_or(Error::InvalidTimestamp(self.0))?;

        Ok(Kline {
            open_time,
            open: parse_price("open", &self.1)?,
            high: parse_price("high", &self.2)?,
            low: parse_price("low", &self.3)?,
            close: parse_price("close", &self.4)?,
            volume: parse_price("volume", &self.5)?,
        })
    }
}

fn parse_price(field: &'static str, value: &str) -> Result<f64> {
    value.parse().map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parses a `GET /api/v3/klines` response body.
///
/// Binance answers failed requests with a `{"code": .., "msg": ..}` object
/// instead of an array; that case is reported as `Error::ApiError`.
pub fn parse_klines(body: &str) -> Result<Vec<Kline>> {
    let raw_klines: Vec<RawKline> = serde_json::from_str(body).map_err(|e| {
        // If deserialization fails, it might be a Binance error object.
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            if let Some(code) = value.get("code").and_then(Value::as_i64) {
                let msg = value.get("msg").and_then(Value::as_str).unwrap_or("").to_string();
                return Error::ApiError { code, msg };
            }
        }
        Error::DeserializationFailed(e)
    })?;

    raw_klines.into_iter().map(RawKline::into_kline).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROWS: &str = r#"[
        [1719792000000,"62772.01","62942.00","62654.04","62898.72","512.46",1719795599999,"32204510.3","41532","254.1","15968733.9","0"],
        [1719795600000,"62898.72","63011.10","62800.00","62950.33","398.00",1719799199999,"25043211.1","36011","199.0","12520070.4","0"]
    ]"#;

    #[test]
    fn parses_rows_into_klines() {
        let klines = parse_klines(TWO_ROWS).unwrap();
        assert_eq!(klines.len(), 2);

        let first = &klines[0];
        assert_eq!(first.open_time.timestamp_millis(), 1_719_792_000_000);
        assert_eq!(first.open, 62772.01);
        assert_eq!(first.high, 62942.00);
        assert_eq!(first.low, 62654.04);
        assert_eq!(first.close, 62898.72);
        assert_eq!(first.volume, 512.46);
        assert_eq!(klines[1].close, 62950.33);
    }

    #[test]
    fn binance_error_body_becomes_api_error() {
        let err = parse_klines(r#"{"code":-1121,"msg":"Invalid symbol."}"#).unwrap_err();
        match err {
            Error::ApiError { code, msg } => {
                assert_eq!(code, -1121);
                assert_eq!(msg, "Invalid symbol.");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn malformed_price_is_reported() {
        let body = r#"[[1719792000000,"62772.01","n/a","62654.04","62898.72","512.46",1719795599999,"0","1","0","0","0"]]"#;
        let err = parse_klines(body).unwrap_err();
        assert!(
            matches!(err, Error::InvalidNumber { field: "high", ref value } if value == "n/a"),
            "got {err:?}"
        );
    }

    #[test]
    fn garbage_body_is_a_deserialization_error() {
        assert!(matches!(
            parse_klines("<html>gateway timeout</html>"),
            Err(Error::DeserializationFailed(_))
        ));
    }

    #[test]
    fn empty_array_is_no_klines() {
        assert!(parse_klines("[]").unwrap().is_empty());
    }
}

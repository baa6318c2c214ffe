//! HTTP client for a bitcoincharts-style market feed.
//!
//! Two endpoints are used, one request per invocation:
//! - `trades.csv?symbol=<symbol>&start=<unix>` — trade history since `start`;
//! - `markets.json` — every market with its last trade time.
//!
//! Payload parsing lives in `geohash_common::feed`; this module only moves bytes
//! and maps transport failures to `GeohashError::Transport`.
use geohash_common::feed;
use geohash_common::price::MarketSymbol;
use geohash_common::{GeohashError, PriceSource, Result, SymbolListing};
use log::debug;
use reqwest::Url;
use reqwest::blocking::Client as HttpClient;

/// Blocking client for the trade-history and market-listing endpoints.
pub struct BitcoinchartsClient {
    http_client: HttpClient,
    base_url: String,
}

impl BitcoinchartsClient {
    /// Public bitcoincharts API.
    pub const DEFAULT_BASE_URL: &'static str = "http://api.bitcoincharts.com/v1";

    /// Create a client for the feed rooted at `base_url`.
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn trades_url(&self, symbol: &str, start: i64) -> Result<Url> {
        let start = start.to_string();
        Url::parse_with_params(
            &format!("{}/trades.csv", self.base_url),
            &[("symbol", symbol), ("start", start.as_str())],
        )
        .map_err(|e| GeohashError::Validation(format!("invalid feed URL {}: {}", self.base_url, e)))
    }

    fn markets_url(&self) -> Result<Url> {
        Url::parse(&format!("{}/markets.json", self.base_url))
            .map_err(|e| GeohashError::Validation(format!("invalid feed URL {}: {}", self.base_url, e)))
    }

    fn get(&self, url: Url) -> Result<String> {
        debug!("GET {}", url);
        let response = self
            .http_client
            .get(url.clone())
            .send()
            .map_err(|e| GeohashError::Transport(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeohashError::Transport(format!("{} returned {}", url, status)));
        }

        response
            .text()
            .map_err(|e| GeohashError::Transport(format!("reading body from {} failed: {}", url, e)))
    }
}

impl PriceSource for BitcoinchartsClient {
    fn first_price_after(&self, symbol: &str, unix_timestamp: i64) -> Result<String> {
        let body = self.get(self.trades_url(symbol, unix_timestamp)?)?;
        feed::first_trade_price(&body).map_err(|e| match e {
            GeohashError::NotFound(reason) => {
                GeohashError::NotFound(format!("symbol \"{}\": {}", symbol, reason))
            }
            other => other,
        })
    }
}

impl SymbolListing for BitcoinchartsClient {
    fn symbols(&self) -> Result<Vec<MarketSymbol>> {
        let body = self.get(self.markets_url()?)?;
        feed::parse_symbol_list(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn builds_trades_url_with_query() {
        let client = BitcoinchartsClient::new(BitcoinchartsClient::DEFAULT_BASE_URL.to_string());
        let url = client.trades_url("bitstampUSD", 1_672_444_800).unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.bitcoincharts.com/v1/trades.csv?symbol=bitstampUSD&start=1672444800"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let client = BitcoinchartsClient::new("http://localhost:9000/v1/".to_string());
        assert_eq!(
            client.markets_url().unwrap().as_str(),
            "http://localhost:9000/v1/markets.json"
        );
    }

    #[test]
    fn symbol_is_query_encoded() {
        let client = BitcoinchartsClient::new("http://localhost:9000".to_string());
        let url = client.trades_url("a&b", 0).unwrap();
        assert_eq!(url.query(), Some("symbol=a%26b&start=0"));
    }

    #[test]
    fn invalid_base_url_is_a_validation_error() {
        let client = BitcoinchartsClient::new("not a url".to_string());
        assert!(matches!(
            client.markets_url(),
            Err(GeohashError::Validation(_))
        ));
    }

    #[test]
    fn unreachable_feed_is_a_transport_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = BitcoinchartsClient::new(format!("http://127.0.0.1:{}", port));
        assert!(matches!(
            client.first_price_after("bitstampUSD", 0),
            Err(GeohashError::Transport(_))
        ));
    }
}

//! Price quotes and the capability traits a market feed implements.
//!
//! The pipeline only needs to ask for "the first price of `symbol` after this
//! Unix timestamp", so the network client lives in the binary and tests can
//! pass in any in-memory source.
use serde::Deserialize;

use crate::result::Result;

/// A market symbol with the exact price text the feed reported.
///
/// The price stays a string: the hash is computed over its digits, and any
/// round-trip through a float could change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// Market symbol as passed to the feed (e.g. `bitstampUSD`).
    pub symbol: String,
    /// Price exactly as it appeared in the feed.
    pub price: String,
}

/// One market from the symbol listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarketSymbol {
    /// Market symbol.
    pub symbol: String,
    /// Unix timestamp of the last trade, absent for markets that never traded.
    #[serde(default)]
    pub latest_trade: Option<i64>,
}

/// Source of first-trade prices.
pub trait PriceSource {
    /// Price of the first trade of `symbol` at or after `unix_timestamp`.
    ///
    /// Fails with `NotFound` if the feed has no rows for the symbol and with
    /// `Transport` if the feed cannot be reached.
    fn first_price_after(&self, symbol: &str, unix_timestamp: i64) -> Result<String>;
}

/// Source of the market listing.
pub trait SymbolListing {
    /// All markets known to the feed.
    fn symbols(&self) -> Result<Vec<MarketSymbol>>;
}

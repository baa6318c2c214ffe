//! Parsers for the trade-history and market-listing payloads.
//!
//! The trade history is CSV with one `unixtime,price,amount` row per trade,
//! oldest first. The market listing is a JSON array of market objects, of
//! which only `symbol` and `latest_trade` are read.
use log::debug;

use crate::error::GeohashError;
use crate::price::MarketSymbol;
use crate::result::Result;

/// Column of the trade row holding the price.
const PRICE_COLUMN: usize = 1;

/// Price text of the first trade row in `body`, verbatim.
pub fn first_trade_price(body: &str) -> Result<String> {
    let row = body
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| GeohashError::NotFound("no trades for this period".to_string()))?;
    debug!("First trade row: {}", row);

    match row.split(',').nth(PRICE_COLUMN).map(str::trim) {
        Some(price) if !price.is_empty() => Ok(price.to_string()),
        _ => Err(GeohashError::NotFound(format!(
            "trade row has no price column: {:?}",
            row
        ))),
    }
}

/// Parse the JSON market listing.
pub fn parse_symbol_list(body: &str) -> Result<Vec<MarketSymbol>> {
    let symbols: Vec<MarketSymbol> = serde_json::from_str(body)?;
    debug!("Parsed {} markets", symbols.len());
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_second_column_of_first_row() {
        let body = "1672531205,16547.10,0.0123\n1672531300,16550.00,1.5\n";
        assert_eq!(first_trade_price(body).unwrap(), "16547.10");
    }

    #[test]
    fn skips_blank_leading_lines() {
        let body = "\n\r\n1672531205,100,2\n";
        assert_eq!(first_trade_price(body).unwrap(), "100");
    }

    #[test]
    fn empty_feed_is_not_found() {
        assert!(matches!(
            first_trade_price(""),
            Err(GeohashError::NotFound(_))
        ));
        assert!(matches!(
            first_trade_price("\n\n"),
            Err(GeohashError::NotFound(_))
        ));
    }

    #[test]
    fn row_without_price_is_not_found() {
        assert!(matches!(
            first_trade_price("1672531205"),
            Err(GeohashError::NotFound(_))
        ));
        assert!(matches!(
            first_trade_price("1672531205,,1"),
            Err(GeohashError::NotFound(_))
        ));
    }

    #[test]
    fn parses_market_listing() {
        let body = r#"[
            {"symbol": "bitstampUSD", "currency": "USD", "latest_trade": 1672531205, "close": 16547.1},
            {"symbol": "mtgoxUSD", "currency": "USD", "latest_trade": null}
        ]"#;
        let symbols = parse_symbol_list(body).unwrap();
        assert_eq!(
            symbols,
            vec![
                MarketSymbol {
                    symbol: "bitstampUSD".to_string(),
                    latest_trade: Some(1_672_531_205),
                },
                MarketSymbol {
                    symbol: "mtgoxUSD".to_string(),
                    latest_trade: None,
                },
            ]
        );
    }

    #[test]
    fn malformed_listing_is_a_json_error() {
        assert!(matches!(
            parse_symbol_list("{not json"),
            Err(GeohashError::Json(_))
        ));
    }
}

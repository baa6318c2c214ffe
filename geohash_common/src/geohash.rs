//! End-to-end geohash computation over a `PriceSource`.
//!
//! The pipeline, given a mode, a symbol and the current instant:
//! 1. resolves the trading-day start, applying the 30W rule for the mode;
//! 2. asks the price source for the first trade price after that start;
//! 3. hashes `"<today>-<price>"` and decodes the digest into two fractions;
//! 4. maps the fractions onto the graticule or the globe.
//!
//! The graticule is validated when the `Mode` is built, so an out-of-range
//! cell never reaches the price source. `graticule` does that validation and
//! the computation in one step for callers holding raw integer degrees.
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};

use crate::coordinate::{Coordinate, Graticule, Mode};
use crate::digest;
use crate::midnight;
use crate::price::{PriceQuote, PriceSource};
use crate::result::Result;

/// Outcome of one geohash computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Geohash {
    /// Calendar date that was hashed.
    pub date: NaiveDate,
    /// Price the hash was derived from.
    pub quote: PriceQuote,
    /// Final coordinate.
    pub coordinate: Coordinate,
}

/// Compute the geohash of `mode` for the UTC date of `now`.
pub fn compute(
    source: &impl PriceSource,
    symbol: &str,
    mode: Mode,
    now: DateTime<Utc>,
) -> Result<Geohash> {
    let start = midnight::trading_day_start(now, &mode);
    debug!(
        "Trading day start for {}: {} (30W rule: {})",
        mode,
        start,
        midnight::applies_30w_rule(&mode)
    );

    let price = source.first_price_after(symbol, start)?;
    info!("Opening price for {}: {}", symbol, price);

    let date = now.date_naive();
    let input = digest::hash_input(date, &price);
    let fraction = digest::decode(&input)?;
    debug!("Decoded {:?} into {:?}", input, fraction);

    Ok(Geohash {
        date,
        quote: PriceQuote {
            symbol: symbol.to_string(),
            price,
        },
        coordinate: mode.apply(fraction),
    })
}

/// Validate the graticule `(lat, lon)` and compute its geohash.
///
/// An out-of-range graticule fails with `Validation` without touching `source`.
pub fn graticule(
    source: &impl PriceSource,
    symbol: &str,
    lat: i32,
    lon: i32,
    now: DateTime<Utc>,
) -> Result<Geohash> {
    let mode = Mode::Graticule(Graticule::new(lat, lon)?);
    compute(source, symbol, mode, now)
}

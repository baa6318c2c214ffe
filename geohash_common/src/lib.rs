//!
//! Deterministic geohash computation shared by the `geohash` binary.
//!
//! This crate aggregates:
//! - `error` — unified error type `GeohashError`.
//! - `result` — handy `Result<T, GeohashError>` alias.
//! - `digest` — MD5 digest of the date/price string decoded into two fractions.
//! - `midnight` — trading-day anchor timestamp and the 30W rule.
//! - `coordinate` — graticules, modes, and the fraction-to-coordinate mapping.
//! - `price` — price quotes and the capability traits a feed implements.
//! - `feed` — parsers for the trade-history and market-listing payloads.
//! - `geohash` — the end-to-end pipeline over a `PriceSource`.
//! - `presenter` — plain-text and map-service URL rendering.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod digest;
pub mod midnight;
pub mod coordinate;
pub mod price;
pub mod feed;
pub mod geohash;
pub mod presenter;

pub use coordinate::{Coordinate, Graticule, Mode};
pub use error::GeohashError;
pub use geohash::Geohash;
pub use presenter::MapKind;
pub use price::{PriceSource, SymbolListing};
pub use result::Result;

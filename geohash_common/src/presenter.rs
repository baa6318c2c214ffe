//! Rendering of geohash results.
//!
//! Without a map kind the coordinate is printed as two `latitude:` /
//! `longitude:` lines; with one, as a link to that map service centred on the
//! point. Coordinates use `f64`'s shortest round-trip formatting, so the same
//! computation always prints the same bytes.
use chrono::{DateTime, SecondsFormat};
use clap::ValueEnum;
use strum_macros::{Display, EnumString};

use crate::geohash::Geohash;
use crate::price::MarketSymbol;

/// Half-width in degrees of the bounding box some map services need.
const BOUNDING_BOX_DEGREES: f64 = 0.01;

/// Supported map services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Display, EnumString)]
#[value(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MapKind {
    /// Google Maps, with a pin labelled with the date.
    Google,
    /// OpenStreetMap.
    Osm,
    /// Yahoo Maps.
    Yahoo,
    /// Bing Maps.
    Bing,
}

impl MapKind {
    /// URL of this map service pointing at `geohash`.
    pub fn url(&self, geohash: &Geohash) -> String {
        let lat = geohash.coordinate.lat;
        let lon = geohash.coordinate.lon;
        match self {
            MapKind::Google => format!(
                "http://maps.google.com/maps?q={},{}(Geohash+for+{})&iwloc=A",
                lat, lon, geohash.date
            ),
            MapKind::Osm => format!("http://osm.org/?mlat={}&mlon={}&zoom=12", lat, lon),
            MapKind::Yahoo => format!(
                "http://maps.yahoo.com/maps_result?ard=1&mag=9&lat={}&lon={}&bb={}%2C{}%2C{}%2C{}",
                lat,
                lon,
                lat + BOUNDING_BOX_DEGREES,
                lon - BOUNDING_BOX_DEGREES,
                lat - BOUNDING_BOX_DEGREES,
                lon + BOUNDING_BOX_DEGREES
            ),
            MapKind::Bing => format!("http://www.bing.com/maps/?q={}+{}&lvl=11", lat, lon),
        }
    }
}

/// Render `geohash` as raw coordinates or as a URL for `map`.
pub fn render(geohash: &Geohash, map: Option<MapKind>) -> String {
    match map {
        Some(kind) => kind.url(geohash),
        None => format!(
            "latitude: {}\nlongitude: {}",
            geohash.coordinate.lat, geohash.coordinate.lon
        ),
    }
}

/// One line per market: the symbol and its last trade time in UTC, or `-`.
pub fn render_symbols(symbols: &[MarketSymbol]) -> String {
    symbols
        .iter()
        .map(|market| {
            let latest = market
                .latest_trade
                .and_then(|ts| DateTime::from_timestamp(ts, 0))
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_else(|| "-".to_string());
            format!("{}\t{}\n", market.symbol, latest)
        })
        .collect()
}

//! Command-line arguments for the geohash binary.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use geohash_common::MapKind;

use crate::feed_client::BitcoinchartsClient;

/// Market used when `--symbol` is not given.
pub const DEFAULT_SYMBOL: &str = "bitstampUSD";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the bitcoincharts-compatible market feed.
    #[arg(long, global = true, env = "GEOHASH_FEED_URL", default_value = BitcoinchartsClient::DEFAULT_BASE_URL)]
    pub feed_url: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Selected mode of operation.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Geohash inside the graticule named by its integer latitude and longitude.
    Graticule {
        /// Latitude (integer part), -90 to 90.
        #[arg(allow_negative_numbers = true)]
        lat: i32,
        /// Longitude (integer part), -180 to 180.
        #[arg(allow_negative_numbers = true)]
        lon: i32,
        #[command(flatten)]
        options: HashOptions,
    },
    /// Single geohash for the whole globe.
    Globalhash {
        #[command(flatten)]
        options: HashOptions,
    },
    /// List the markets known to the feed with their last trade time.
    ListSymbols,
}

/// Options shared by the geohash-producing commands.
#[derive(Debug, clap::Args)]
pub struct HashOptions {
    /// Market symbol whose opening price is hashed. Case-sensitive, sent to
    /// the feed exactly as given (see `list-symbols`).
    #[arg(short, long, default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// Print a URL to this map service instead of the raw coordinates.
    #[arg(short, long, value_enum)]
    pub map: Option<MapKind>,

    /// Compute for this date (YYYY-MM-DD) instead of today (UTC).
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

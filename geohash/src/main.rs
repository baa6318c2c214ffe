//! geohash — computes the daily geohashing meetup point for a graticule or the
//! whole globe from a market's opening trade price.
//!
//! Usage example (CLI):
//! ```bash
//! geohash graticule 37 -122 -m osm
//! geohash globalhash -s krakenEUR --date 2023-01-01
//! geohash list-symbols
//! ```
//!
//! Graticules east of 30°W, and the globalhash, hash the previous UTC day's
//! opening price (the 30W rule). Any failure prints a single `error:` line on
//! stderr and exits with status 1.
#![warn(missing_docs)]
mod args;
mod feed_client;

use crate::args::{Args, Command, HashOptions};
use crate::feed_client::BitcoinchartsClient;
use chrono::{DateTime, Utc};
use clap::Parser;
use geohash_common::coordinate::Mode;
use geohash_common::{Geohash, MapKind, Result, SymbolListing, geohash, midnight, presenter};
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Graticule { lat, lon, options } => {
            let now = resolve_now(&options);
            let client = BitcoinchartsClient::new(args.feed_url);
            let result = geohash::graticule(&client, &options.symbol, lat, lon, now)?;
            print_geohash(&result, options.map)
        }
        Command::Globalhash { options } => {
            let now = resolve_now(&options);
            let client = BitcoinchartsClient::new(args.feed_url);
            let result = geohash::compute(&client, &options.symbol, Mode::Globalhash, now)?;
            print_geohash(&result, options.map)
        }
        Command::ListSymbols => {
            let client = BitcoinchartsClient::new(args.feed_url);
            let symbols = client.symbols()?;
            io::stdout().lock().write_all(presenter::render_symbols(&symbols).as_bytes())?;
            Ok(())
        }
    }
}

fn resolve_now(options: &HashOptions) -> DateTime<Utc> {
    options.date.map(midnight::as_of).unwrap_or_else(Utc::now)
}

fn print_geohash(result: &Geohash, map: Option<MapKind>) -> Result<()> {
    writeln!(io::stdout().lock(), "{}", presenter::render(result, map))?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

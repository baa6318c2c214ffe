//! Graticules, computation modes, and the fraction-to-coordinate mapping.
//!
//! In graticule mode the decoded offsets are added to the cell's integer corner
//! away from zero: a negative latitude or longitude moves further negative, zero
//! counts as non-negative. In globalhash mode the offsets are stretched over the
//! whole globe. Neither mapping clamps or wraps its result, so a cell on the
//! edge of the map (latitude 90, longitude -180, ...) can yield a point just
//! past the canonical bounds.
use std::fmt;

use crate::digest::DecodedFraction;
use crate::error::GeohashError;
use crate::result::Result;

/// Largest accepted absolute graticule latitude.
pub const MAX_LATITUDE: i32 = 90;
/// Largest accepted absolute graticule longitude.
pub const MAX_LONGITUDE: i32 = 180;

/// A 1°×1° cell named by its integer-degree latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Graticule {
    lat: i32,
    lon: i32,
}

impl Graticule {
    /// Validate and create a graticule; `|lat| <= 90` and `|lon| <= 180`.
    pub fn new(lat: i32, lon: i32) -> Result<Self> {
        if lat.unsigned_abs() > MAX_LATITUDE.unsigned_abs() {
            return Err(GeohashError::Validation(format!(
                "graticule latitude {} is outside [-{}, {}]",
                lat, MAX_LATITUDE, MAX_LATITUDE
            )));
        }
        if lon.unsigned_abs() > MAX_LONGITUDE.unsigned_abs() {
            return Err(GeohashError::Validation(format!(
                "graticule longitude {} is outside [-{}, {}]",
                lon, MAX_LONGITUDE, MAX_LONGITUDE
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Integer longitude of the cell.
    pub fn lon(&self) -> i32 {
        self.lon
    }

    /// Place `fraction` inside this cell.
    pub fn apply(&self, fraction: DecodedFraction) -> Coordinate {
        Coordinate {
            lat: offset(self.lat, fraction.lat),
            lon: offset(self.lon, fraction.lon),
        }
    }
}

impl fmt::Display for Graticule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

fn offset(origin: i32, fraction: f64) -> f64 {
    let origin = f64::from(origin);
    if origin >= 0.0 {
        origin + fraction
    } else {
        origin + fraction * -1.0
    }
}

/// Which geohash is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A point inside one graticule.
    Graticule(Graticule),
    /// A single point for the whole globe.
    Globalhash,
}

impl Mode {
    /// Map decoded offsets to the final coordinate for this mode.
    pub fn apply(&self, fraction: DecodedFraction) -> Coordinate {
        match self {
            Mode::Graticule(graticule) => graticule.apply(fraction),
            Mode::Globalhash => globalhash(fraction),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Graticule(graticule) => write!(f, "graticule {}", graticule),
            Mode::Globalhash => f.write_str("globalhash"),
        }
    }
}

/// Stretch `fraction` over the globe: `[0, 1)` maps to `[-90, 90)` × `[-180, 180)`.
pub fn globalhash(fraction: DecodedFraction) -> Coordinate {
    Coordinate {
        lat: fraction.lat * 180.0 - 90.0,
        lon: fraction.lon * 360.0 - 180.0,
    }
}

/// Final latitude/longitude pair. Not clamped to canonical bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

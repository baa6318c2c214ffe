//! Digest decoder.
//!
//! The hash input is `"<YYYY-MM-DD>-<price>"`, where the price is the exact text
//! reported by the feed. Its MD5 digest is rendered as 32 lower-case hex digits
//! and split into two halves; each half is read as a base-16 fraction, so
//! digit `d` at 1-based position `p` contributes `d / 16^p`.
//!
//! MD5 is required for interoperability: every geohash implementation in the
//! community derives the same point from the same date and price.
use chrono::NaiveDate;
use md5::{Digest, Md5};

use crate::error::GeohashError;
use crate::result::Result;

/// Number of hex digits in each half of the digest.
pub const HALF_LEN: usize = 16;

/// Pair of fractional offsets in `[0, 1)` decoded from a digest.
///
/// The bound is exact in rational arithmetic; in `f64` a half made only of high
/// digits can round up to `1.0`, and that value is kept as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedFraction {
    /// Latitude offset, from the first half of the digest.
    pub lat: f64,
    /// Longitude offset, from the second half of the digest.
    pub lon: f64,
}

/// Build the string that gets hashed for `date` and the textual `price`.
pub fn hash_input(date: NaiveDate, price: &str) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), price)
}

/// Lower-case hex MD5 digest of the UTF-8 bytes of `input`.
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Decode 16 hex digits into a fraction in `[0, 1)`.
pub fn decode_half(half: &str) -> Result<f64> {
    if half.len() != HALF_LEN {
        return Err(GeohashError::Format(format!(
            "expected {} hex digits, got {:?}",
            HALF_LEN, half
        )));
    }

    half.chars()
        .enumerate()
        .try_fold(0.0_f64, |acc, (index, c)| {
            let digit = c
                .to_digit(16)
                .ok_or_else(|| GeohashError::Format(format!("invalid hex digit {:?}", c)))?;
            Ok(acc + f64::from(digit) * (1.0 / 16.0_f64.powi(index as i32 + 1)))
        })
}

/// Hash `input` and decode both halves of the digest.
pub fn decode(input: &str) -> Result<DecodedFraction> {
    let digest = md5_hex(input);
    let (lat_half, lon_half) = digest.split_at(HALF_LEN);
    Ok(DecodedFraction {
        lat: decode_half(lat_half)?,
        lon: decode_half(lon_half)?,
    })
}

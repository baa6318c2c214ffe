//! Trading-day anchor and the 30W rule.
//!
//! A geohash uses the first trade after UTC midnight of the current day. Places
//! east of 30°W start their day before UTC midnight does, so they (and the
//! globalhash) take the previous UTC day's opening price instead. The hashed
//! date never changes; only the price window moves.
use chrono::{DateTime, NaiveDate, Utc};

use crate::coordinate::Mode;

/// Seconds in one UTC day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Graticules with a longitude strictly greater than this use the previous day.
pub const RULE_30W_LONGITUDE: i32 = -30;

/// Unix timestamp of the most recent UTC midnight at or before `now`.
pub fn utc_midnight(now: DateTime<Utc>) -> i64 {
    let t = now.timestamp();
    t - t.rem_euclid(SECONDS_PER_DAY)
}

/// Whether the previous UTC day's price applies to `mode`.
pub fn applies_30w_rule(mode: &Mode) -> bool {
    match mode {
        Mode::Graticule(graticule) => graticule.lon() > RULE_30W_LONGITUDE,
        Mode::Globalhash => true,
    }
}

/// Start of the trading-day window whose first trade price is hashed.
pub fn trading_day_start(now: DateTime<Utc>, mode: &Mode) -> i64 {
    let midnight = utc_midnight(now);
    if applies_30w_rule(mode) {
        midnight - SECONDS_PER_DAY
    } else {
        midnight
    }
}

/// UTC instant at 00:00 of `date`, used to freeze a computation to a given day.
pub fn as_of(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Graticule;
    use chrono::TimeZone;

    fn graticule(lon: i32) -> Mode {
        Mode::Graticule(Graticule::new(0, lon).unwrap())
    }

    #[test]
    fn midnight_truncates_to_the_day() {
        let now = Utc.with_ymd_and_hms(2023, 1, 1, 17, 45, 12).unwrap();
        assert_eq!(utc_midnight(now), 1_672_531_200);
    }

    #[test]
    fn midnight_is_a_fixed_point() {
        let now = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(utc_midnight(now), now.timestamp());
    }

    #[test]
    fn midnight_before_the_epoch_rounds_down() {
        let now = Utc.with_ymd_and_hms(1969, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(utc_midnight(now), -SECONDS_PER_DAY);
    }

    #[test]
    fn rule_boundary_is_strict() {
        assert!(applies_30w_rule(&graticule(-29)));
        assert!(!applies_30w_rule(&graticule(-30)));
        assert!(!applies_30w_rule(&graticule(-31)));
        assert!(applies_30w_rule(&graticule(0)));
    }

    #[test]
    fn globalhash_always_uses_previous_day() {
        assert!(applies_30w_rule(&Mode::Globalhash));
    }

    #[test]
    fn trading_day_start_moves_back_a_day_east_of_30w() {
        let now = Utc.with_ymd_and_hms(2023, 1, 1, 9, 0, 0).unwrap();
        let midnight = 1_672_531_200;
        assert_eq!(trading_day_start(now, &graticule(-29)), midnight - SECONDS_PER_DAY);
        assert_eq!(trading_day_start(now, &graticule(-31)), midnight);
        assert_eq!(trading_day_start(now, &Mode::Globalhash), midnight - SECONDS_PER_DAY);
    }

    #[test]
    fn as_of_is_utc_midnight_of_the_date() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let instant = as_of(date);
        assert_eq!(instant.timestamp(), 1_672_531_200);
        assert_eq!(instant.date_naive(), date);
    }
}

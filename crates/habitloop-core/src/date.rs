//! Canonical day boundaries and day keys.
//!
//! Day-keyed lookups (matching a habit's scheduled day, bucketing store
//! snapshots) must be stable whether the caller passes a raw timestamp or a
//! midnight-normalized one: `day_key(normalize(d)) == day_key(d)` for any
//! `d` on the same calendar day.

use chrono::{DateTime, Local, LocalResult, NaiveTime, TimeZone};

/// Start-of-day instant for `d` in local time.
///
/// An ambiguous or nonexistent local midnight (DST transitions) resolves to
/// the earliest valid instant of that day, falling back to `d` itself.
pub fn normalize(d: DateTime<Local>) -> DateTime<Local> {
    let midnight = d.date_naive().and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => d,
    }
}

/// Canonical `YYYY-MM-DD` key for `d`'s calendar day.
pub fn day_key(d: DateTime<Local>) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Key for the current local day.
pub fn today_key() -> String {
    day_key(Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use proptest::prelude::*;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        match Local.with_ymd_and_hms(y, m, d, h, min, 0) {
            LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t,
            LocalResult::None => panic!("nonexistent local time in test"),
        }
    }

    #[test]
    fn normalize_zeroes_time_of_day() {
        let normalized = normalize(local(2024, 3, 15, 18, 42));
        assert_eq!(normalized.hour(), 0);
        assert_eq!(normalized.minute(), 0);
        assert_eq!(normalized.second(), 0);
        assert_eq!(
            normalized.date_naive(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(local(2024, 3, 15, 23, 59));
        assert_eq!(normalize(once), once);
    }

    #[test]
    fn day_key_format() {
        assert_eq!(day_key(local(2024, 1, 5, 7, 0)), "2024-01-05");
    }

    #[test]
    fn raw_and_normalized_timestamps_share_a_key() {
        let raw = local(2024, 6, 30, 22, 15);
        assert_eq!(day_key(normalize(raw)), day_key(raw));
    }

    proptest! {
        #[test]
        fn same_day_timestamps_share_a_key(h1 in 0u32..24, m1 in 0u32..60, h2 in 0u32..24, m2 in 0u32..60) {
            let d1 = local(2024, 5, 20, h1, m1);
            let d2 = local(2024, 5, 20, h2, m2);
            prop_assert_eq!(day_key(normalize(d1)), day_key(normalize(d2)));
        }
    }
}

//! Date and timestamp generators.
//!
//! Both are relative to a caller-supplied `now` so the record generator can
//! pin the clock.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Format of crossing timestamps: ISO 8601, UTC, `Z` suffix, whole seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A timestamp up to 24 hours and 59 minutes before `now`.
pub fn generate_recent_timestamp<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> String {
    let hours_ago = rng.gen_range(0..=24);
    let minutes_ago = rng.gen_range(0..=59);
    let timestamp = now - Duration::hours(hours_ago) - Duration::minutes(minutes_ago);
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// A registration expiration date 30 to 730 days after `now`.
pub fn generate_expiration_date<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> String {
    let days_ahead = rng.gen_range(30..=730);
    (now + Duration::days(days_ahead))
        .format(DATE_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 30, 13, 10, 0).unwrap()
    }

    #[test]
    fn test_recent_timestamp_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = fixed_now();

        for _ in 0..200 {
            let ts = generate_recent_timestamp(&mut rng, now);
            assert!(ts.ends_with('Z'));

            let parsed = DateTime::parse_from_rfc3339(&ts).unwrap().with_timezone(&Utc);
            assert!(parsed <= now);
            assert!(now - parsed <= Duration::hours(24) + Duration::minutes(59));
        }
    }

    #[test]
    fn test_expiration_date_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = fixed_now();
        let today = now.date_naive();

        for _ in 0..200 {
            let date = generate_expiration_date(&mut rng, now);
            let parsed = NaiveDate::parse_from_str(&date, DATE_FORMAT).unwrap();
            let days = (parsed - today).num_days();
            assert!((30..=730).contains(&days), "{date} is {days} days out");
        }
    }
}

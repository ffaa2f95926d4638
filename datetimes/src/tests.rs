//! Tests for Unix seconds conversions.

use super::*;
use chrono::{DateTime, TimeZone, Timelike, Utc};

#[test]
fn test_from_unix_secs_whole() {
    let t = from_unix_secs_f64(1736640000.0);
    assert_eq!(t, Utc.with_ymd_and_hms(2025, 1, 12, 0, 0, 0).unwrap());
}

#[test]
fn test_from_unix_secs_fraction() {
    let t = from_unix_secs_f64(1736640000.25);
    assert_eq!(t.timestamp(), 1736640000);
    assert_eq!(t.nanosecond(), 250_000_000);
}

#[test]
fn test_from_unix_secs_negative_fraction() {
    // -1.5s is half a second into the second before -1.
    let t = from_unix_secs_f64(-1.5);
    assert_eq!(t.timestamp(), -2);
    assert_eq!(t.nanosecond(), 500_000_000);
}

#[test]
fn test_from_unix_secs_out_of_range() {
    assert_eq!(from_unix_secs_f64(f64::NAN), DateTime::<Utc>::default());
    assert_eq!(from_unix_secs_f64(f64::INFINITY), DateTime::<Utc>::default());
    assert_eq!(from_unix_secs_f64(1e300), DateTime::<Utc>::default());
}

#[test]
fn test_to_unix_secs() {
    let t = Utc.with_ymd_and_hms(2025, 1, 12, 0, 0, 0).unwrap();
    assert_eq!(to_unix_secs_f64(&t), 1736640000.0);

    let t = Utc.timestamp_opt(10, 500_000_000).unwrap();
    assert_eq!(to_unix_secs_f64(&t), 10.5);
}

#[test]
fn test_round_trip_within_a_microsecond() {
    let t = Utc.timestamp_millis_opt(1705315800123).unwrap();
    let back = from_unix_secs_f64(to_unix_secs_f64(&t));
    let diff = (back - t).num_nanoseconds().unwrap().abs();
    assert!(diff < 1_000, "drifted {}ns", diff);
}

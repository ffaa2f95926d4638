//! Fractional Unix seconds.

use chrono::{DateTime, TimeZone, Utc};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Converts fractional Unix seconds to a UTC time.
///
/// The fraction is kept down to the nanosecond (as far as `f64` precision
/// allows). Values that are not finite or fall outside the range chrono can
/// represent map to the Unix epoch.
pub fn from_unix_secs_f64(secs: f64) -> DateTime<Utc> {
    if !secs.is_finite() {
        return DateTime::<Utc>::default();
    }
    let whole = secs.floor();
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return DateTime::<Utc>::default();
    }
    let nanos = ((secs - whole) * NANOS_PER_SEC).round() as i64;
    // Rounding can carry the fraction up to a full second.
    let (whole, nanos) = if nanos >= NANOS_PER_SEC as i64 {
        (whole as i64 + 1, 0)
    } else {
        (whole as i64, nanos as u32)
    };
    Utc.timestamp_opt(whole, nanos)
        .single()
        .unwrap_or_default()
}

/// Converts a UTC time to fractional Unix seconds.
pub fn to_unix_secs_f64(t: &DateTime<Utc>) -> f64 {
    t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) / NANOS_PER_SEC
}

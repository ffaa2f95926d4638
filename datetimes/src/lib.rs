//! Conversions between fractional Unix seconds and UTC times.
//!
//! Some sources report timestamps as floating-point seconds (`1736640000.25`).
//! These helpers convert them to and from [`chrono::DateTime<Utc>`] without
//! losing the fractional part.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use kitbag_datetimes::{from_unix_secs_f64, to_unix_secs_f64};
//!
//! let t = from_unix_secs_f64(1736640000.0);
//! assert_eq!(t, Utc.with_ymd_and_hms(2025, 1, 12, 0, 0, 0).unwrap());
//! assert_eq!(to_unix_secs_f64(&t), 1736640000.0);
//! ```

mod unix;

pub use unix::{from_unix_secs_f64, to_unix_secs_f64};

#[cfg(test)]
mod tests;

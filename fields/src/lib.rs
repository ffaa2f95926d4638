//! Numeric JSON field types that tolerate quoted numbers.
//!
//! APIs are not always consistent about whether a number arrives as `255` or
//! `"255"`. The types here accept both on input:
//!
//! - [`StrInt`] / [`StrInt64`]: integers, written back as bare JSON numbers
//! - [`StrFloat`] / [`StrFloat64`]: floats, written back as quoted
//!   shortest-form decimal strings
//!
//! # Example
//!
//! ```rust
//! use kitbag_fields::{StrFloat64, StrInt};
//!
//! let n: StrInt = serde_json::from_str(r#""255""#).unwrap();
//! assert_eq!(n.value(), 255);
//! assert_eq!(serde_json::to_string(&n).unwrap(), "255");
//!
//! let f: StrFloat64 = serde_json::from_str("-3.1415").unwrap();
//! assert_eq!(serde_json::to_string(&f).unwrap(), r#""-3.1415""#);
//! ```

mod str_float;
mod str_int;

pub use str_float::{StrFloat, StrFloat64};
pub use str_int::{StrInt, StrInt64};

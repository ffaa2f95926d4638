//! String and byte conversion helpers.
//!
//! - [`camel_to_snake`] / [`snake_to_camel`]: identifier case conversion
//! - [`cut_unicode_string`] / [`find_unicode_string`]: character-aware
//!   prefix and search
//! - [`bytes_to_str`], [`bytes_to_string_lossy`], [`string_to_bytes`],
//!   [`string_to_bytes_with_capacity`]: conversions between text and bytes
//!
//! # Example
//!
//! ```rust
//! use kitbag_conv::{camel_to_snake, cut_unicode_string, snake_to_camel};
//!
//! assert_eq!(camel_to_snake("UserID"), "user_id");
//! assert_eq!(snake_to_camel("user_name"), "UserName");
//! assert_eq!(cut_unicode_string("黄昏よりも", 2), "黄昏");
//! ```

mod bytes;
mod case;
mod unicode;

pub use bytes::{
    bytes_to_str, bytes_to_string_lossy, string_to_bytes, string_to_bytes_with_capacity,
};
pub use case::{camel_to_snake, snake_to_camel};
pub use unicode::{cut_unicode_string, find_unicode_string};

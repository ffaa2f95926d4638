//! Random numbers, choices and strings.
//!
//! Everything goes through a [`Random`] value that owns its generator, so
//! there is no process-wide state: seed it for reproducible output, or
//! build it from the operating system for unpredictable output.
//!
//! # Example
//!
//! ```rust
//! use kitbag_random::{Random, HEXADECIMAL};
//!
//! let mut a = Random::seeded(7);
//! let mut b = Random::seeded(7);
//! assert_eq!(a.string(16), b.string(16));
//!
//! let mut r = Random::from_os_rng();
//! let token = r.string_from_charset(32, HEXADECIMAL).unwrap();
//! assert_eq!(token.len(), 32);
//! ```

mod charset;
mod error;
mod generator;

pub use charset::{
    ASCII_ALPHABETS, ASCII_CHARACTERS, ASCII_LOWER, ASCII_UPPER, HEXADECIMAL, NUMERIC,
    PRINTABLES, PUNCTUATION,
};
pub use error::{RandomError, Result};
pub use generator::Random;

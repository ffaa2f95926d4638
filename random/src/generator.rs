//! The generator wrapper.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::charset::ASCII_CHARACTERS;
use crate::error::{RandomError, Result};

/// One past the largest Unicode scalar value.
const CODE_POINT_END: u32 = char::MAX as u32 + 1;

const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// Random values drawn from an owned generator.
///
/// # Example
///
/// ```
/// use kitbag_random::Random;
///
/// let mut r = Random::seeded(1);
/// let n = r.int_range(10, 20).unwrap();
/// assert!((10..20).contains(&n));
///
/// let word = r.alphabetic(8);
/// assert!(word.chars().all(|c| c.is_ascii_alphabetic()));
/// ```
#[derive(Debug, Clone)]
pub struct Random<R = StdRng> {
    rng: R,
}

impl Random<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Creates a generator that yields the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Random<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Random { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Returns a value in `[0, max)`.
    pub fn int(&mut self, max: i64) -> Result<i64> {
        self.int_range(0, max)
    }

    /// Returns a value in `[min, max)`.
    pub fn int_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if min >= max {
            return Err(RandomError::EmptyRange {
                start: min,
                end: max,
            });
        }
        Ok(self.rng.random_range(min..max))
    }

    /// Returns `n` characters from `[a-zA-Z0-9]`.
    pub fn string(&mut self, n: usize) -> String {
        let set: Vec<char> = ASCII_CHARACTERS.chars().collect();
        self.pick_chars(n, &set)
    }

    /// Returns `n` characters picked uniformly from `charset`.
    pub fn string_from_charset(&mut self, n: usize, charset: &str) -> Result<String> {
        let set: Vec<char> = charset.chars().collect();
        self.string_from_set(n, &set)
    }

    /// Returns `count` characters picked uniformly from `set`.
    pub fn string_from_set(&mut self, count: usize, set: &[char]) -> Result<String> {
        if set.is_empty() {
            return Err(RandomError::EmptyCharset);
        }
        Ok(self.pick_chars(count, set))
    }

    /// Returns a random element, or `None` if `items` is empty.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Returns `n` elements picked independently (so repeats are possible).
    /// At least one element is picked; an empty `items` yields nothing.
    pub fn choice_many<'a, T>(&mut self, items: &'a [T], n: usize) -> Vec<&'a T> {
        if items.is_empty() {
            return Vec::new();
        }
        (0..n.max(1))
            .filter_map(|_| items.choose(&mut self.rng))
            .collect()
    }

    /// Returns `count` characters with code points in `[start, end)`,
    /// restricted to ASCII letters and/or digits when `letters` or
    /// `numbers` is set.
    ///
    /// `start == end == 0` selects a default range: printable ASCII up to
    /// `'z'` when letters or numbers are requested, all of Unicode
    /// otherwise. Surrogate code points are never produced.
    pub fn spec_str(
        &mut self,
        count: usize,
        start: u32,
        end: u32,
        letters: bool,
        numbers: bool,
    ) -> Result<String> {
        let (start, end) = match (start, end) {
            (0, 0) if letters || numbers => (u32::from(' '), u32::from('z') + 1),
            (0, 0) => (0, CODE_POINT_END),
            (s, e) => (s, e.min(CODE_POINT_END)),
        };
        if start >= end {
            return Err(RandomError::EmptyRange {
                start: i64::from(start),
                end: i64::from(end),
            });
        }
        if !has_candidate(start, end, letters, numbers) {
            return Err(RandomError::EmptyCharset);
        }
        Ok(self.filtered(count, start, end, letters, numbers))
    }

    /// Returns `count` characters from printable ASCII (32 to 126).
    pub fn ascii(&mut self, count: usize) -> String {
        self.filtered(count, 32, 127, false, false)
    }

    /// Returns `count` characters from `[a-zA-Z]`.
    pub fn alphabetic(&mut self, count: usize) -> String {
        self.filtered(count, u32::from(' '), u32::from('z') + 1, true, false)
    }

    /// Returns `count` characters from `[a-zA-Z0-9]`.
    pub fn alphanumeric(&mut self, count: usize) -> String {
        self.filtered(count, u32::from(' '), u32::from('z') + 1, true, true)
    }

    /// Returns `count` characters from `[0-9]`.
    pub fn numeric(&mut self, count: usize) -> String {
        self.filtered(count, u32::from(' '), u32::from('z') + 1, false, true)
    }

    fn pick_chars(&mut self, n: usize, set: &[char]) -> String {
        (0..n)
            .filter_map(|_| set.choose(&mut self.rng).copied())
            .collect()
    }

    /// Draws code points from `[start, end)` until `count` of them pass the
    /// filter. The caller guarantees at least one candidate exists.
    fn filtered(
        &mut self,
        count: usize,
        start: u32,
        end: u32,
        letters: bool,
        numbers: bool,
    ) -> String {
        let mut out = String::with_capacity(count);
        let mut remaining = count;
        while remaining > 0 {
            let Some(ch) = char::from_u32(self.rng.random_range(start..end)) else {
                continue;
            };
            if accepts(ch, letters, numbers) {
                out.push(ch);
                remaining -= 1;
            }
        }
        out
    }
}

fn accepts(ch: char, letters: bool, numbers: bool) -> bool {
    if !letters && !numbers {
        return true;
    }
    (letters && ch.is_ascii_alphabetic()) || (numbers && ch.is_ascii_digit())
}

fn has_candidate(start: u32, end: u32, letters: bool, numbers: bool) -> bool {
    if !letters && !numbers {
        // Anything outside the surrogate block is a valid char.
        return start < *SURROGATES.start() || end > *SURROGATES.end() + 1;
    }
    (start..end.min(128))
        .filter_map(char::from_u32)
        .any(|ch| accepts(ch, letters, numbers))
}

//! Character-aware string helpers.

/// Returns the first `n` characters of `s`.
///
/// Returns an empty string when `n` is zero or `s` has fewer than `n`
/// characters.
pub fn cut_unicode_string(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None if s.chars().count() == n => s,
        None => "",
    }
}

/// Reports whether `needle` occurs in `src` as a whole run of characters.
///
/// An empty needle is never found.
pub fn find_unicode_string(src: &str, needle: &str) -> bool {
    !needle.is_empty() && src.contains(needle)
}

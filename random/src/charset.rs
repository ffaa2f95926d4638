//! Character sets for [`Random::string_from_charset`](crate::Random::string_from_charset).

/// `[0-9]`
pub const NUMERIC: &str = "0123456789";

/// `[a-z]`
pub const ASCII_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// `[A-Z]`
pub const ASCII_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `[a-zA-Z]`
pub const ASCII_ALPHABETS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `[a-zA-Z0-9]`
pub const ASCII_CHARACTERS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// `[0-9a-fA-F]`
pub const HEXADECIMAL: &str = "0123456789abcdefABCDEF";

/// ASCII punctuation and symbols.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Digits, letters and punctuation.
pub const PRINTABLES: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

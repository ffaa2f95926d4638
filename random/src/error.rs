//! Error types for random generation.

/// Result type alias for random generation.
pub type Result<T> = std::result::Result<T, RandomError>;

/// Random generation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RandomError {
    /// The requested range holds no values.
    #[error("random: empty range [{start}, {end})")]
    EmptyRange { start: i64, end: i64 },

    /// There are no characters to pick from.
    #[error("random: empty charset")]
    EmptyCharset,
}

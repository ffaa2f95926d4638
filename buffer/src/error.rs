//! Error types for buffer operations.

use std::io;

/// Result type alias for buffer operations.
pub type Result<T> = std::result::Result<T, BufferError>;

/// Buffer operation error.
///
/// `Eof` is the normal end-of-data condition and is kept apart from the
/// argument and usage errors so callers can loop until they observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// No unread data remains.
    #[error("buffer: eof")]
    Eof,

    /// A random-access read copied fewer bytes than requested before
    /// reaching the end of the data.
    #[error("buffer: short read ({n} bytes)")]
    ShortRead { n: usize },

    /// A random-access operation was given a negative offset.
    #[error("buffer: negative offset")]
    NegativeOffset,

    /// A seek resolved to a position before the start of the buffer.
    #[error("buffer: seek to negative position")]
    NegativePosition,

    /// `unread_byte` without a preceding successful read.
    #[error("buffer: unread_byte: previous operation was not a successful read")]
    InvalidUnreadByte,

    /// `unread_rune` without a preceding successful `read_rune`.
    #[error("buffer: unread_rune: previous operation was not a successful read_rune")]
    InvalidUnreadRune,
}

impl BufferError {
    /// Reports whether this is the end-of-data condition (`Eof` or a short
    /// random-access read).
    pub fn is_eof(&self) -> bool {
        matches!(self, BufferError::Eof | BufferError::ShortRead { .. })
    }
}

impl From<BufferError> for io::Error {
    fn from(e: BufferError) -> Self {
        let kind = if e.is_eof() {
            io::ErrorKind::UnexpectedEof
        } else {
            io::ErrorKind::InvalidInput
        };
        io::Error::new(kind, e)
    }
}

/// Result of a delimiter scan.
///
/// `Found` carries a span that ends with the delimiter. `Eof` carries the
/// remaining data when the delimiter did not occur before the end of the
/// buffer (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delimited<T> {
    Found(T),
    Eof(T),
}

impl<T> Delimited<T> {
    /// Returns true when the scan hit the end of the data without finding
    /// the delimiter.
    pub fn is_eof(&self) -> bool {
        matches!(self, Delimited::Eof(_))
    }

    /// Returns the scanned span regardless of how the scan ended.
    pub fn into_inner(self) -> T {
        match self {
            Delimited::Found(v) | Delimited::Eof(v) => v,
        }
    }

    /// Returns a reference to the scanned span.
    pub fn as_inner(&self) -> &T {
        match self {
            Delimited::Found(v) | Delimited::Eof(v) => v,
        }
    }

    /// Maps the carried span, keeping the variant.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Delimited<U> {
        match self {
            Delimited::Found(v) => Delimited::Found(f(v)),
            Delimited::Eof(v) => Delimited::Eof(f(v)),
        }
    }
}

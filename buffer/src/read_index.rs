//! Buffer whose reads never discard written data.

use std::fmt;
use std::io::{self, SeekFrom};

use crate::byte_buffer::{ByteBuffer, Compaction, SMALL_BUFFER_SIZE};
use crate::error::{Delimited, Result};

/// A write-then-read-elsewhere buffer.
///
/// The write position is always the end of the data; the read index moves
/// independently and reading never drops anything. `len()` and `as_slice()`
/// describe everything written, so a producer can fill the buffer, hand it
/// to a consumer that reads it sequentially, and still copy out the whole
/// content afterwards.
///
/// Single-owner, like [`ByteBuffer`].
///
/// # Example
///
/// ```
/// use kitbag_buffer::ReadIndexBuffer;
///
/// let mut buf = ReadIndexBuffer::new();
/// buf.write(b"abc");
///
/// let mut p = [0u8; 2];
/// buf.read(&mut p).unwrap();
/// assert_eq!(buf.unread_len(), 1);
/// assert_eq!(buf.len(), 3);
/// assert_eq!(buf.as_slice(), b"abc");
/// ```
#[derive(Debug, Clone)]
pub struct ReadIndexBuffer {
    inner: ByteBuffer,
}

impl Default for ReadIndexBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadIndexBuffer {
    /// Creates an empty buffer with [`SMALL_BUFFER_SIZE`] bytes reserved.
    pub fn new() -> Self {
        Self::with_capacity(SMALL_BUFFER_SIZE)
    }

    /// Creates an empty buffer with room for `capacity` bytes. A zero
    /// capacity falls back to [`SMALL_BUFFER_SIZE`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            SMALL_BUFFER_SIZE
        } else {
            capacity
        };
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Creates a buffer holding `buf`, with the read index at the start.
    pub fn from_vec(buf: Vec<u8>) -> Self {
        ReadIndexBuffer {
            inner: ByteBuffer::from_vec(buf).with_compaction(Compaction::Manual),
        }
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.inner.size()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of bytes between the read index and the end.
    pub fn unread_len(&self) -> usize {
        self.inner.len()
    }

    /// Same as [`len`](Self::len); the range addressable by `read_at`.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Returns the capacity of the underlying storage.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the read index.
    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    /// Returns everything written.
    pub fn as_slice(&self) -> &[u8] {
        self.inner.as_slice()
    }

    /// Returns the part not yet read.
    pub fn unread_bytes(&self) -> &[u8] {
        self.inner.unread_bytes()
    }

    /// Consumes the buffer and returns its storage.
    pub fn into_vec(self) -> Vec<u8> {
        self.inner.into_vec()
    }

    /// Empties the buffer, keeping the allocation.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Replaces the contents with `buf` and rewinds the read index.
    pub fn reset_to(&mut self, buf: Vec<u8>) {
        self.inner.reset_to(buf);
    }

    /// Keeps the first `n` unread bytes and drops the rest.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`unread_len`](Self::unread_len).
    pub fn truncate(&mut self, n: usize) {
        self.inner.truncate(n);
    }

    /// Reserves room for `n` more bytes.
    pub fn grow(&mut self, n: usize) {
        self.inner.grow(n);
    }

    /// Empties the buffer. Calling it again is harmless.
    pub fn close(&mut self) {
        self.inner.reset();
    }

    pub fn write(&mut self, p: &[u8]) -> usize {
        self.inner.write(p)
    }

    pub fn write_str(&mut self, s: &str) -> usize {
        self.inner.write_str(s)
    }

    pub fn write_byte(&mut self, c: u8) {
        self.inner.write_byte(c);
    }

    pub fn write_rune(&mut self, r: char) -> usize {
        self.inner.write_rune(r)
    }

    pub fn write_at(&mut self, p: &[u8], pos: i64) -> Result<usize> {
        self.inner.write_at(p, pos)
    }

    pub fn read(&mut self, p: &mut [u8]) -> Result<usize> {
        self.inner.read(p)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        self.inner.read_byte()
    }

    pub fn unread_byte(&mut self) -> Result<()> {
        self.inner.unread_byte()
    }

    pub fn read_rune(&mut self) -> Result<(char, usize)> {
        self.inner.read_rune()
    }

    pub fn unread_rune(&mut self) -> Result<()> {
        self.inner.unread_rune()
    }

    pub fn read_bytes(&mut self, delim: u8) -> Delimited<Vec<u8>> {
        self.inner.read_bytes(delim)
    }

    pub fn read_string(&mut self, delim: u8) -> Delimited<String> {
        self.inner.read_string(delim)
    }

    pub fn read_at(&self, p: &mut [u8], off: i64) -> Result<usize> {
        self.inner.read_at(p, off)
    }

    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.inner.seek(pos)
    }

    /// Writes everything written so far to `w`. The read index does not
    /// move.
    pub fn write_to<W: io::Write + ?Sized>(&self, w: &mut W) -> io::Result<u64> {
        w.write_all(self.as_slice())?;
        Ok(self.len() as u64)
    }

    /// Replaces the contents with everything `r` yields until end of input.
    pub fn read_from<R: io::Read + ?Sized>(&mut self, r: &mut R) -> io::Result<u64> {
        self.inner.reset();
        self.inner.read_from(r)
    }
}

impl fmt::Display for ReadIndexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_slice()))
    }
}

impl From<Vec<u8>> for ReadIndexBuffer {
    fn from(buf: Vec<u8>) -> Self {
        Self::from_vec(buf)
    }
}

impl From<&str> for ReadIndexBuffer {
    fn from(s: &str) -> Self {
        Self::from_vec(s.as_bytes().to_vec())
    }
}

impl io::Read for ReadIndexBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut self.inner, buf)
    }
}

impl io::Write for ReadIndexBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.inner.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Seek for ReadIndexBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        io::Seek::seek(&mut self.inner, pos)
    }
}

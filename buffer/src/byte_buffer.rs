//! Growable byte buffer with reader, writer and seeker semantics.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, SeekFrom};

use tracing::trace;

use crate::error::{BufferError, Delimited, Result};

/// Initial allocation for an empty buffer's first small write.
pub const SMALL_BUFFER_SIZE: usize = 64;

/// Minimum spare room offered to a reader by [`ByteBuffer::read_from`].
pub const MIN_READ: usize = 512;

const MAX_SIZE: usize = isize::MAX as usize;

const TOO_LARGE: &str = "buffer: too large";

/// What happens to consumed bytes once every written byte has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compaction {
    /// Discard the consumed prefix when the buffer drains and slide unread
    /// data to the front when growing.
    #[default]
    Auto,
    /// Keep everything that was written until an explicit reset or
    /// truncate, so a drained buffer can be seeked back and read again.
    Manual,
}

/// The last action performed on the buffer, so unread operations can check
/// for invalid usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadOp {
    Invalid,
    Read,
    Rune(u8),
}

/// A variable-sized buffer of bytes with read and write methods.
///
/// Writes append at the end of the written data. Reads consume from a read
/// cursor that never passes the write position unless moved there by
/// [`seek`](Self::seek). Random-access reads and writes by absolute offset
/// leave the read cursor alone.
///
/// `ByteBuffer` is single-owner: mutation requires `&mut self`. Wrap it in a
/// [`SyncByteBuffer`](crate::SyncByteBuffer) to share it between threads.
///
/// # Example
///
/// ```
/// use kitbag_buffer::{ByteBuffer, Delimited};
///
/// let mut buf = ByteBuffer::new();
/// buf.write_str("ab\ncd\n");
///
/// assert_eq!(buf.read_string(b'\n'), Delimited::Found("ab\n".to_string()));
/// assert_eq!(buf.read_string(b'\n'), Delimited::Found("cd\n".to_string()));
/// assert!(buf.read_string(b'\n').is_eof());
/// ```
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    buf: Vec<u8>,
    off: usize,
    last_read: ReadOp,
    compaction: Compaction,
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteBuffer {
    /// Creates an empty buffer. Nothing is allocated until the first write.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Creates a buffer that reads the contents of `buf`.
    ///
    /// The buffer takes ownership of `buf`; its spare capacity is used by
    /// later writes.
    pub fn from_vec(buf: Vec<u8>) -> Self {
        ByteBuffer {
            buf,
            off: 0,
            last_read: ReadOp::Invalid,
            compaction: Compaction::Auto,
        }
    }

    /// Sets the compaction policy.
    pub fn with_compaction(mut self, compaction: Compaction) -> Self {
        self.compaction = compaction;
        self
    }

    /// Returns the compaction policy.
    pub fn compaction(&self) -> Compaction {
        self.compaction
    }

    /// Changes the compaction policy. Bytes already discarded stay discarded.
    pub fn set_compaction(&mut self, compaction: Compaction) {
        self.compaction = compaction;
    }

    /// Returns the unread portion of the buffer.
    pub fn unread_bytes(&self) -> &[u8] {
        &self.buf[self.unread_start()..]
    }

    /// Returns every byte currently held, read or not.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the buffer and returns its storage, including bytes that
    /// were already read but not yet compacted away.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    /// Returns the unread portion as text, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.unread_bytes())
    }

    /// Returns the number of unread bytes.
    pub fn len(&self) -> usize {
        self.buf.len().saturating_sub(self.off)
    }

    /// Returns true if no unread bytes remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the capacity of the underlying storage.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of bytes held, which is the range addressable by
    /// [`read_at`](Self::read_at).
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Returns the read cursor.
    pub fn position(&self) -> u64 {
        self.off as u64
    }

    /// Discards all but the first `n` unread bytes, keeping the allocation.
    ///
    /// `truncate(0)` is the same as [`reset`](Self::reset).
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the number of unread bytes.
    pub fn truncate(&mut self, n: usize) {
        if n == 0 {
            self.reset();
            return;
        }
        self.last_read = ReadOp::Invalid;
        assert!(n <= self.len(), "buffer: truncation out of range");
        self.buf.truncate(self.off + n);
    }

    /// Empties the buffer but keeps the allocation for future writes.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.off = 0;
        self.last_read = ReadOp::Invalid;
    }

    /// Replaces the contents with `buf` and rewinds the read cursor.
    pub fn reset_to(&mut self, buf: Vec<u8>) {
        self.buf = buf;
        self.off = 0;
        self.last_read = ReadOp::Invalid;
    }

    /// Reserves room for `n` more bytes without changing the length, so
    /// the next `n` bytes of writes do not reallocate.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity exceeds `isize::MAX`.
    pub fn grow(&mut self, n: usize) {
        self.make_room(n);
    }

    fn unread_start(&self) -> usize {
        self.off.min(self.buf.len())
    }

    fn is_drained(&self) -> bool {
        self.buf.len() <= self.off
    }

    fn auto_compact(&mut self) {
        if self.compaction == Compaction::Auto {
            self.reset();
        }
    }

    /// Makes sure `n` more bytes can be appended without reallocating.
    fn make_room(&mut self, n: usize) {
        let m = self.len();
        if m == 0 && self.off != 0 && self.compaction == Compaction::Auto {
            self.reset();
        }

        if n <= self.buf.capacity() - self.buf.len() {
            return;
        }
        if self.buf.capacity() == 0 && n <= SMALL_BUFFER_SIZE {
            self.buf.reserve_exact(SMALL_BUFFER_SIZE);
            return;
        }

        let c = self.buf.capacity();
        match self.compaction {
            Compaction::Auto if m <= c / 2 && n <= c / 2 - m => {
                // Unread data plus n fits in half the capacity: slide.
                trace!("buffer: sliding {} unread bytes to the front", m);
                let start = self.unread_start();
                self.buf.copy_within(start.., 0);
                self.buf.truncate(m);
                self.off = 0;
            }
            Compaction::Auto => {
                let new_cap = next_capacity(c, n);
                trace!("buffer: reallocating {} -> {} bytes", c, new_cap);
                let mut grown = Vec::with_capacity(new_cap);
                grown.extend_from_slice(self.unread_bytes());
                self.buf = grown;
                self.off = 0;
            }
            Compaction::Manual => {
                let new_cap = next_capacity(c, n);
                trace!("buffer: reallocating {} -> {} bytes (manual)", c, new_cap);
                self.buf.reserve_exact(new_cap - self.buf.len());
            }
        }
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Appends `p`, growing as needed. Returns `p.len()`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer would grow beyond `isize::MAX` bytes.
    pub fn write(&mut self, p: &[u8]) -> usize {
        self.last_read = ReadOp::Invalid;
        self.make_room(p.len());
        self.buf.extend_from_slice(p);
        p.len()
    }

    /// Appends the bytes of `s`. Returns `s.len()`.
    pub fn write_str(&mut self, s: &str) -> usize {
        self.write(s.as_bytes())
    }

    /// Appends a single byte.
    pub fn write_byte(&mut self, c: u8) {
        self.write(&[c]);
    }

    /// Appends the UTF-8 encoding of `r`. Returns the encoded length.
    pub fn write_rune(&mut self, r: char) -> usize {
        let mut tmp = [0u8; 4];
        self.write(r.encode_utf8(&mut tmp).as_bytes())
    }

    /// Writes `p` at absolute offset `pos`, overwriting any bytes already
    /// there. Writing past the end extends the buffer, zero-filling the gap.
    /// The read cursor does not move.
    pub fn write_at(&mut self, p: &[u8], pos: i64) -> Result<usize> {
        if pos < 0 {
            return Err(BufferError::NegativeOffset);
        }
        let pos = usize::try_from(pos).unwrap_or_else(|_| panic!("{}", TOO_LARGE));
        let end = pos
            .checked_add(p.len())
            .filter(|&end| end <= MAX_SIZE)
            .unwrap_or_else(|| panic!("{}", TOO_LARGE));

        self.last_read = ReadOp::Invalid;
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
        self.buf[pos..end].copy_from_slice(p);
        Ok(p.len())
    }

    /// Reads from `r` until it reports end of input, appending everything.
    /// Returns the number of bytes absorbed.
    ///
    /// # Panics
    ///
    /// Panics if the buffer would grow beyond `isize::MAX` bytes, or if `r`
    /// reports reading more bytes than it was offered.
    pub fn read_from<R: io::Read + ?Sized>(&mut self, r: &mut R) -> io::Result<u64> {
        self.fill_from(r).map(|(total, _)| total)
    }

    /// Body of [`read_from`](Self::read_from). Also returns how many spare
    /// bytes were zeroed before being offered to `r`.
    ///
    /// The zeroed tail is kept between reads and only extended after the
    /// buffer grows, so each byte of capacity is initialized at most once
    /// per allocation.
    fn fill_from<R: io::Read + ?Sized>(&mut self, r: &mut R) -> io::Result<(u64, usize)> {
        self.last_read = ReadOp::Invalid;
        let mut total = 0u64;
        let mut zeroed = 0usize;
        let mut filled = self.buf.len();
        loop {
            if filled == self.buf.len() {
                self.make_room(MIN_READ);
                filled = self.buf.len();
                let cap = self.buf.capacity();
                zeroed += cap - filled;
                self.buf.resize(cap, 0);
            }

            match r.read(&mut self.buf[filled..]) {
                Ok(0) => {
                    self.buf.truncate(filled);
                    return Ok((total, zeroed));
                }
                Ok(m) => {
                    assert!(
                        m <= self.buf.len() - filled,
                        "buffer: reader returned invalid count"
                    );
                    filled += m;
                    total += m as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.buf.truncate(filled);
                    return Err(e);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Reads up to `p.len()` unread bytes into `p`.
    ///
    /// Returns `Err(BufferError::Eof)` when nothing is left to read and `p`
    /// is not empty. A drained buffer compacts itself unless the policy is
    /// [`Compaction::Manual`].
    pub fn read(&mut self, p: &mut [u8]) -> Result<usize> {
        self.last_read = ReadOp::Invalid;
        if self.is_drained() {
            self.auto_compact();
            if p.is_empty() {
                return Ok(0);
            }
            return Err(BufferError::Eof);
        }
        let src = &self.buf[self.off..];
        let n = p.len().min(src.len());
        p[..n].copy_from_slice(&src[..n]);
        self.off += n;
        if n > 0 {
            self.last_read = ReadOp::Read;
        }
        Ok(n)
    }

    /// Returns the next `n` unread bytes (or fewer, if fewer remain) and
    /// advances past them as if they had been read.
    pub fn next(&mut self, n: usize) -> &[u8] {
        self.last_read = ReadOp::Invalid;
        let n = n.min(self.len());
        if n == 0 {
            return &[];
        }
        let start = self.off;
        self.off += n;
        self.last_read = ReadOp::Read;
        &self.buf[start..start + n]
    }

    /// Reads one byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.is_drained() {
            self.last_read = ReadOp::Invalid;
            self.auto_compact();
            return Err(BufferError::Eof);
        }
        let c = self.buf[self.off];
        self.off += 1;
        self.last_read = ReadOp::Read;
        Ok(c)
    }

    /// Reads one UTF-8 encoded character and returns it with its encoded
    /// length.
    ///
    /// An invalid or truncated encoding consumes exactly one byte and yields
    /// `(char::REPLACEMENT_CHARACTER, 1)`.
    pub fn read_rune(&mut self) -> Result<(char, usize)> {
        if self.is_drained() {
            self.last_read = ReadOp::Invalid;
            self.auto_compact();
            return Err(BufferError::Eof);
        }
        let c = self.buf[self.off];
        if c.is_ascii() {
            self.off += 1;
            self.last_read = ReadOp::Rune(1);
            return Ok((char::from(c), 1));
        }
        let (r, n) = decode_rune(&self.buf[self.off..]);
        self.off += n;
        self.last_read = ReadOp::Rune(n as u8);
        Ok((r, n))
    }

    /// Steps back over the byte returned by the last successful read.
    ///
    /// Fails after a write, a seek, a read that returned nothing, a previous
    /// unread, or at the start of the buffer.
    pub fn unread_byte(&mut self) -> Result<()> {
        if self.last_read == ReadOp::Invalid || self.off == 0 {
            return Err(BufferError::InvalidUnreadByte);
        }
        self.last_read = ReadOp::Invalid;
        self.off -= 1;
        Ok(())
    }

    /// Steps back over the character returned by the last
    /// [`read_rune`](Self::read_rune).
    ///
    /// Stricter than [`unread_byte`](Self::unread_byte): the previous
    /// operation must have been a successful `read_rune`.
    pub fn unread_rune(&mut self) -> Result<()> {
        let ReadOp::Rune(n) = self.last_read else {
            return Err(BufferError::InvalidUnreadRune);
        };
        let n = usize::from(n);
        if self.off >= n {
            self.off -= n;
        }
        self.last_read = ReadOp::Invalid;
        Ok(())
    }

    /// Locates the span from the read cursor through the first `delim` and
    /// advances past it. Returns the span bounds and whether it ends with
    /// `delim`.
    fn scan(&mut self, delim: u8) -> (usize, usize, bool) {
        let start = self.unread_start();
        let (end, found) = match self.buf[start..].iter().position(|&b| b == delim) {
            Some(i) => (start + i + 1, true),
            None => (self.buf.len(), false),
        };
        self.off = end;
        self.last_read = if end > start {
            ReadOp::Read
        } else {
            ReadOp::Invalid
        };
        (start, end, found)
    }

    /// Returns a borrowed span through the first `delim`.
    ///
    /// The span borrows the buffer, so it cannot outlive the next mutation.
    pub fn read_slice(&mut self, delim: u8) -> Delimited<&[u8]> {
        let (start, end, found) = self.scan(delim);
        let line = &self.buf[start..end];
        if found {
            Delimited::Found(line)
        } else {
            Delimited::Eof(line)
        }
    }

    /// Reads through the first occurrence of `delim`, delimiter included.
    ///
    /// Returns [`Delimited::Eof`] with the rest of the data exactly when the
    /// delimiter does not occur before the end of the buffer.
    pub fn read_bytes(&mut self, delim: u8) -> Delimited<Vec<u8>> {
        self.read_slice(delim).map(<[u8]>::to_vec)
    }

    /// Like [`read_bytes`](Self::read_bytes) but returns text. Invalid UTF-8
    /// is replaced with U+FFFD.
    pub fn read_string(&mut self, delim: u8) -> Delimited<String> {
        self.read_slice(delim)
            .map(|line| String::from_utf8_lossy(line).into_owned())
    }

    /// Copies bytes starting at absolute offset `off` into `p` without
    /// touching the read cursor.
    ///
    /// Returns `Eof` when `off` is at or past the end, and
    /// `ShortRead { n }` when only `n < p.len()` bytes were available (the
    /// `n` bytes are still copied).
    pub fn read_at(&self, p: &mut [u8], off: i64) -> Result<usize> {
        if off < 0 {
            return Err(BufferError::NegativeOffset);
        }
        let off = usize::try_from(off).unwrap_or(usize::MAX);
        if off >= self.buf.len() {
            return Err(BufferError::Eof);
        }
        let src = &self.buf[off..];
        let n = p.len().min(src.len());
        p[..n].copy_from_slice(&src[..n]);
        if n < p.len() {
            return Err(BufferError::ShortRead { n });
        }
        Ok(n)
    }

    /// Writes the unread data to `w` until the buffer is drained or `w`
    /// fails. Returns the number of bytes written.
    ///
    /// A zero-length write from `w` is reported as
    /// [`io::ErrorKind::WriteZero`].
    pub fn write_to<W: io::Write + ?Sized>(&mut self, w: &mut W) -> io::Result<u64> {
        self.last_read = ReadOp::Invalid;
        let mut total = 0u64;
        while !self.is_drained() {
            match w.write(&self.buf[self.off..]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "buffer: short write",
                    ));
                }
                Ok(m) => {
                    assert!(m <= self.len(), "buffer: invalid write count");
                    self.off += m;
                    total += m as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        self.auto_compact();
        Ok(total)
    }

    // ------------------------------------------------------------------
    // Seeking
    // ------------------------------------------------------------------

    /// Moves the read cursor. Positions past the end are allowed and read
    /// as end-of-data.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.last_read = ReadOp::Invalid;
        let abs = match pos {
            SeekFrom::Start(n) => i128::from(n),
            SeekFrom::Current(delta) => self.off as i128 + i128::from(delta),
            SeekFrom::End(delta) => self.buf.len() as i128 + i128::from(delta),
        };
        if abs < 0 {
            return Err(BufferError::NegativePosition);
        }
        self.off = usize::try_from(abs).unwrap_or(usize::MAX);
        Ok(u64::try_from(abs).unwrap_or(u64::MAX))
    }

    /// Moves the read cursor to the first byte held.
    pub fn seek_start(&mut self) {
        self.last_read = ReadOp::Invalid;
        self.off = 0;
    }

    /// Moves the read cursor to the write position.
    pub fn seek_end(&mut self) {
        self.last_read = ReadOp::Invalid;
        self.off = self.buf.len();
    }
}

fn next_capacity(cap: usize, n: usize) -> usize {
    cap.checked_mul(2)
        .and_then(|c| c.checked_add(n))
        .filter(|&c| c <= MAX_SIZE)
        .unwrap_or_else(|| panic!("{}", TOO_LARGE))
}

/// Decodes the first character of `p`, which must not be empty.
fn decode_rune(p: &[u8]) -> (char, usize) {
    let head = &p[..p.len().min(4)];
    let valid = match std::str::from_utf8(head) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&head[..e.valid_up_to()]).unwrap_or_default(),
    };
    match valid.chars().next() {
        Some(r) => (r, r.len_utf8()),
        None => (char::REPLACEMENT_CHARACTER, 1),
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(buf: Vec<u8>) -> Self {
        Self::from_vec(buf)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(buf: &[u8]) -> Self {
        Self::from_vec(buf.to_vec())
    }
}

impl From<String> for ByteBuffer {
    fn from(s: String) -> Self {
        Self::from_vec(s.into_bytes())
    }
}

impl From<&str> for ByteBuffer {
    fn from(s: &str) -> Self {
        Self::from_vec(s.as_bytes().to_vec())
    }
}

impl io::Read for ByteBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match ByteBuffer::read(self, buf) {
            Ok(n) => Ok(n),
            Err(BufferError::Eof) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

impl io::BufRead for ByteBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.unread_bytes())
    }

    fn consume(&mut self, amt: usize) {
        self.last_read = ReadOp::Invalid;
        self.off = self.unread_start() + amt.min(self.len());
    }
}

impl io::Write for ByteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(ByteBuffer::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Seek for ByteBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        ByteBuffer::seek(self, pos).map_err(io::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, Read as _, Write as _};

    #[test]
    fn test_write_read_round_trip() {
        let chunks: [&[u8]; 4] = [b"hello", b", ", b"", b"world and more bytes"];
        let mut buf = ByteBuffer::new();
        let mut want = Vec::new();
        for chunk in chunks {
            assert_eq!(buf.write(chunk), chunk.len());
            want.extend_from_slice(chunk);
        }

        let mut got = Vec::new();
        let mut p = [0u8; 3];
        loop {
            match buf.read(&mut p) {
                Ok(n) => got.extend_from_slice(&p[..n]),
                Err(BufferError::Eof) => break,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
        assert_eq!(got, want);
    }

    #[test]
    fn test_growth_byte_at_a_time() {
        for n in [1usize, 63, 64, 65, 1000, 100_000] {
            let mut buf = ByteBuffer::with_capacity(1);
            for i in 0..n {
                buf.write_byte((i % 251) as u8);
            }
            assert_eq!(buf.len(), n);
            for (i, &b) in buf.unread_bytes().iter().enumerate() {
                assert_eq!(b, (i % 251) as u8, "n={} i={}", n, i);
            }
        }
    }

    #[test]
    fn test_growth_interleaved_with_reads() {
        let mut buf = ByteBuffer::with_capacity(8);
        let mut expected = 0u8;
        let mut next = 0u8;
        for _ in 0..500 {
            for _ in 0..7 {
                buf.write_byte(next);
                next = next.wrapping_add(1);
            }
            for _ in 0..5 {
                assert_eq!(buf.read_byte().unwrap(), expected);
                expected = expected.wrapping_add(1);
            }
        }
        while let Ok(b) = buf.read_byte() {
            assert_eq!(b, expected);
            expected = expected.wrapping_add(1);
        }
        assert_eq!(expected, next);
    }

    #[test]
    fn test_first_small_write_allocates_small_buffer() {
        let mut buf = ByteBuffer::new();
        assert_eq!(buf.capacity(), 0);
        buf.write(b"abc");
        assert!(buf.capacity() >= SMALL_BUFFER_SIZE);
    }

    #[test]
    fn test_growth_at_least_doubles() {
        let mut buf = ByteBuffer::with_capacity(100);
        buf.write(&[1u8; 100]);
        buf.write_byte(2);
        assert!(buf.capacity() >= 201);
    }

    #[test]
    fn test_rune_round_trip() {
        let runes = ['a', 'é', '中', '😀', '\u{7f}', '\u{80}'];
        let sizes = [1usize, 2, 3, 4, 1, 2];

        let mut buf = ByteBuffer::new();
        for (r, &size) in runes.iter().zip(&sizes) {
            assert_eq!(buf.write_rune(*r), size);
        }
        for (r, &size) in runes.iter().zip(&sizes) {
            assert_eq!(buf.read_rune().unwrap(), (*r, size));
        }
        assert_eq!(buf.read_rune(), Err(BufferError::Eof));
    }

    #[test]
    fn test_read_rune_invalid_encoding() {
        let mut buf = ByteBuffer::from_vec(vec![0xff, b'a', 0xe4, 0xb8]);
        assert_eq!(buf.read_rune().unwrap(), (char::REPLACEMENT_CHARACTER, 1));
        assert_eq!(buf.read_rune().unwrap(), ('a', 1));
        // Truncated three-byte sequence: one byte at a time.
        assert_eq!(buf.read_rune().unwrap(), (char::REPLACEMENT_CHARACTER, 1));
        assert_eq!(buf.read_rune().unwrap(), (char::REPLACEMENT_CHARACTER, 1));
        assert!(buf.read_rune().is_err());
    }

    #[test]
    fn test_unread_byte_symmetry() {
        let mut buf = ByteBuffer::from("abc");
        assert_eq!(buf.read_byte().unwrap(), b'a');
        assert_eq!(buf.position(), 1);
        buf.unread_byte().unwrap();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.read_byte().unwrap(), b'a');

        buf.unread_byte().unwrap();
        assert_eq!(buf.unread_byte(), Err(BufferError::InvalidUnreadByte));
    }

    #[test]
    fn test_unread_byte_after_write_fails() {
        let mut buf = ByteBuffer::from("abc");
        buf.read_byte().unwrap();
        buf.write(b"d");
        assert_eq!(buf.unread_byte(), Err(BufferError::InvalidUnreadByte));
    }

    #[test]
    fn test_unread_byte_at_start_fails() {
        let mut buf = ByteBuffer::new();
        assert_eq!(buf.unread_byte(), Err(BufferError::InvalidUnreadByte));
    }

    #[test]
    fn test_unread_rune() {
        let mut buf = ByteBuffer::from("中a");
        assert_eq!(buf.read_rune().unwrap(), ('中', 3));
        buf.unread_rune().unwrap();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.unread_rune(), Err(BufferError::InvalidUnreadRune));

        // A byte read does not qualify.
        buf.read_byte().unwrap();
        assert_eq!(buf.unread_rune(), Err(BufferError::InvalidUnreadRune));

        // But a rune read lets unread_byte step back one byte.
        let mut buf = ByteBuffer::from("ab");
        buf.read_rune().unwrap();
        buf.unread_byte().unwrap();
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn test_read_string_delimiter_scan() {
        let mut buf = ByteBuffer::from("ab\ncd\n");
        assert_eq!(buf.read_string(b'\n'), Delimited::Found("ab\n".to_string()));
        assert_eq!(buf.read_string(b'\n'), Delimited::Found("cd\n".to_string()));
        assert_eq!(buf.read_string(b'\n'), Delimited::Eof(String::new()));
    }

    #[test]
    fn test_read_bytes_without_trailing_delimiter() {
        let mut buf = ByteBuffer::from("ab,cd");
        assert_eq!(buf.read_bytes(b','), Delimited::Found(b"ab,".to_vec()));
        assert_eq!(buf.read_bytes(b','), Delimited::Eof(b"cd".to_vec()));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_read_slice_allows_unread_byte() {
        let mut buf = ByteBuffer::from("ab\n");
        assert_eq!(buf.read_slice(b'\n'), Delimited::Found(&b"ab\n"[..]));
        buf.unread_byte().unwrap();
        assert_eq!(buf.read_byte().unwrap(), b'\n');
    }

    #[test]
    fn test_write_at_overwrite() {
        let mut buf = ByteBuffer::from("abcdef");
        assert_eq!(buf.write_at(b"XYZ", 1).unwrap(), 3);
        assert_eq!(buf.unread_bytes(), b"aXYZef");
    }

    #[test]
    fn test_write_at_past_end_zero_fills() {
        let mut buf = ByteBuffer::from("ab");
        buf.write_at(b"Z", 4).unwrap();
        assert_eq!(buf.unread_bytes(), b"ab\0\0Z");

        buf.write_at(b"cdef", 3).unwrap();
        assert_eq!(buf.unread_bytes(), b"ab\0cdef");
    }

    #[test]
    fn test_write_at_negative_offset() {
        let mut buf = ByteBuffer::new();
        assert_eq!(buf.write_at(b"x", -1), Err(BufferError::NegativeOffset));
    }

    #[test]
    fn test_read_at() {
        let mut buf = ByteBuffer::from("hello");
        buf.read_byte().unwrap();

        let mut p = [0u8; 3];
        assert_eq!(buf.read_at(&mut p, 1).unwrap(), 3);
        assert_eq!(&p, b"ell");

        let mut p = [0u8; 10];
        assert_eq!(buf.read_at(&mut p, 2), Err(BufferError::ShortRead { n: 3 }));
        assert_eq!(&p[..3], b"llo");

        assert_eq!(buf.read_at(&mut p, 5), Err(BufferError::Eof));
        assert_eq!(buf.read_at(&mut p, -1), Err(BufferError::NegativeOffset));

        // The read cursor is untouched.
        assert_eq!(buf.position(), 1);
    }

    #[test]
    fn test_auto_compaction_on_drain() {
        let mut buf = ByteBuffer::new();
        buf.write(&[7u8; 64]);
        let cap = buf.capacity();

        let mut p = [0u8; 64];
        assert_eq!(buf.read(&mut p).unwrap(), 64);
        assert_eq!(buf.read(&mut p), Err(BufferError::Eof));
        assert_eq!(buf.size(), 0);
        assert_eq!(buf.position(), 0);

        for _ in 0..100 {
            buf.write(&[1u8; 64]);
            assert_eq!(buf.read(&mut p).unwrap(), 64);
        }
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn test_manual_compaction_keeps_drained_data() {
        let mut buf = ByteBuffer::new().with_compaction(Compaction::Manual);
        buf.write_str("hello");

        let mut p = [0u8; 5];
        assert_eq!(buf.read(&mut p).unwrap(), 5);
        assert_eq!(buf.read(&mut p), Err(BufferError::Eof));
        assert_eq!(buf.size(), 5);

        buf.seek(SeekFrom::Start(0)).unwrap();
        let mut p = [0u8; 5];
        buf.read(&mut p).unwrap();
        assert_eq!(&p, b"hello");
    }

    #[test]
    fn test_manual_compaction_growth_keeps_prefix() {
        let mut buf = ByteBuffer::with_capacity(4).with_compaction(Compaction::Manual);
        buf.write(b"abcd");
        let mut p = [0u8; 4];
        buf.read(&mut p).unwrap();

        buf.write(&[b'x'; 100]);
        assert_eq!(buf.size(), 104);
        assert_eq!(buf.len(), 100);
        buf.seek_start();
        assert_eq!(&buf.unread_bytes()[..4], b"abcd");
    }

    #[test]
    fn test_seek() {
        let mut buf = ByteBuffer::from("0123456789");
        assert_eq!(buf.seek(SeekFrom::Start(3)).unwrap(), 3);
        assert_eq!(buf.read_byte().unwrap(), b'3');
        assert_eq!(buf.seek(SeekFrom::Current(2)).unwrap(), 6);
        assert_eq!(buf.read_byte().unwrap(), b'6');
        assert_eq!(buf.seek(SeekFrom::End(-1)).unwrap(), 9);
        assert_eq!(buf.read_byte().unwrap(), b'9');
        assert_eq!(
            buf.seek(SeekFrom::Current(-100)),
            Err(BufferError::NegativePosition)
        );
    }

    #[test]
    fn test_seek_past_end_reads_eof() {
        let mut buf = ByteBuffer::from("abc").with_compaction(Compaction::Manual);
        buf.seek(SeekFrom::End(10)).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.read_byte(), Err(BufferError::Eof));
        assert!(buf.next(4).is_empty());
        assert!(buf.read_string(b'\n').is_eof());
    }

    #[test]
    fn test_seek_clears_unread_state() {
        let mut buf = ByteBuffer::from("abc");
        buf.read_byte().unwrap();
        buf.seek(SeekFrom::Current(0)).unwrap();
        assert_eq!(buf.unread_byte(), Err(BufferError::InvalidUnreadByte));
    }

    #[test]
    fn test_truncate() {
        let mut buf = ByteBuffer::from("hello world");
        let mut p = [0u8; 6];
        buf.read(&mut p).unwrap();
        let cap = buf.capacity();

        buf.truncate(3);
        assert_eq!(buf.unread_bytes(), b"wor");
        assert_eq!(buf.capacity(), cap);

        buf.truncate(0);
        assert!(buf.is_empty());
        assert_eq!(buf.size(), 0);
    }

    #[test]
    #[should_panic(expected = "truncation out of range")]
    fn test_truncate_out_of_range() {
        let mut buf = ByteBuffer::from("abc");
        buf.truncate(4);
    }

    #[test]
    fn test_grow_reserves_without_length_change() {
        let mut buf = ByteBuffer::new();
        buf.grow(1000);
        assert!(buf.capacity() >= 1000);
        assert_eq!(buf.len(), 0);

        let cap = buf.capacity();
        buf.write(&[0u8; 1000]);
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_grow_too_large() {
        let mut buf = ByteBuffer::new();
        buf.grow(usize::MAX);
    }

    #[test]
    fn test_next() {
        let mut buf = ByteBuffer::from("abcdef");
        assert_eq!(buf.next(2), b"ab");
        assert_eq!(buf.next(10), b"cdef");
        assert!(buf.next(1).is_empty());
    }

    #[test]
    fn test_write_to_drains() {
        let mut buf = ByteBuffer::from("payload");
        buf.read_byte().unwrap();
        let mut out = Vec::new();
        assert_eq!(buf.write_to(&mut out).unwrap(), 6);
        assert_eq!(out, b"ayload");
        assert!(buf.is_empty());
        assert_eq!(buf.size(), 0);
    }

    #[test]
    fn test_write_to_zero_write() {
        struct Stuck;
        impl io::Write for Stuck {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Ok(0)
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut buf = ByteBuffer::from("abc");
        let err = buf.write_to(&mut Stuck).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_read_from() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 256) as u8).collect();
        let mut buf = ByteBuffer::from("head:");
        let n = buf.read_from(&mut data.as_slice()).unwrap();
        assert_eq!(n, 10_000);
        assert_eq!(&buf.unread_bytes()[..5], b"head:");
        assert_eq!(&buf.unread_bytes()[5..], data.as_slice());
    }

    /// Hands out `chunk` bytes per call until `remaining` runs out.
    struct Trickle {
        remaining: usize,
        chunk: usize,
    }

    impl io::Read for Trickle {
        fn read(&mut self, p: &mut [u8]) -> io::Result<usize> {
            let n = self.remaining.min(self.chunk).min(p.len());
            p[..n].fill(0xAB);
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn test_read_from_trickle_zeroes_linearly() {
        let total = 1 << 20;
        let mut buf = ByteBuffer::with_capacity(total);
        let mut r = Trickle {
            remaining: total,
            chunk: 4096,
        };
        let (n, zeroed) = buf.fill_from(&mut r).unwrap();
        assert_eq!(n, total as u64);
        assert_eq!(buf.len(), total);
        assert!(buf.unread_bytes().iter().all(|&b| b == 0xAB));
        // One pass over the presized storage plus the final growth.
        assert!(zeroed <= 4 * total, "zeroed {zeroed} bytes for {total}");
    }

    #[test]
    fn test_read_from_single_bytes_from_empty() {
        let total = 64 * 1024;
        let mut buf = ByteBuffer::new();
        let mut r = Trickle {
            remaining: total,
            chunk: 1,
        };
        let (n, zeroed) = buf.fill_from(&mut r).unwrap();
        assert_eq!(n, total as u64);
        assert_eq!(buf.len(), total);
        assert!(zeroed <= 4 * total + 4 * MIN_READ, "zeroed {zeroed} bytes for {total}");
    }

    #[test]
    fn test_read_from_keeps_unread_in_manual_mode() {
        let mut buf = ByteBuffer::from("skip:").with_compaction(Compaction::Manual);
        let mut p = [0u8; 5];
        buf.read(&mut p).unwrap();
        let n = buf
            .read_from(&mut Trickle {
                remaining: 3000,
                chunk: 700,
            })
            .unwrap();
        assert_eq!(n, 3000);
        assert_eq!(buf.len(), 3000);
        assert_eq!(buf.size(), 3005);
        assert_eq!(&buf.as_slice()[..5], b"skip:");
    }

    #[test]
    fn test_unread_bytes_with_io_read_in_scope() {
        use std::io::Read;

        let mut buf = ByteBuffer::from("abc");
        let mut first = [0u8; 1];
        Read::read(&mut buf, &mut first).unwrap();
        // Borrows; the buffer stays usable afterwards.
        assert_eq!(buf.unread_bytes(), b"bc");
        assert_eq!(buf.as_slice(), b"abc");
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_read_from_propagates_error() {
        struct Failing;
        impl io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("boom"))
            }
        }

        let mut buf = ByteBuffer::from("keep");
        assert!(buf.read_from(&mut Failing).is_err());
        assert_eq!(buf.unread_bytes(), b"keep");
    }

    #[test]
    fn test_std_io_traits() {
        let mut buf = ByteBuffer::new();
        write!(buf, "line one\nline {}\n", 2).unwrap();

        let mut line = String::new();
        BufRead::read_line(&mut buf, &mut line).unwrap();
        assert_eq!(line, "line one\n");

        let mut rest = String::new();
        buf.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "line 2\n");
        // Draining through io::Read compacts like any other read.
        assert_eq!(buf.size(), 0);

        buf.write_str("0123456789");
        io::Seek::seek(&mut buf, SeekFrom::Start(4)).unwrap();
        let mut tail = Vec::new();
        buf.read_to_end(&mut tail).unwrap();
        assert_eq!(tail, b"456789");
    }

    #[test]
    fn test_io_copy_between_buffers() {
        let mut src = ByteBuffer::from("copy me");
        let mut dst = ByteBuffer::new();
        io::copy(&mut src, &mut dst).unwrap();
        assert_eq!(dst.to_string(), "copy me");
    }

    #[test]
    fn test_reset_to() {
        let mut buf = ByteBuffer::from("old");
        buf.read_byte().unwrap();
        buf.reset_to(b"new".to_vec());
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.unread_bytes(), b"new");
        assert_eq!(buf.unread_byte(), Err(BufferError::InvalidUnreadByte));
    }

    #[test]
    fn test_display_is_lossy() {
        let buf = ByteBuffer::from_vec(vec![b'o', b'k', 0xff]);
        assert_eq!(buf.to_string(), "ok\u{fffd}");
    }
}

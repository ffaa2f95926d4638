//! Lock-guarded byte buffer shared between threads.

use std::fmt;
use std::io::{self, SeekFrom};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::byte_buffer::{ByteBuffer, Compaction};
use crate::error::{Delimited, Result};

/// A thread-safe [`ByteBuffer`].
///
/// Every method takes the lock exactly once and runs the corresponding
/// [`ByteBuffer`] operation under it, so each call is atomic with respect to
/// the others. Queries take the read lock; anything that moves a cursor or
/// touches the data takes the write lock.
///
/// `Clone` shares the underlying buffer (via `Arc`), so clones observe each
/// other's writes.
///
/// # Example
///
/// ```
/// use kitbag_buffer::SyncByteBuffer;
/// use std::thread;
///
/// let buf = SyncByteBuffer::new();
/// let writer = buf.clone();
///
/// thread::spawn(move || {
///     writer.write(b"hello");
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(buf.unread_bytes(), b"hello");
/// ```
#[derive(Default)]
pub struct SyncByteBuffer {
    inner: Arc<RwLock<ByteBuffer>>,
}

impl Clone for SyncByteBuffer {
    fn clone(&self) -> Self {
        SyncByteBuffer {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for SyncByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.inner.read();
        f.debug_struct("SyncByteBuffer")
            .field("len", &buf.len())
            .field("size", &buf.size())
            .field("capacity", &buf.capacity())
            .field("compaction", &buf.compaction())
            .finish()
    }
}

impl SyncByteBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::from_buffer(ByteBuffer::new())
    }

    /// Creates an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(ByteBuffer::with_capacity(capacity))
    }

    /// Creates a buffer holding `buf`.
    pub fn from_vec(buf: Vec<u8>) -> Self {
        Self::from_buffer(ByteBuffer::from_vec(buf))
    }

    /// Wraps an existing buffer, keeping its contents and policy.
    pub fn from_buffer(buf: ByteBuffer) -> Self {
        SyncByteBuffer {
            inner: Arc::new(RwLock::new(buf)),
        }
    }

    /// Returns the number of unread bytes.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Returns the number of bytes held, read or not.
    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    pub fn position(&self) -> u64 {
        self.inner.read().position()
    }

    /// Returns a copy of the unread bytes.
    pub fn unread_bytes(&self) -> Vec<u8> {
        self.inner.read().unread_bytes().to_vec()
    }

    /// Returns the unread bytes as a string, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> String {
        self.inner.read().to_string_lossy().into_owned()
    }

    /// Reports whether drained data is kept until an explicit reset.
    pub fn is_manual_reset(&self) -> bool {
        self.inner.read().compaction() == Compaction::Manual
    }

    /// Switches between [`Compaction::Manual`] (`true`) and
    /// [`Compaction::Auto`] (`false`).
    pub fn set_manual_reset(&self, manual: bool) {
        let compaction = if manual {
            Compaction::Manual
        } else {
            Compaction::Auto
        };
        self.inner.write().set_compaction(compaction);
    }

    pub fn truncate(&self, n: usize) {
        self.inner.write().truncate(n);
    }

    pub fn reset(&self) {
        self.inner.write().reset();
    }

    pub fn reset_to(&self, buf: Vec<u8>) {
        self.inner.write().reset_to(buf);
    }

    pub fn grow(&self, n: usize) {
        self.inner.write().grow(n);
    }

    /// Empties the buffer. Closing more than once is harmless.
    pub fn close(&self) {
        let mut buf = self.inner.write();
        debug!("buffer: closing sync buffer with {} bytes held", buf.size());
        buf.reset();
    }

    pub fn write(&self, p: &[u8]) -> usize {
        self.inner.write().write(p)
    }

    pub fn write_str(&self, s: &str) -> usize {
        self.inner.write().write_str(s)
    }

    pub fn write_byte(&self, c: u8) {
        self.inner.write().write_byte(c);
    }

    pub fn write_rune(&self, r: char) -> usize {
        self.inner.write().write_rune(r)
    }

    pub fn write_at(&self, p: &[u8], pos: i64) -> Result<usize> {
        self.inner.write().write_at(p, pos)
    }

    pub fn read(&self, p: &mut [u8]) -> Result<usize> {
        self.inner.write().read(p)
    }

    /// Returns a copy of the next `n` unread bytes (or fewer) and advances
    /// past them.
    pub fn next(&self, n: usize) -> Vec<u8> {
        self.inner.write().next(n).to_vec()
    }

    pub fn read_byte(&self) -> Result<u8> {
        self.inner.write().read_byte()
    }

    pub fn unread_byte(&self) -> Result<()> {
        self.inner.write().unread_byte()
    }

    pub fn read_rune(&self) -> Result<(char, usize)> {
        self.inner.write().read_rune()
    }

    pub fn unread_rune(&self) -> Result<()> {
        self.inner.write().unread_rune()
    }

    pub fn read_bytes(&self, delim: u8) -> Delimited<Vec<u8>> {
        self.inner.write().read_bytes(delim)
    }

    pub fn read_string(&self, delim: u8) -> Delimited<String> {
        self.inner.write().read_string(delim)
    }

    pub fn read_at(&self, p: &mut [u8], off: i64) -> Result<usize> {
        self.inner.read().read_at(p, off)
    }

    pub fn seek(&self, pos: SeekFrom) -> Result<u64> {
        self.inner.write().seek(pos)
    }

    pub fn seek_start(&self) {
        self.inner.write().seek_start();
    }

    pub fn seek_end(&self) {
        self.inner.write().seek_end();
    }

    /// Drains the unread data into `w`.
    ///
    /// The write lock is held while `w` runs, so a slow sink stalls every
    /// other user of the buffer.
    pub fn write_to<W: io::Write + ?Sized>(&self, w: &mut W) -> io::Result<u64> {
        self.inner.write().write_to(w)
    }

    /// Reads `r` to the end and appends what it yields in one locked write.
    ///
    /// `r` is consumed without holding the lock. If `r` fails, nothing is
    /// appended.
    pub fn read_from<R: io::Read + ?Sized>(&self, r: &mut R) -> io::Result<u64> {
        let mut staged = ByteBuffer::new();
        let n = staged.read_from(r)?;
        self.inner.write().write(staged.unread_bytes());
        Ok(n)
    }
}

impl From<ByteBuffer> for SyncByteBuffer {
    fn from(buf: ByteBuffer) -> Self {
        Self::from_buffer(buf)
    }
}

impl From<Vec<u8>> for SyncByteBuffer {
    fn from(buf: Vec<u8>) -> Self {
        Self::from_vec(buf)
    }
}

impl From<&str> for SyncByteBuffer {
    fn from(s: &str) -> Self {
        Self::from_buffer(ByteBuffer::from(s))
    }
}

impl fmt::Display for SyncByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.read().to_string_lossy())
    }
}

impl io::Read for &SyncByteBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut *self.inner.write(), buf)
    }
}

impl io::Write for &SyncByteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.inner.write().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Seek for &SyncByteBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        io::Seek::seek(&mut *self.inner.write(), pos)
    }
}

impl io::Read for SyncByteBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut &*self, buf)
    }
}

impl io::Write for SyncByteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Seek for SyncByteBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        io::Seek::seek(&mut &*self, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BufferError;
    use std::io::{Read as _, Write as _};
    use std::thread;

    #[test]
    fn test_concurrent_writers() {
        const WRITERS: usize = 8;
        const RECORDS: usize = 500;
        const RECORD: &[u8] = b"0123456789abcdef";

        let buf = SyncByteBuffer::new();
        let handles: Vec<_> = (0..WRITERS)
            .map(|_| {
                let buf = buf.clone();
                thread::spawn(move || {
                    for _ in 0..RECORDS {
                        assert_eq!(buf.write(RECORD), RECORD.len());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let mut drained = Vec::new();
        let mut p = [0u8; 100];
        loop {
            match buf.read(&mut p) {
                Ok(n) => drained.extend_from_slice(&p[..n]),
                Err(BufferError::Eof) => break,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
        assert_eq!(drained.len(), WRITERS * RECORDS * RECORD.len());
        // Records never interleave.
        for chunk in drained.chunks(RECORD.len()) {
            assert_eq!(chunk, RECORD);
        }
    }

    #[test]
    fn test_concurrent_reader_and_writer() {
        let buf = SyncByteBuffer::new();
        let writer = buf.clone();
        let producer = thread::spawn(move || {
            for i in 0..1000u32 {
                writer.write(&i.to_le_bytes());
            }
        });

        let mut total = 0;
        let mut p = [0u8; 64];
        while total < 4000 {
            match buf.read(&mut p) {
                Ok(n) => total += n,
                Err(BufferError::Eof) => thread::yield_now(),
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
        producer.join().unwrap();
        assert_eq!(total, 4000);
    }

    #[test]
    fn test_manual_reset_allows_reread() {
        let buf = SyncByteBuffer::new();
        buf.set_manual_reset(true);
        assert!(buf.is_manual_reset());
        buf.write_str("again");

        let mut p = [0u8; 5];
        buf.read(&mut p).unwrap();
        assert_eq!(buf.read(&mut p), Err(BufferError::Eof));

        buf.seek_start();
        assert_eq!(buf.read(&mut p).unwrap(), 5);
        assert_eq!(&p, b"again");

        buf.set_manual_reset(false);
        assert!(!buf.is_manual_reset());
        assert_eq!(buf.read(&mut p), Err(BufferError::Eof));
        assert_eq!(buf.size(), 0);
    }

    #[test]
    fn test_seek_end() {
        let buf = SyncByteBuffer::from("abc");
        buf.seek_end();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.read_byte(), Err(BufferError::Eof));
    }

    #[test]
    fn test_close_is_idempotent() {
        let buf = SyncByteBuffer::from("data");
        buf.close();
        buf.close();
        assert!(buf.is_empty());
        assert_eq!(buf.size(), 0);
        buf.write_str("more");
        assert_eq!(buf.to_string_lossy(), "more");
    }

    #[test]
    fn test_read_at_does_not_move_cursor() {
        let buf = SyncByteBuffer::from("hello world");
        let mut p = [0u8; 5];
        assert_eq!(buf.read_at(&mut p, 6).unwrap(), 5);
        assert_eq!(&p, b"world");
        assert_eq!(buf.position(), 0);

        let mut p = [0u8; 8];
        assert_eq!(buf.read_at(&mut p, 6), Err(BufferError::ShortRead { n: 5 }));
    }

    #[test]
    fn test_runes_and_lines() {
        let buf = SyncByteBuffer::new();
        buf.write_rune('世');
        buf.write_str("\nx");
        assert_eq!(buf.read_rune().unwrap(), ('世', 3));
        buf.unread_rune().unwrap();
        assert_eq!(buf.read_string(b'\n'), Delimited::Found("世\n".to_string()));
        assert_eq!(buf.read_bytes(b'\n'), Delimited::Eof(b"x".to_vec()));
    }

    #[test]
    fn test_copy_in_and_out() {
        let buf = SyncByteBuffer::new();
        let n = buf.read_from(&mut &b"copied through"[..]).unwrap();
        assert_eq!(n, 14);
        assert_eq!(buf.next(6), b"copied");

        let mut out = Vec::new();
        assert_eq!(buf.write_to(&mut out).unwrap(), 8);
        assert_eq!(out, b" through");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_unread_bytes_snapshot() {
        let buf = SyncByteBuffer::from_vec(b"snapshot".to_vec());
        assert_eq!(buf.next(4), b"snap");
        let snap = buf.unread_bytes();
        buf.write(b"!");
        assert_eq!(snap, b"shot");
        assert_eq!(buf.unread_bytes(), b"shot!");
    }

    #[test]
    fn test_std_io_through_shared_reference() {
        let buf = SyncByteBuffer::new();
        let mut w = &buf;
        write!(w, "{}-{}", 1, 2).unwrap();

        let mut s = String::new();
        (&buf).read_to_string(&mut s).unwrap();
        assert_eq!(s, "1-2");
    }

    #[test]
    fn test_debug_does_not_dump_contents() {
        let buf = SyncByteBuffer::from("secret");
        let dbg = format!("{:?}", buf);
        assert!(dbg.contains("SyncByteBuffer"));
        assert!(!dbg.contains("secret"));
    }
}

//! Growable in-memory byte buffers.
//!
//! The crate is built around one algorithm, [`ByteBuffer`]: a contiguous
//! byte store with an append-only write position, a read cursor, UTF-8 aware
//! reads, delimiter scans, random access by offset and seeking. Two
//! variants wrap it:
//!
//! - [`ReadIndexBuffer`]: reads move a separate index and never discard
//!   data, so the full content stays available after it has been consumed
//! - [`SyncByteBuffer`]: a lock-guarded, cloneable handle for sharing one
//!   buffer between threads
//!
//! # Reading and writing
//!
//! ```
//! use kitbag_buffer::{BufferError, ByteBuffer};
//!
//! let mut buf = ByteBuffer::new();
//! buf.write_str("héllo");
//!
//! assert_eq!(buf.read_byte(), Ok(b'h'));
//! assert_eq!(buf.read_rune(), Ok(('é', 2)));
//! buf.unread_rune().unwrap();
//!
//! let mut p = [0u8; 16];
//! let n = buf.read(&mut p).unwrap();
//! assert_eq!(&p[..n], "éllo".as_bytes());
//! assert_eq!(buf.read(&mut p), Err(BufferError::Eof));
//! ```
//!
//! # Compaction
//!
//! By default a buffer throws away consumed bytes once everything has been
//! read ([`Compaction::Auto`]). With [`Compaction::Manual`] nothing written
//! is discarded until `reset` or `truncate`, so a drained buffer can be
//! seeked back and read again:
//!
//! ```
//! use std::io::SeekFrom;
//! use kitbag_buffer::{ByteBuffer, Compaction};
//!
//! let mut buf = ByteBuffer::from("abc").with_compaction(Compaction::Manual);
//! let mut p = [0u8; 3];
//! buf.read(&mut p).unwrap();
//! assert!(buf.read(&mut p).is_err());
//!
//! buf.seek(SeekFrom::Start(0)).unwrap();
//! assert_eq!(buf.read(&mut p), Ok(3));
//! ```
//!
//! # Standard I/O
//!
//! All variants implement [`std::io::Read`], [`std::io::Write`] and
//! [`std::io::Seek`] (`ByteBuffer` also implements [`std::io::BufRead`]),
//! with end-of-data reported as `Ok(0)`.
//!
//! # Convenience Functions
//!
//! ```
//! use kitbag_buffer::{bytes_4kb, read_index_bytes, sync_bytes_4kb};
//!
//! let single = bytes_4kb();
//! let shared = sync_bytes_4kb();
//! let indexed = read_index_bytes(4096);
//! ```

mod byte_buffer;
mod bytes;
mod error;
mod read_index;
mod sync_buffer;

pub use byte_buffer::{ByteBuffer, Compaction, MIN_READ, SMALL_BUFFER_SIZE};
pub use bytes::*;
pub use error::{BufferError, Delimited, Result};
pub use read_index::ReadIndexBuffer;
pub use sync_buffer::SyncByteBuffer;

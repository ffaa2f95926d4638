//! Convenience constructors for pre-sized byte buffers.

use crate::{ByteBuffer, ReadIndexBuffer, SyncByteBuffer};

// ============================================================================
// ByteBuffer
// ============================================================================

/// Creates a 256B byte buffer.
pub fn bytes_256b() -> ByteBuffer {
    ByteBuffer::with_capacity(256)
}

/// Creates a 1KB byte buffer.
pub fn bytes_1kb() -> ByteBuffer {
    ByteBuffer::with_capacity(1024)
}

/// Creates a 4KB byte buffer.
pub fn bytes_4kb() -> ByteBuffer {
    ByteBuffer::with_capacity(4096)
}

/// Creates a 16KB byte buffer.
pub fn bytes_16kb() -> ByteBuffer {
    ByteBuffer::with_capacity(16384)
}

/// Creates a 64KB byte buffer.
pub fn bytes_64kb() -> ByteBuffer {
    ByteBuffer::with_capacity(65536)
}

/// Creates a default 1KB byte buffer.
pub fn bytes() -> ByteBuffer {
    bytes_1kb()
}

// ============================================================================
// SyncByteBuffer
// ============================================================================

/// Creates a 4KB thread-safe byte buffer.
pub fn sync_bytes_4kb() -> SyncByteBuffer {
    SyncByteBuffer::with_capacity(4096)
}

/// Creates a default 1KB thread-safe byte buffer.
pub fn sync_bytes() -> SyncByteBuffer {
    SyncByteBuffer::with_capacity(1024)
}

// ============================================================================
// ReadIndexBuffer
// ============================================================================

/// Creates a read-index buffer with the given capacity (64 bytes if zero).
pub fn read_index_bytes(size: usize) -> ReadIndexBuffer {
    ReadIndexBuffer::with_capacity(size)
}

//! Sentinel-terminated source buffer.
//!
//! Appending a `0x00` sentinel after the source lets the scanner detect EOF
//! by value instead of checking bounds on every byte. The allocation is
//! rounded up to a 64-byte boundary, so `peek()` and `peek2()` stay in
//! bounds even when the cursor sits on the last source byte.
//!
//! Interior null bytes are legal in the buffer (diagram sources pasted from
//! odd places do contain them); the cursor tells them apart from the
//! sentinel by comparing its position against the source length.

use crate::Cursor;

/// Cache line size in bytes, used to round up the allocation.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of a pict source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00...]
///  ^                ^     ^
///  0                |     zero padding to the next 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned bytes: source, sentinel, then zero padding.
    buf: Vec<u8>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a fresh sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`; callers
    /// that care about 4 GiB diagram scripts should reject them upstream.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary, leaving room for the sentinel.
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel at buf[source_len] and the padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let source_len = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self { buf, source_len }
    }

    /// Source bytes without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Full buffer including the sentinel and zero padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

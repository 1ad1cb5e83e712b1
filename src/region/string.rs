/*!
 * Region Strings
 * Owned, length-tagged byte buffers
 */

use crate::core::types::Size;
use crate::memory::{
    AllocationCause, AllocationError, AllocationRequest, AllocatorHandle, Lease, RecordKind,
    RegionResult,
};
use std::borrow::Cow;
use std::fmt;

/// An owned byte buffer belonging to a region
///
/// The buffer is not NUL-terminated; `len()` is authoritative and the
/// record is accounted by that length, whatever capacity backs it. Values are created by a region and
/// released with the node that owns them.
pub struct RegionString {
    buffer: Vec<u8>,
    _lease: Lease,
}

impl RegionString {
    /// Bytes accounted for a string record holding `len` payload bytes
    #[inline]
    pub fn record_size(len: Size) -> Size {
        std::mem::size_of::<RegionString>() + len
    }

    /// Allocate a string holding a copy of `bytes`
    pub fn copy_from(allocator: &AllocatorHandle, bytes: &[u8]) -> RegionResult<Self> {
        Self::build(allocator, bytes.len(), |buffer| {
            buffer.extend_from_slice(bytes)
        })
    }

    /// Take ownership of `buffer` without copying
    ///
    /// Spare capacity is given back where the global allocator allows it;
    /// the record is sized by `len()` either way. On failure the buffer is
    /// dropped.
    pub fn adopt(allocator: &AllocatorHandle, mut buffer: Vec<u8>) -> RegionResult<Self> {
        let lease = allocator.lease(RecordKind::String, Self::record_size(buffer.len()))?;
        buffer.shrink_to_fit();
        Ok(Self {
            buffer,
            _lease: lease,
        })
    }

    /// Allocate `len` bytes and let `fill` write exactly that many
    pub(crate) fn build<F>(allocator: &AllocatorHandle, len: Size, fill: F) -> RegionResult<Self>
    where
        F: FnOnce(&mut Vec<u8>),
    {
        let size = Self::record_size(len);
        let lease = allocator.lease(RecordKind::String, size)?;

        let mut buffer = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| {
            AllocationError::new(
                AllocationRequest::new(RecordKind::String, size),
                AllocationCause::Exhausted,
            )
        })?;
        fill(&mut buffer);
        debug_assert_eq!(buffer.len(), len);

        Ok(Self {
            buffer,
            _lease: lease,
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// UTF-8 view, if the bytes are valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.buffer).ok()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buffer)
    }
}

impl AsRef<[u8]> for RegionString {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}

impl PartialEq<[u8]> for RegionString {
    fn eq(&self, other: &[u8]) -> bool {
        self.buffer == other
    }
}

impl PartialEq<&[u8]> for RegionString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.buffer == *other
    }
}

impl PartialEq<str> for RegionString {
    fn eq(&self, other: &str) -> bool {
        self.buffer == other.as_bytes()
    }
}

impl PartialEq<&str> for RegionString {
    fn eq(&self, other: &&str) -> bool {
        self.buffer == other.as_bytes()
    }
}

impl fmt::Display for RegionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for RegionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionString")
            .field("buffer", &self.to_string_lossy())
            .field("length", &self.len())
            .finish()
    }
}

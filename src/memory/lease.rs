/*!
 * Allocation Leases
 *
 * RAII tokens for scoped record allocations with automatic release
 */

use super::bounded::BoundedAllocator;
use super::system::SystemAllocator;
use super::traits::RawAllocator;
use super::types::{AllocationRequest, AllocatorStats, MemoryPressure, RecordKind, RegionResult};
use crate::core::types::Size;
use std::fmt;
use std::sync::Arc;

/// Cloneable handle to a shared allocator
#[derive(Clone)]
pub struct AllocatorHandle {
    inner: Arc<dyn RawAllocator>,
}

impl AllocatorHandle {
    pub fn new<A: RawAllocator + 'static>(allocator: Arc<A>) -> Self {
        Self { inner: allocator }
    }

    /// Unbounded system accounting
    pub fn system() -> Self {
        Self::new(Arc::new(SystemAllocator::new()))
    }

    /// Capacity-limited accounting
    pub fn bounded(total: Size) -> Self {
        Self::new(Arc::new(BoundedAllocator::new(total)))
    }

    /// Allocate one record, released when the returned lease drops
    #[inline]
    pub fn lease(&self, kind: RecordKind, size: Size) -> RegionResult<Lease> {
        let request = AllocationRequest::new(kind, size);
        self.inner.allocate(request)?;
        Ok(Lease {
            request,
            allocator: self.clone(),
        })
    }

    pub fn stats(&self) -> AllocatorStats {
        self.inner.stats()
    }

    pub fn pressure(&self) -> MemoryPressure {
        self.inner.pressure()
    }

    /// Whether both handles point at the same allocator
    pub fn same_allocator(&self, other: &AllocatorHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for AllocatorHandle {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for AllocatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllocatorHandle")
            .field("stats", &self.inner.stats())
            .finish()
    }
}

/// A granted record allocation
///
/// Returned to its allocator exactly once, when dropped. Leases cannot be
/// cloned, so a record can never be released twice.
pub struct Lease {
    request: AllocationRequest,
    allocator: AllocatorHandle,
}

impl Lease {
    #[inline]
    pub fn kind(&self) -> RecordKind {
        self.request.kind
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.request.size
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        self.allocator.inner.deallocate(self.request);
    }
}

impl fmt::Debug for Lease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lease")
            .field("kind", &self.request.kind)
            .field("size", &self.request.size)
            .finish()
    }
}

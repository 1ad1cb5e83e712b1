/*!
 * Bounded Allocator
 * Capacity-limited accounting with graceful OOM handling
 */

use super::tracking::RecordTracking;
use super::traits::RawAllocator;
use super::types::{
    AllocationCause, AllocationError, AllocationRequest, AllocatorStats, MemoryPressure,
    RegionResult,
};
use crate::core::types::Size;
use log::{debug, error, warn};
use std::sync::atomic::Ordering;

/// Allocator that refuses requests once `total` bytes are in use
#[derive(Debug)]
pub struct BoundedAllocator {
    total: Size,
    tracking: RecordTracking,
}

impl BoundedAllocator {
    pub fn new(total: Size) -> Self {
        debug!("Bounded allocator initialized with {} bytes", total);
        Self {
            total,
            tracking: RecordTracking::new(),
        }
    }

    pub fn capacity(&self) -> Size {
        self.total
    }

    /// Returns (total, used, available)
    pub fn info(&self) -> (Size, Size, Size) {
        let used = self.tracking.bytes().load(Ordering::SeqCst);
        (self.total, used, self.total.saturating_sub(used))
    }
}

impl RawAllocator for BoundedAllocator {
    fn allocate(&self, request: AllocationRequest) -> RegionResult<()> {
        let size = request.size;
        let bytes = self.tracking.bytes();
        let used = bytes.fetch_add(size, Ordering::SeqCst);

        if used.checked_add(size).map_or(true, |after| after > self.total) {
            // Revert the reservation
            bytes.fetch_sub(size, Ordering::SeqCst);

            let available = self.total.saturating_sub(used);
            error!(
                "OOM: {} record requested {} bytes, only {} bytes available ({} used / {} total)",
                request.kind, size, available, used, self.total
            );

            return Err(AllocationError::new(
                request,
                AllocationCause::LimitExceeded {
                    available,
                    used,
                    total: self.total,
                },
            ));
        }

        let used_after = used + size;
        self.tracking.add_allocation(request.kind, used_after);

        let level = MemoryPressure::from_ratio(used_after as f64 / self.total as f64);
        if level >= MemoryPressure::High {
            warn!(
                "Memory pressure {}: allocated {} bytes for {} record ({:.1}% used: {} / {})",
                level,
                size,
                request.kind,
                (used_after as f64 / self.total as f64) * 100.0,
                used_after,
                self.total
            );
        }

        Ok(())
    }

    fn deallocate(&self, request: AllocationRequest) {
        let remaining = self.tracking.remove_allocation(request.kind, request.size);
        debug!(
            "Released {} bytes of {} record ({} bytes now available)",
            request.size,
            request.kind,
            self.total.saturating_sub(remaining)
        );
    }

    fn stats(&self) -> AllocatorStats {
        self.tracking.snapshot(Some(self.total))
    }
}

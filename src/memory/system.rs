/*!
 * System Allocator
 * Unbounded accounting over the global allocator
 */

use super::tracking::RecordTracking;
use super::traits::RawAllocator;
use super::types::{AllocationRequest, AllocatorStats, RegionResult};
use log::trace;

/// Grants every request; real exhaustion surfaces when buffers are reserved
#[derive(Debug, Default)]
pub struct SystemAllocator {
    tracking: RecordTracking,
}

impl SystemAllocator {
    pub fn new() -> Self {
        Self {
            tracking: RecordTracking::new(),
        }
    }
}

impl RawAllocator for SystemAllocator {
    fn allocate(&self, request: AllocationRequest) -> RegionResult<()> {
        self.tracking.add_unbounded(request.kind, request.size);
        trace!("Allocated {} record ({} bytes)", request.kind, request.size);
        Ok(())
    }

    fn deallocate(&self, request: AllocationRequest) {
        self.tracking.remove_allocation(request.kind, request.size);
        trace!("Released {} record ({} bytes)", request.kind, request.size);
    }

    fn stats(&self) -> AllocatorStats {
        self.tracking.snapshot(None)
    }
}

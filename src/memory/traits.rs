/*!
 * Memory Traits
 * The allocator seam beneath regions
 */

use super::types::*;

/// Raw record allocator interface
///
/// Regions never touch memory policy directly: every region, node and
/// string record is accounted through an implementation of this trait, so a
/// system allocator, a capacity-limited pool or a fault injector can sit
/// beneath a region without changing its semantics.
pub trait RawAllocator: Send + Sync {
    /// Reserve room for one record
    fn allocate(&self, request: AllocationRequest) -> RegionResult<()>;

    /// Return a record previously granted by `allocate`
    ///
    /// Must not fail. An implementation that cannot release a record has
    /// no recoverable state to report and must panic instead.
    fn deallocate(&self, request: AllocationRequest);

    /// Current statistics
    fn stats(&self) -> AllocatorStats;

    /// Memory pressure level
    fn pressure(&self) -> MemoryPressure {
        MemoryPressure::from_ratio(self.stats().usage_percentage().unwrap_or(0.0) / 100.0)
    }
}

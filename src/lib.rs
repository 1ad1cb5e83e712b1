/*!
 * RBMM - Region-Based Memory Manager
 *
 * Groups dynamically allocated strings under a region so they are released
 * together in one operation.
 *
 * ```
 * use rbmm::Region;
 *
 * let mut region = Region::with_system()?;
 * region.add(b"alpha")?;
 * region.add(b"b")?;
 * region.add(b"cc")?;
 *
 * let words: Vec<String> = region.iter().map(|s| s.to_string()).collect();
 * assert_eq!(words, ["cc", "b", "alpha"]);
 *
 * let report = region.destroy();
 * assert_eq!(report.nodes, 3);
 * # Ok::<(), rbmm::AllocationError>(())
 * ```
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod region;

// Re-exports
pub use crate::core::{NodeId, RegionConfig, RegionId, Size};
pub use memory::{
    AllocationCause, AllocationError, AllocatorHandle, AllocatorStats, BoundedAllocator,
    FaultInjector, MemoryPressure, RawAllocator, RecordKind, RegionResult, SystemAllocator,
};
pub use monitoring::init_tracing;
pub use region::{Iter, Node, Region, RegionStats, RegionString, ReleaseReport, SharedRegion};

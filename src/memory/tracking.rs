/*!
 * Record Tracking
 * Per-kind record counters shared by the allocator implementations
 */

use super::types::{AllocatorStats, KindStats, RecordKind};
use crate::core::types::Size;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Atomic per-kind record counters
#[derive(Debug, Default)]
pub(super) struct RecordTracking {
    allocated: [AtomicU64; 3],
    released: [AtomicU64; 3],
    bytes_in_use: AtomicUsize,
    peak_bytes: AtomicUsize,
}

impl RecordTracking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a granted allocation whose bytes are already counted in `used`
    pub fn add_allocation(&self, kind: RecordKind, used: Size) {
        self.allocated[kind.slot()].fetch_add(1, Ordering::Relaxed);
        self.peak_bytes.fetch_max(used, Ordering::Relaxed);
    }

    /// Record a granted allocation and count its bytes
    pub fn add_unbounded(&self, kind: RecordKind, size: Size) {
        let used = self.bytes_in_use.fetch_add(size, Ordering::SeqCst) + size;
        self.add_allocation(kind, used);
    }

    /// Record a release; returns the bytes still in use
    pub fn remove_allocation(&self, kind: RecordKind, size: Size) -> Size {
        self.released[kind.slot()].fetch_add(1, Ordering::Relaxed);
        let previous = self.bytes_in_use.fetch_sub(size, Ordering::SeqCst);
        assert!(
            previous >= size,
            "released {} bytes of {} records with only {} bytes in use",
            size,
            kind,
            previous
        );
        previous - size
    }

    /// Shared byte counter, reserved directly by bounded allocators
    pub fn bytes(&self) -> &AtomicUsize {
        &self.bytes_in_use
    }

    pub fn snapshot(&self, capacity: Option<Size>) -> AllocatorStats {
        let kind = |kind: RecordKind| {
            let allocated = self.allocated[kind.slot()].load(Ordering::Relaxed);
            let released = self.released[kind.slot()].load(Ordering::Relaxed);
            KindStats {
                live: allocated.saturating_sub(released),
                allocated,
                released,
            }
        };

        AllocatorStats {
            regions: kind(RecordKind::Region),
            nodes: kind(RecordKind::Node),
            strings: kind(RecordKind::String),
            bytes_in_use: self.bytes_in_use.load(Ordering::SeqCst),
            peak_bytes: self.peak_bytes.load(Ordering::Relaxed),
            capacity,
        }
    }
}

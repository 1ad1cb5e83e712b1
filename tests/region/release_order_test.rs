/*!
 * Release Order Tests
 * Teardown walks the list from the head and releases each record once
 */

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use rbmm::memory::AllocationRequest;
use rbmm::{
    AllocatorHandle, AllocatorStats, RawAllocator, RecordKind, Region, RegionResult,
    RegionString, SystemAllocator,
};
use std::sync::Arc;

/// Records every release it sees
#[derive(Default)]
struct RecordingAllocator {
    inner: SystemAllocator,
    released: Mutex<Vec<AllocationRequest>>,
}

impl RawAllocator for RecordingAllocator {
    fn allocate(&self, request: AllocationRequest) -> RegionResult<()> {
        self.inner.allocate(request)
    }

    fn deallocate(&self, request: AllocationRequest) {
        self.released.lock().push(request);
        self.inner.deallocate(request)
    }

    fn stats(&self) -> AllocatorStats {
        self.inner.stats()
    }
}

#[test]
fn test_release_walks_most_recent_first() {
    let recorder = Arc::new(RecordingAllocator::default());
    let mut region = Region::new(AllocatorHandle::new(recorder.clone())).unwrap();

    region.add(b"alpha").unwrap();
    region.add(b"b").unwrap();
    region.add(b"cc").unwrap();
    region.destroy();

    let released = recorder.released.lock().clone();
    let expected = vec![
        // String before its node, head first
        AllocationRequest::new(RecordKind::String, RegionString::record_size(2)),
        AllocationRequest::new(RecordKind::Node, rbmm::Node::record_size()),
        AllocationRequest::new(RecordKind::String, RegionString::record_size(1)),
        AllocationRequest::new(RecordKind::Node, rbmm::Node::record_size()),
        AllocationRequest::new(RecordKind::String, RegionString::record_size(5)),
        AllocationRequest::new(RecordKind::Node, rbmm::Node::record_size()),
        // Region record last
        AllocationRequest::new(RecordKind::Region, Region::record_size()),
    ];
    assert_eq!(released, expected);
}

#[test]
fn test_drop_matches_destroy() {
    let recorder = Arc::new(RecordingAllocator::default());
    {
        let mut region = Region::new(AllocatorHandle::new(recorder.clone())).unwrap();
        region.add(b"x").unwrap();
        region.add(b"y").unwrap();
    }

    let kinds: Vec<RecordKind> = recorder.released.lock().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecordKind::String,
            RecordKind::Node,
            RecordKind::String,
            RecordKind::Node,
            RecordKind::Region
        ]
    );
    assert_eq!(recorder.stats().live_records(), 0);
}

#[test]
fn test_large_region_release_is_complete() {
    let recorder = Arc::new(RecordingAllocator::default());
    let mut region = Region::new(AllocatorHandle::new(recorder.clone())).unwrap();
    for i in 0..10_000u32 {
        region.add(&i.to_le_bytes()).unwrap();
    }

    let report = region.destroy();
    assert_eq!(report.nodes, 10_000);
    assert_eq!(recorder.released.lock().len(), 2 * 10_000 + 1);
    assert_eq!(recorder.stats().bytes_in_use, 0);
}

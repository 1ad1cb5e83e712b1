/*!
 * Region Property Tests
 * Count and ordering hold for arbitrary add sequences
 */

use proptest::prelude::*;
use rbmm::{AllocatorHandle, FaultInjector, RawAllocator, RecordKind, Region, SystemAllocator};
use std::sync::Arc;

proptest! {
    #[test]
    fn prop_iteration_is_reverse_insertion(
        inputs in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..32), 0..64)
    ) {
        let allocator = AllocatorHandle::system();
        let mut region = Region::new(allocator.clone()).unwrap();
        for bytes in &inputs {
            region.add(bytes).unwrap();
        }

        prop_assert_eq!(region.len(), inputs.len());
        let seen: Vec<Vec<u8>> = region.iter().map(|s| s.as_bytes().to_vec()).collect();
        let expected: Vec<Vec<u8>> = inputs.iter().rev().cloned().collect();
        prop_assert_eq!(seen, expected);

        let total: usize = inputs.iter().map(Vec::len).sum();
        prop_assert_eq!(region.byte_len(), total);

        let report = region.destroy();
        prop_assert_eq!(report.nodes, inputs.len());
        prop_assert_eq!(report.strings, inputs.len());
        prop_assert_eq!(allocator.stats().live_records(), 0);
    }

    #[test]
    fn prop_failed_add_is_atomic(
        before in 0usize..16,
        fail_node in any::<bool>(),
    ) {
        let faults = Arc::new(FaultInjector::new(SystemAllocator::new()));
        let mut region = Region::new(AllocatorHandle::new(faults.clone())).unwrap();
        for i in 0..before {
            region.add(format!("s{}", i).as_bytes()).unwrap();
        }
        let snapshot: Vec<String> = region.iter().map(|s| s.to_string()).collect();

        let kind = if fail_node { RecordKind::Node } else { RecordKind::String };
        faults.fail_nth(kind, 1);
        prop_assert!(region.add(b"doomed").is_err());

        let after: Vec<String> = region.iter().map(|s| s.to_string()).collect();
        prop_assert_eq!(region.len(), before);
        prop_assert_eq!(after, snapshot);
        prop_assert_eq!(faults.inner().stats().strings.live as usize, before);

        drop(region);
        prop_assert_eq!(faults.inner().stats().live_records(), 0);
    }
}

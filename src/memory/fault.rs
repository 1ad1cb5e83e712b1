/*!
 * Fault Injection
 * Simulated allocation failures for exercising error paths
 */

use super::traits::RawAllocator;
use super::types::{
    AllocationCause, AllocationError, AllocationRequest, AllocatorStats, RecordKind,
    RegionResult,
};
use log::warn;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy)]
enum Plan {
    /// Fail once when the countdown reaches zero
    Nth { kind: RecordKind, remaining: u64 },
    /// Fail every request of this kind
    Always(RecordKind),
}

/// Wraps an allocator and refuses chosen requests
///
/// # Example
///
/// ```ignore
/// let faults = Arc::new(FaultInjector::new(SystemAllocator::new()));
/// faults.fail_nth(RecordKind::Node, 1);
/// let mut region = Region::new(AllocatorHandle::new(faults.clone()))?;
/// assert!(region.add(b"x").is_err());
/// ```
#[derive(Debug)]
pub struct FaultInjector<A> {
    inner: A,
    plan: Mutex<Option<Plan>>,
    injected: AtomicU64,
}

impl<A: RawAllocator> FaultInjector<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            plan: Mutex::new(None),
            injected: AtomicU64::new(0),
        }
    }

    /// Fail the `n`-th upcoming request of `kind` (1-based), once
    pub fn fail_nth(&self, kind: RecordKind, n: u64) {
        *self.plan.lock() = Some(Plan::Nth {
            kind,
            remaining: n.max(1),
        });
    }

    /// Fail every request of `kind` until cleared
    pub fn fail_always(&self, kind: RecordKind) {
        *self.plan.lock() = Some(Plan::Always(kind));
    }

    pub fn clear(&self) {
        *self.plan.lock() = None;
    }

    /// Number of failures injected so far
    pub fn injected(&self) -> u64 {
        self.injected.load(Ordering::Relaxed)
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    fn should_fail(&self, kind: RecordKind) -> bool {
        let mut plan = self.plan.lock();
        match *plan {
            Some(Plan::Always(target)) => target == kind,
            Some(Plan::Nth {
                kind: target,
                remaining,
            }) if target == kind => {
                if remaining <= 1 {
                    *plan = None;
                    true
                } else {
                    *plan = Some(Plan::Nth {
                        kind: target,
                        remaining: remaining - 1,
                    });
                    false
                }
            }
            _ => false,
        }
    }
}

impl<A: RawAllocator> RawAllocator for FaultInjector<A> {
    fn allocate(&self, request: AllocationRequest) -> RegionResult<()> {
        if self.should_fail(request.kind) {
            self.injected.fetch_add(1, Ordering::Relaxed);
            warn!(
                "Injected allocation failure for {} record ({} bytes)",
                request.kind, request.size
            );
            return Err(AllocationError::new(request, AllocationCause::Injected));
        }
        self.inner.allocate(request)
    }

    fn deallocate(&self, request: AllocationRequest) {
        self.inner.deallocate(request)
    }

    fn stats(&self) -> AllocatorStats {
        self.inner.stats()
    }
}

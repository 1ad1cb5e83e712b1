/*!
 * Region Nodes
 * List cells that each own one string
 */

use super::string::RegionString;
use crate::core::types::{NodeId, Size};
use crate::memory::{AllocationError, AllocatorHandle, Lease, RecordKind};

/// A cell in a region's list
///
/// Owns exactly one string. `next` is an index into the same region's slab
/// and always names an older node, so the chain cannot form a cycle.
#[derive(Debug)]
pub struct Node {
    string: RegionString,
    next: Option<NodeId>,
    _lease: Lease,
}

impl Node {
    /// Bytes accounted for one node record
    #[inline]
    pub fn record_size() -> Size {
        std::mem::size_of::<Node>()
    }

    /// Wrap `string` in a fresh, unlinked node
    ///
    /// On failure the string is handed back; the caller decides its fate.
    pub(crate) fn new(
        allocator: &AllocatorHandle,
        string: RegionString,
    ) -> Result<Self, (AllocationError, RegionString)> {
        match allocator.lease(RecordKind::Node, Self::record_size()) {
            Ok(lease) => Ok(Self {
                string,
                next: None,
                _lease: lease,
            }),
            Err(err) => Err((err, string)),
        }
    }

    #[inline]
    pub fn string(&self) -> &RegionString {
        &self.string
    }

    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    pub(crate) fn link(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

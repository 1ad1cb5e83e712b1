/*!
 * Regions
 *
 * A region groups strings so that all of them are released in one call.
 *
 * ## Layout
 *
 * Nodes live in a slab owned by the region. Each node owns one string and
 * links to the next (older) node by index; `root` names the most recently
 * added node. Insertion is O(1) at the head, so iteration yields strings
 * most-recent-first.
 *
 * ## Lifecycle
 *
 * - `Region::new` allocates the region record
 * - `add` / `adopt` grow the list by one node, or fail leaving it untouched
 * - `destroy` (or dropping the region) releases every node and string
 *   exactly once, head first, then the region record
 *
 * Destruction consumes the region, so use-after-destroy and double destroy
 * do not compile.
 */

mod iter;
mod node;
mod release;
mod shared;
mod string;
mod strutils;

pub use iter::Iter;
pub use node::Node;
pub use release::ReleaseReport;
pub use shared::SharedRegion;
pub use string::RegionString;

use crate::core::limits::{DEFAULT_REGION_CAPACITY, MAX_REGION_NODES};
use crate::core::types::{NodeId, RegionId, Size};
use crate::memory::{
    AllocationCause, AllocationError, AllocationRequest, AllocatorHandle, Lease, RecordKind,
    RegionResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Region snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStats {
    pub id: RegionId,
    pub nodes: usize,
    pub payload_bytes: Size,
}

/// An ownership boundary for a set of strings
pub struct Region {
    id: RegionId,
    nodes: Vec<Node>,
    root: Option<NodeId>,
    count: usize,
    payload_bytes: Size,
    allocator: AllocatorHandle,
    _lease: Lease,
}

impl Region {
    /// Bytes accounted for the region record
    #[inline]
    pub fn record_size() -> Size {
        std::mem::size_of::<Region>()
    }

    /// Create an empty region backed by `allocator`
    pub fn new(allocator: AllocatorHandle) -> RegionResult<Self> {
        let lease = allocator.lease(RecordKind::Region, Self::record_size())?;
        let id = RegionId::next();
        debug!(region = %id, "region created");

        Ok(Self {
            id,
            nodes: Vec::with_capacity(DEFAULT_REGION_CAPACITY),
            root: None,
            count: 0,
            payload_bytes: 0,
            allocator,
            _lease: lease,
        })
    }

    /// Create a region over a private system allocator
    pub fn with_system() -> RegionResult<Self> {
        Self::new(AllocatorHandle::system())
    }

    /// Copy `bytes` into a new string at the head of the list
    ///
    /// Returns the new head. On failure the region is unchanged.
    pub fn add(&mut self, bytes: &[u8]) -> RegionResult<&RegionString> {
        let string = RegionString::copy_from(&self.allocator, bytes)?;
        self.push(string)
    }

    /// Copy a UTF-8 string into the region
    pub fn add_str(&mut self, text: &str) -> RegionResult<&RegionString> {
        self.add(text.as_bytes())
    }

    /// Move `buffer` into the region without copying
    pub fn adopt(&mut self, buffer: Vec<u8>) -> RegionResult<&RegionString> {
        let string = RegionString::adopt(&self.allocator, buffer)?;
        self.push(string)
    }

    /// Link an already materialized string in as the new head
    fn push(&mut self, string: RegionString) -> RegionResult<&RegionString> {
        let node_failure = |cause| {
            AllocationError::new(
                AllocationRequest::new(RecordKind::Node, Node::record_size()),
                cause,
            )
        };

        // Dropping `string` on any early return releases its record
        if self.count >= MAX_REGION_NODES {
            return Err(node_failure(AllocationCause::Exhausted));
        }
        self.nodes
            .try_reserve(1)
            .map_err(|_| node_failure(AllocationCause::Exhausted))?;

        let mut node = Node::new(&self.allocator, string).map_err(|(err, string)| {
            drop(string);
            err
        })?;

        let id = NodeId(self.nodes.len() as u32);
        node.link(self.root);
        self.payload_bytes += node.string().len();
        self.nodes.push(node);
        self.root = Some(id);
        self.count += 1;

        trace!(region = %self.id, node = %id, count = self.count, "string added");
        Ok(self.nodes[id.index()].string())
    }

    /// The most recently added string
    pub fn head(&self) -> Option<&RegionString> {
        self.root.map(|id| self.nodes[id.index()].string())
    }

    /// Node by id, if it belongs to this region
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Strings, most recently added first
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.nodes, self.root, self.count)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Total payload bytes across every string
    #[inline]
    pub fn byte_len(&self) -> Size {
        self.payload_bytes
    }

    pub fn allocator(&self) -> &AllocatorHandle {
        &self.allocator
    }

    pub fn stats(&self) -> RegionStats {
        RegionStats {
            id: self.id,
            nodes: self.count,
            payload_bytes: self.payload_bytes,
        }
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a RegionString;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("id", &self.id)
            .field("count", &self.count)
            .field("payload_bytes", &self.payload_bytes)
            .field("root", &self.root)
            .finish()
    }
}

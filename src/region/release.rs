/*!
 * Bulk Release
 * Region teardown: every node and string released exactly once
 */

use super::Region;
use crate::core::types::Size;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// What a region teardown released
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseReport {
    pub nodes: usize,
    pub strings: usize,
    pub payload_bytes: Size,
}

impl Region {
    /// Release every node and string, then the region record
    ///
    /// Equivalent to dropping the region, but reports what was freed.
    #[instrument(skip_all, fields(region = %self.id, count = self.count))]
    pub fn destroy(mut self) -> ReleaseReport {
        let report = self.release_all();
        debug!(
            nodes = report.nodes,
            bytes = report.payload_bytes,
            "region destroyed"
        );
        // The region record itself goes when `self` drops
        report
    }

    /// Walk from the head, releasing each node before advancing
    fn release_all(&mut self) -> ReleaseReport {
        let mut report = ReleaseReport::default();
        let mut cursor = self.root.take();

        while let Some(id) = cursor {
            // The head is always the newest slab entry
            let Some(node) = self.nodes.pop() else {
                break;
            };
            debug_assert_eq!(id.index(), self.nodes.len());

            cursor = node.next();
            report.nodes += 1;
            report.strings += 1;
            report.payload_bytes += node.string().len();
            trace!(node = %id, len = node.string().len(), "node released");
            drop(node);
        }

        debug_assert!(self.nodes.is_empty());
        debug_assert_eq!(report.nodes, self.count);
        self.count = 0;
        self.payload_bytes = 0;
        report
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        if self.root.is_some() {
            let report = self.release_all();
            debug!(
                region = %self.id,
                nodes = report.nodes,
                "region dropped"
            );
        }
    }
}

/*!
 * Region Iteration
 * Front-to-back cursor over a region's list
 */

use super::node::Node;
use super::string::RegionString;
use crate::core::types::NodeId;
use std::iter::FusedIterator;

/// Walks the list from the head, yielding strings most-recent-first
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(nodes: &'a [Node], root: Option<NodeId>, count: usize) -> Self {
        Self {
            nodes,
            cursor: root,
            remaining: count,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a RegionString;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?.index()];
        self.cursor = node.next();
        self.remaining -= 1;
        Some(node.string())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/*!
 * Shared Regions
 * One lock guarding every mutation of a region used from several threads
 */

use super::{Region, ReleaseReport};
use crate::memory::RegionResult;
use parking_lot::Mutex;
use std::sync::Arc;

/// A region behind a mutex
///
/// Regions carry no internal synchronization. Wrap one here when several
/// threads add to it; `add` and `destroy` serialize on the same lock. Once
/// destroyed, every accessor returns `None`.
#[derive(Clone)]
pub struct SharedRegion {
    inner: Arc<Mutex<Option<Region>>>,
}

impl SharedRegion {
    pub fn new(region: Region) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(region))),
        }
    }

    /// Copy `bytes` into the region; returns the new node count
    pub fn add(&self, bytes: &[u8]) -> Option<RegionResult<usize>> {
        self.with_mut(|region| -> RegionResult<usize> {
            region.add(bytes)?;
            Ok(region.len())
        })
    }

    /// Run `f` against the live region
    pub fn with<R>(&self, f: impl FnOnce(&Region) -> R) -> Option<R> {
        self.inner.lock().as_ref().map(f)
    }

    /// Run `f` with exclusive access to the live region
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Region) -> R) -> Option<R> {
        self.inner.lock().as_mut().map(f)
    }

    /// Destroy the region; later calls return `None`
    pub fn destroy(&self) -> Option<ReleaseReport> {
        let region = self.inner.lock().take();
        region.map(Region::destroy)
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.lock().is_none()
    }

    /// Node count, zero once destroyed
    pub fn len(&self) -> usize {
        self.with(Region::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Region> for SharedRegion {
    fn from(region: Region) -> Self {
        Self::new(region)
    }
}

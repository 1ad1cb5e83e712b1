/*!
 * Memory Module
 * Record allocators and leases beneath regions
 */

mod bounded;
mod fault;
mod lease;
mod system;
mod tracking;
pub mod traits;
pub mod types;

pub use bounded::BoundedAllocator;
pub use fault::FaultInjector;
pub use lease::{AllocatorHandle, Lease};
pub use system::SystemAllocator;
pub use traits::*;
pub use types::*;

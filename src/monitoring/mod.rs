/*!
 * Monitoring
 * Tracing setup for binaries embedding the region manager
 */

mod tracer;

pub use tracer::init_tracing;

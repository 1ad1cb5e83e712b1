/*!
 * Limits and Constants
 *
 * Central location for thresholds and defaults used by the allocators and
 * regions.
 */

// =============================================================================
// MEMORY PRESSURE
// =============================================================================

/// Usage ratio at which a bounded allocator reports medium pressure
pub const MEDIUM_PRESSURE_RATIO: f64 = 0.60;

/// Usage ratio at which a bounded allocator starts warning (80%)
pub const WARNING_PRESSURE_RATIO: f64 = 0.80;

/// Usage ratio treated as critical (95%)
pub const CRITICAL_PRESSURE_RATIO: f64 = 0.95;

// =============================================================================
// REGION LIMITS
// =============================================================================

/// Maximum number of nodes a single region can hold
/// Node links are 32-bit slab indices
pub const MAX_REGION_NODES: usize = u32::MAX as usize;

/// Initial slab capacity for a fresh region (no allocation until first add)
pub const DEFAULT_REGION_CAPACITY: usize = 0;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Byte budget for the bounded allocator; unset means unbounded
pub const ENV_MEMORY_LIMIT: &str = "RBMM_MEMORY_LIMIT";

/// Enables JSON trace output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "RBMM_TRACE_JSON";

/// Default tracing filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

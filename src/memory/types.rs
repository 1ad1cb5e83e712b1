/*!
 * Memory Types
 * Common types for region memory accounting
 */

use crate::core::limits::{
    CRITICAL_PRESSURE_RATIO, MEDIUM_PRESSURE_RATIO, WARNING_PRESSURE_RATIO,
};
use crate::core::types::Size;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type RegionResult<T> = Result<T, AllocationError>;

/// The kind of record an allocation backs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Region,
    Node,
    String,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Region, RecordKind::Node, RecordKind::String];

    #[inline(always)]
    pub(crate) const fn slot(self) -> usize {
        match self {
            RecordKind::Region => 0,
            RecordKind::Node => 1,
            RecordKind::String => 2,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordKind::Region => write!(f, "region"),
            RecordKind::Node => write!(f, "node"),
            RecordKind::String => write!(f, "string"),
        }
    }
}

/// Memory allocation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub kind: RecordKind,
    pub size: Size,
}

impl AllocationRequest {
    pub fn new(kind: RecordKind, size: Size) -> Self {
        Self { kind, size }
    }
}

/// Why an allocator refused a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cause", rename_all = "snake_case")]
pub enum AllocationCause {
    /// A bounded allocator had no room left
    LimitExceeded {
        available: Size,
        used: Size,
        total: Size,
    },
    /// The global allocator refused to reserve buffer storage
    Exhausted,
    /// Failure simulated by a fault injector
    Injected,
}

impl fmt::Display for AllocationCause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AllocationCause::LimitExceeded {
                available,
                used,
                total,
            } => write!(
                f,
                "{} bytes available ({} used / {} total)",
                available, used, total
            ),
            AllocationCause::Exhausted => write!(f, "system allocator exhausted"),
            AllocationCause::Injected => write!(f, "injected fault"),
        }
    }
}

/// The single error raised by region operations
///
/// Returned whenever a region, node or string record cannot be allocated.
/// The region being mutated is always left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[error("Allocation failed: {kind} record of {requested} bytes: {cause}")]
#[diagnostic(
    code(rbmm::allocation_failed),
    help("The region was left unchanged. Free other regions or raise the memory limit and retry.")
)]
pub struct AllocationError {
    pub kind: RecordKind,
    pub requested: Size,
    pub cause: AllocationCause,
}

impl AllocationError {
    pub fn new(request: AllocationRequest, cause: AllocationCause) -> Self {
        Self {
            kind: request.kind,
            requested: request.size,
            cause,
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    /// Classify a used/total ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= CRITICAL_PRESSURE_RATIO {
            MemoryPressure::Critical
        } else if ratio >= WARNING_PRESSURE_RATIO {
            MemoryPressure::High
        } else if ratio >= MEDIUM_PRESSURE_RATIO {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Live record counts for one record kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindStats {
    pub live: u64,
    pub allocated: u64,
    pub released: u64,
}

/// Allocator statistics snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocatorStats {
    pub regions: KindStats,
    pub nodes: KindStats,
    pub strings: KindStats,
    pub bytes_in_use: Size,
    pub peak_bytes: Size,
    /// Capacity for bounded allocators
    pub capacity: Option<Size>,
}

impl AllocatorStats {
    pub fn kind(&self, kind: RecordKind) -> KindStats {
        match kind {
            RecordKind::Region => self.regions,
            RecordKind::Node => self.nodes,
            RecordKind::String => self.strings,
        }
    }

    /// Total live records across every kind
    pub fn live_records(&self) -> u64 {
        self.regions.live + self.nodes.live + self.strings.live
    }

    pub fn usage_percentage(&self) -> Option<f64> {
        self.capacity
            .filter(|total| *total > 0)
            .map(|total| (self.bytes_in_use as f64 / total as f64) * 100.0)
    }
}

/*!
 * Configuration
 * Allocator selection and tracing options, from defaults or the environment
 */

use super::limits::{ENV_MEMORY_LIMIT, ENV_TRACE_JSON};
use super::types::Size;
use crate::memory::AllocatorHandle;
use serde::{Deserialize, Serialize};
use std::env;

/// Region manager configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Byte budget shared by every region on the allocator; `None` is unbounded
    pub memory_limit: Option<Size>,
    /// Emit traces as JSON
    pub trace_json: bool,
}

impl RegionConfig {
    /// Read `RBMM_MEMORY_LIMIT` and `RBMM_TRACE_JSON`
    ///
    /// Unparseable limits are ignored with a warning, so install the
    /// subscriber with `init_tracing` before calling this.
    pub fn from_env() -> Self {
        let memory_limit = env::var(ENV_MEMORY_LIMIT).ok().and_then(|raw| {
            raw.trim()
                .parse::<Size>()
                .map_err(|e| {
                    tracing::warn!(value = %raw, error = %e, "ignoring invalid {}", ENV_MEMORY_LIMIT)
                })
                .ok()
        });

        Self {
            memory_limit,
            trace_json: Self::trace_json_from_env(),
        }
    }

    /// Whether `RBMM_TRACE_JSON` asks for JSON traces (`1` or `true`)
    pub fn trace_json_from_env() -> bool {
        env::var(ENV_TRACE_JSON)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn with_memory_limit(mut self, limit: Size) -> Self {
        self.memory_limit = Some(limit);
        self
    }

    /// Build the allocator this configuration describes
    pub fn allocator(&self) -> AllocatorHandle {
        match self.memory_limit {
            Some(limit) => AllocatorHandle::bounded(limit),
            None => AllocatorHandle::system(),
        }
    }
}

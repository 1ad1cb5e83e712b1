/*!
 * String Utilities
 * Joined strings and paths allocated straight into a region
 */

use super::{Region, RegionString};
use crate::core::types::Size;
use crate::memory::{AllocationCause, AllocationError, AllocationRequest, RecordKind, RegionResult};
use std::path::MAIN_SEPARATOR_STR;

/// Length of `parts` joined by a separator of `separator` bytes
///
/// `None` when the total does not fit in `usize`.
fn joined_len<I>(separator: usize, parts: I) -> Option<Size>
where
    I: IntoIterator<Item = usize>,
{
    let mut total: Size = 0;
    for (i, len) in parts.into_iter().enumerate() {
        if i > 0 {
            total = total.checked_add(separator)?;
        }
        total = total.checked_add(len)?;
    }
    Some(total)
}

impl Region {
    /// Join `parts` with `separator` into one new region string
    ///
    /// ```ignore
    /// let flags = region.join(" ", &["-o", "main.out", "main.c"])?;
    /// assert_eq!(flags, "-o main.out main.c");
    /// ```
    pub fn join<S: AsRef<[u8]>>(
        &mut self,
        separator: &str,
        parts: &[S],
    ) -> RegionResult<&RegionString> {
        let separator = separator.as_bytes();
        let len = joined_len(separator.len(), parts.iter().map(|p| p.as_ref().len()))
            .ok_or_else(|| {
                AllocationError::new(
                    AllocationRequest::new(RecordKind::String, Size::MAX),
                    AllocationCause::Exhausted,
                )
            })?;

        let string = RegionString::build(&self.allocator, len, |buffer| {
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    buffer.extend_from_slice(separator);
                }
                buffer.extend_from_slice(part.as_ref());
            }
        })?;
        self.push(string)
    }

    /// Join `parts` with the platform path separator
    pub fn path<S: AsRef<[u8]>>(&mut self, parts: &[S]) -> RegionResult<&RegionString> {
        self.join(MAIN_SEPARATOR_STR, parts)
    }
}

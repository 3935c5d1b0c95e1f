//! Page arithmetic.

use roster_model::{InvalidArgument, Result};

/// Resolved slice bounds for one page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number after clamping.
    pub number: usize,
    /// Always at least 1, even for an empty result.
    pub total_pages: usize,
    /// Inclusive start index into the full result.
    pub start: usize,
    /// Exclusive end index, never past the result length.
    pub end: usize,
}

/// Number of pages needed for `total_count` items; at least 1.
pub fn total_pages(total_count: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(InvalidArgument::PageSize);
    }
    Ok(total_count.div_ceil(page_size).max(1))
}

/// Resolve `requested` into slice bounds, clamping it into `[1, total_pages]`.
pub fn page_window(total_count: usize, page_size: usize, requested: usize) -> Result<PageWindow> {
    let total_pages = total_pages(total_count, page_size)?;
    let number = requested.clamp(1, total_pages);
    let start = ((number - 1) * page_size).min(total_count);
    let end = (start + page_size).min(total_count);
    Ok(PageWindow {
        number,
        total_pages,
        start,
        end,
    })
}

//! Pagination over the clip table
//!
//! Pages are zero-indexed fixed-size windows over the ordered clip list.
//! Out-of-range requests are clamped rather than rejected, and the response
//! reports the page actually served.

/// Bounds of one page of clips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Page index actually served (zero-based, clamped)
    pub index: i64,
    /// Total number of pages (0 for an empty table)
    pub total_pages: i64,
    /// Start offset into the clip list (inclusive)
    pub start: usize,
    /// End offset into the clip list (exclusive)
    pub end: usize,
}

/// Calculate page bounds from the table size and requested page index
///
/// The requested index is clamped into `[0, total_pages - 1]`; an empty table
/// yields page 0 with an empty range.
pub fn paginate(total_clips: usize, clips_per_page: usize, requested: i64) -> Page {
    let per_page = clips_per_page.max(1);
    let total_pages = ((total_clips + per_page - 1) / per_page) as i64;
    let index = requested.clamp(0, (total_pages - 1).max(0));

    let start = (index as usize * per_page).min(total_clips);
    let end = (start + per_page).min(total_clips);

    Page {
        index,
        total_pages,
        start,
        end,
    }
}

//! Pipeline entry points: filter → sort → paginate.

use roster_model::{Candidate, Criteria, Result};

use crate::filter::filter;
use crate::paginate::page_window;
use crate::sort::sort_candidates;

/// Page size used by the roster view unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// One page of a query plus the metadata needed to render navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    /// Records on the selected page, in sorted order.
    pub page: Vec<&'a Candidate>,
    /// The page actually returned, after clamping the requested one.
    pub page_number: usize,
    pub total_pages: usize,
    /// Records that passed the filter, across all pages.
    pub total_count: usize,
}

impl QueryResult<'_> {
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}

/// Filter and sort without paginating. This is the export input.
pub fn filter_and_sort<'a>(records: &'a [Candidate], criteria: &Criteria) -> Vec<&'a Candidate> {
    let mut view = filter(records, criteria);
    sort_candidates(&mut view, criteria.sort_key());
    view
}

/// Run the full pipeline and return the page selected by `criteria`.
///
/// # Errors
///
/// Returns [`roster_model::InvalidArgument::PageSize`] when `page_size` is 0.
/// An out-of-range page is clamped, never rejected.
pub fn query<'a>(
    records: &'a [Candidate],
    criteria: &Criteria,
    page_size: usize,
) -> Result<QueryResult<'a>> {
    // Validate before doing any work.
    page_window(0, page_size, 1)?;

    let view = filter_and_sort(records, criteria);
    let window = page_window(view.len(), page_size, criteria.page())?;
    Ok(QueryResult {
        total_count: view.len(),
        page: view[window.start..window.end].to_vec(),
        page_number: window.number,
        total_pages: window.total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::InvalidArgument;

    #[test]
    fn empty_roster_yields_single_empty_page() {
        let result = query(&[], &Criteria::default(), DEFAULT_PAGE_SIZE).unwrap();
        assert!(result.page.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.total_count, 0);
        assert!(!result.has_previous());
        assert!(!result.has_next());
    }

    #[test]
    fn zero_page_size_is_invalid() {
        assert_eq!(
            query(&[], &Criteria::default(), 0),
            Err(InvalidArgument::PageSize)
        );
    }
}

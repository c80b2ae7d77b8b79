use crate::artwork::Artwork;

use super::PageRequest;

/// The page currently shown to the user.
///
/// `offset` is always derived from `page_number` and `page_size` so the two
/// can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_number: u32,
    pub page_size: u32,
    pub total_records: u64,
}

impl PageState {
    pub fn new(request: PageRequest, total_records: u64) -> Self {
        Self {
            page_number: request.page_number(),
            page_size: request.page_size(),
            total_records,
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page_number.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Number of pages needed to show `total_records`; zero for an empty catalog.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_records.div_ceil(u64::from(self.page_size))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page_number) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    /// Converts a paginator row offset into a 1-indexed page number.
    ///
    /// `page_size` of zero is treated as the default page size.
    pub fn page_for_offset(offset: u64, page_size: u32) -> u32 {
        let size = if page_size == 0 {
            u64::from(super::DEFAULT_PAGE_SIZE)
        } else {
            u64::from(page_size)
        };
        u32::try_from(offset / size + 1).unwrap_or(u32::MAX)
    }
}

/// One page of results from the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkPage {
    pub artworks: Vec<Artwork>,
    pub total_records: u64,
    pub current_page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page_number: u32, page_size: u32, total_records: u64) -> PageState {
        PageState::new(PageRequest::new(page_number, page_size).unwrap(), total_records)
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(state(1, 10, 0).total_pages(), 0);
        assert_eq!(state(1, 10, 10).total_pages(), 1);
        assert_eq!(state(1, 10, 11).total_pages(), 2);
    }

    #[test]
    fn test_navigation_bounds() {
        let first = state(1, 10, 25);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = state(3, 10, 25);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_offset_matches_page() {
        assert_eq!(state(4, 12, 1000).offset(), 36);
    }

    #[test]
    fn test_page_for_offset() {
        assert_eq!(PageState::page_for_offset(0, 10), 1);
        assert_eq!(PageState::page_for_offset(20, 10), 3);
        assert_eq!(PageState::page_for_offset(25, 10), 3);
        assert_eq!(PageState::page_for_offset(30, 0), 4);
    }
}

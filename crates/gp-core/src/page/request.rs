use thiserror::Error;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound accepted by the catalog API for a single page.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    #[error("Invalid page number: {0}. Must be at least 1")]
    InvalidPageNumber(u32),

    #[error("Invalid page size: {size}. Must be between 1 and {max}")]
    InvalidPageSize { size: u32, max: u32 },
}

/// A validated `(page_number, page_size)` pair.
///
/// `page_number` is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Result<Self, PageRequestError> {
        if page_number == 0 {
            return Err(PageRequestError::InvalidPageNumber(page_number));
        }

        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(PageRequestError::InvalidPageSize {
                size: page_size,
                max: MAX_PAGE_SIZE,
            });
        }

        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based index of the first row on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number - 1) * u64::from(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_page_number() {
        let err = PageRequest::new(0, 10).unwrap_err();
        assert_eq!(err, PageRequestError::InvalidPageNumber(0));
    }

    #[test]
    fn test_rejects_zero_and_oversized_page_size() {
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(PageRequestError::InvalidPageSize { size: 0, .. })
        ));
        assert!(matches!(
            PageRequest::new(1, MAX_PAGE_SIZE + 1),
            Err(PageRequestError::InvalidPageSize { .. })
        ));
    }

    #[test]
    fn test_offset_is_derived_from_page_and_size() {
        let request = PageRequest::new(3, 25).unwrap();
        assert_eq!(request.offset(), 50);
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
    }
}

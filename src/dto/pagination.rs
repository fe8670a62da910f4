use crate::models::DomainError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 500;

/// A validated page window: `page >= 1` and `1 <= page_size <= 500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    page_size: i64,
}

impl Pagination {
    pub fn new(page: i64, page_size: i64) -> Result<Self, DomainError> {
        if page < 1 || page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(DomainError::IncorrectPagination { page, page_size });
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.page_size - 1) / self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Pagination::new(0, 10).is_err());
        assert!(Pagination::new(1, 501).is_err());
        assert!(Pagination::new(1, 0).is_err());
        assert!(Pagination::new(-3, 10).is_err());
        assert!(Pagination::new(1, 500).is_ok());
    }

    #[test]
    fn error_carries_requested_values() {
        assert_eq!(
            Pagination::new(0, 900),
            Err(DomainError::IncorrectPagination {
                page: 0,
                page_size: 900
            })
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        let pagination = Pagination::new(1, 10).unwrap();
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(1), 1);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(11), 2);
        assert_eq!(Pagination::new(1, 500).unwrap().total_pages(1001), 3);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(Pagination::new(1, 25).unwrap().offset(), 0);
        assert_eq!(Pagination::new(3, 25).unwrap().offset(), 50);
    }
}

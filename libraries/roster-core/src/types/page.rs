/// Pagination types
use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Largest accepted page size
pub const MAX_PAGE_SIZE: i64 = 200;

/// Validated offset/limit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    page_size: i64,
}

impl Pagination {
    /// Validate a 1-based page number and a page size in `[1, MAX_PAGE_SIZE]`
    pub fn new(page: i64, page_size: i64) -> Result<Self> {
        if page < 1 {
            return Err(RosterError::invalid_argument("page must be >= 1"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(RosterError::invalid_argument(format!(
                "pageSize must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(Self { page, page_size })
    }

    /// 1-based page number
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Requested page size
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Index of the first item on this page, saturating on absurd page numbers
    pub fn offset(&self) -> usize {
        usize::try_from(self.page - 1)
            .ok()
            .and_then(|skipped| skipped.checked_mul(self.limit()))
            .unwrap_or(usize::MAX)
    }

    /// Number of items on a full page
    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a listing, with the collection total at snapshot time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// 1-based page number
    pub page: i64,

    /// Requested page size
    pub page_size: i64,

    /// Total number of items in the collection
    pub total: usize,

    /// Items on this page, in insertion order
    pub items: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_page_below_one() {
        for page in [0, -1, i64::MIN] {
            let err = Pagination::new(page, 20).unwrap_err();
            assert!(matches!(err, RosterError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(Pagination::new(1, 0).is_err());
        assert!(Pagination::new(1, 201).is_err());
        assert!(Pagination::new(1, 1).is_ok());
        assert!(Pagination::new(1, MAX_PAGE_SIZE).is_ok());
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::new(1, 20).unwrap().offset(), 0);
        assert_eq!(Pagination::new(3, 20).unwrap().offset(), 40);
    }

    #[test]
    fn test_offset_saturates_on_huge_pages() {
        assert_eq!(Pagination::new(i64::MAX, 200).unwrap().offset(), usize::MAX);
        assert_eq!(Pagination::new(i64::MAX, 1).unwrap().offset(), (i64::MAX - 1) as usize);
    }

    #[test]
    fn test_default_is_first_page() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::<i32> {
            page: 1,
            page_size: 20,
            total: 0,
            items: vec![],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageSize"], 20);
        assert_eq!(json["total"], 0);
    }
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    50
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.size < 1 || self.size > 100 {
            return Err("size must be between 1 and 100".to_string());
        }
        Ok(())
    }

    // page is unbounded client input; widen before multiplying so the
    // offset cannot overflow
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.size)
    }

    pub fn limit(&self) -> u32 {
        self.size
    }
}

/// Page envelope: one slice of results plus the metadata a client needs to
/// fetch the rest.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
    pub pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, page: u32, size: u32, total: i64) -> Self {
        let pages = ((total as f64) / (size as f64)).ceil() as u32;
        Self {
            items,
            total,
            page,
            size,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let params = PaginationParams { page: 3, size: 20 };
        assert_eq!(params.offset(), 40);
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn test_first_page_has_zero_offset() {
        let params = PaginationParams { page: 1, size: 50 };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_handles_large_page_numbers() {
        let params = PaginationParams {
            page: u32::MAX,
            size: 100,
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.offset(), (i64::from(u32::MAX) - 1) * 100);
    }

    #[test]
    fn test_rejects_out_of_range_params() {
        assert!(PaginationParams { page: 0, size: 50 }.validate().is_err());
        assert!(PaginationParams { page: 1, size: 0 }.validate().is_err());
        assert!(PaginationParams { page: 1, size: 101 }.validate().is_err());
        assert!(PaginationParams { page: 1, size: 100 }.validate().is_ok());
    }

    #[test]
    fn test_page_count_rounds_up() {
        let page: PaginatedResponse<u32> = PaginatedResponse::new(vec![], 1, 10, 21);
        assert_eq!(page.pages, 3);

        let page: PaginatedResponse<u32> = PaginatedResponse::new(vec![], 1, 10, 20);
        assert_eq!(page.pages, 2);

        let page: PaginatedResponse<u32> = PaginatedResponse::new(vec![], 1, 10, 0);
        assert_eq!(page.pages, 0);
    }
}

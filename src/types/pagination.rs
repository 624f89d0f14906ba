//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters (reusable across all list endpoints)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    /// 1-indexed page number
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.limit
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.limit.min(MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper: the `{data, total}` shape list consumers
/// (the driver board included) rely on.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    /// Total rows matching the filter, across all pages
    pub total: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, total: u64) -> Self {
        Self { data, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_based() {
        let params = PaginationParams { page: 3, limit: 10 };
        assert_eq!(params.offset(), 20);

        // Page 0 and page 1 both start at the first row
        assert_eq!(PaginationParams { page: 0, limit: 10 }.offset(), 0);
        assert_eq!(PaginationParams { page: 1, limit: 10 }.offset(), 0);
    }

    #[test]
    fn test_limit_is_capped() {
        let params = PaginationParams {
            page: 1,
            limit: 10_000,
        };
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_paginated_wire_shape() {
        let page = Paginated::new(vec![1, 2, 3], 42);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["total"], 42);
    }
}

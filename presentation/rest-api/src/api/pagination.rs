use poem_openapi::Object;

use business::domain::shared::pagination::{Page, PageRequest};

/// Paging metadata carried by every list response
#[derive(Debug, Clone, Object)]
pub struct PageInfo {
    /// Zero-based page index
    pub page: u32,
    /// Requested page size
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Sort applied, as "property,direction"
    pub sort: String,
    pub last: bool,
}

impl<T> From<&Page<T>> for PageInfo {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            sort: page.sort.to_string(),
            last: page.is_last(),
        }
    }
}

pub fn page_request(page: Option<u32>, size: Option<u32>) -> PageRequest {
    PageRequest::from_query(page, size)
}

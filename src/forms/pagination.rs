use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Shared `page`/`size` query parameters. The page index is zero-based;
/// both fall back to defaults when omitted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl Pagination {
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        Self { page, size }
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

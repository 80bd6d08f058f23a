//! List queries and the paginated response envelope.

use serde::Deserialize;

/// Page size the dashboard tables use.
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// `meta` block of a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub total: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub last_page: u32,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            total: 0,
            from: None,
            to: None,
            last_page: 1,
        }
    }
}

/// A page of records plus its meta block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Query parameters of the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Query-string pairs. Sequence-free so it stays representable as form
    /// pairs; the search key is omitted entirely when unset.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(search) = &self.search {
            pairs.push(("search".to_owned(), search.clone()));
        }
        pairs.push(("page".to_owned(), self.page.to_string()));
        pairs.push(("limit".to_owned(), self.limit.to_string()));
        pairs
    }
}

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::client::{ApiClient, CallOptions, Route};
use super::types::ApiError;

pub const DEFAULT_PAGE_SIZE: u64 = 14;

/// Standard list envelope. `count` is the server-side total, which may
/// exceed `results.len()` when only a page was fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: u64,
    pub max_pages: Option<u64>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: None,
        }
    }
}

impl PageRequest {
    pub fn first_page() -> Self {
        Self {
            max_pages: Some(1),
            ..Self::default()
        }
    }
}

impl ApiClient {
    /// Walks limit/offset pages in server order until the reported total
    /// is reached, the page cap is hit, or a page comes back empty (counts
    /// can go stale between fetches).
    pub async fn invoke_paginated<R: DeserializeOwned>(
        &self,
        route: &Route,
        options: CallOptions,
        paging: PageRequest,
    ) -> Result<PaginatedResponse<R>, ApiError> {
        let mut results: Vec<R> = Vec::new();
        let mut count = 0u64;
        let mut page = 0u64;
        loop {
            if let Some(max_pages) = paging.max_pages {
                if page >= max_pages {
                    break;
                }
            }
            let page_options = options
                .clone()
                .query("limit", paging.page_size)
                .query("offset", page * paging.page_size);
            let mut response: PaginatedResponse<R> = self.invoke(route, page_options).await?;
            count = response.count;
            if response.results.is_empty() {
                break;
            }
            results.append(&mut response.results);
            page += 1;
            if results.len() as u64 >= count {
                break;
            }
        }
        Ok(PaginatedResponse { count, results })
    }
}

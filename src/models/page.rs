use serde::{Deserialize, Serialize};

/// Pagination metadata as returned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u32,
    /// Zero-based page index.
    pub number: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl PageMetadata {
    /// `ceil(total_elements / size)`, or `None` when size is zero.
    pub fn expected_total_pages(&self) -> Option<u64> {
        if self.size == 0 {
            return None;
        }
        Some(self.total_elements.div_ceil(u64::from(self.size)))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.number) + 1 < u64::from(self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

/// One page of a paginated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
}

impl<T> Page<T> {
    /// Whether the page honours `totalPages = ceil(totalElements / size)` and
    /// `content.len() <= size`.
    pub fn is_consistent(&self) -> bool {
        match self.page.expected_total_pages() {
            Some(expected) => {
                u64::from(self.page.total_pages) == expected
                    && self.content.len() <= self.page.size as usize
            }
            None => self.content.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// Pagination metadata reported alongside every list page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// 1-indexed
    pub current_page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
}

impl PageMetadata {
    /// Safe default shown when nothing could be loaded: page 1 of 1, no elements
    pub fn fallback(size: u32) -> Self {
        PageMetadata {
            current_page: 1,
            total_pages: 1,
            total_elements: 0,
            size,
        }
    }

    /// Clamps `current_page` into `1..=max(total_pages, 1)`
    pub fn normalized(self) -> Self {
        let last = self.total_pages.max(1);

        PageMetadata {
            current_page: self.current_page.clamp(1, last),
            ..self
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// Payload of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PageMetadata>,
}

impl<T> PageData<T> {
    pub fn new(content: Vec<T>, pagination: PageMetadata) -> Self {
        PageData {
            content,
            pagination: Some(pagination),
        }
    }

    /// Pagination as reported, or derived from the content when the server omitted it
    pub fn metadata(&self, current_page: u32, size: u32) -> PageMetadata {
        match self.pagination {
            Some(pagination) => pagination.normalized(),
            None => {
                let total_elements = self.content.len() as u64;
                PageMetadata {
                    current_page: current_page.max(1),
                    total_pages: u32::from(total_elements > 0).max(current_page),
                    total_elements,
                    size,
                }
                .normalized()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalized_clamps_current_page() {
        let meta = PageMetadata {
            current_page: 9,
            total_pages: 3,
            total_elements: 25,
            size: 10,
        };
        assert_eq!(meta.normalized().current_page, 3);

        let empty = PageMetadata {
            current_page: 0,
            total_pages: 0,
            total_elements: 0,
            size: 10,
        };
        assert_eq!(empty.normalized().current_page, 1);
    }

    #[test]
    fn test_missing_content_defaults_to_empty() {
        let page: PageData<i64> = serde_json::from_value(json!({
            "pagination": { "currentPage": 1, "totalPages": 1, "totalElements": 0, "size": 10 }
        }))
        .unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.metadata(1, 10), PageMetadata::fallback(10));
    }

    #[test]
    fn test_metadata_derived_when_pagination_missing() {
        let page: PageData<i64> = serde_json::from_value(json!({ "content": [1, 2] })).unwrap();

        let meta = page.metadata(1, 10);
        assert_eq!(meta.total_elements, 2);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next());
    }
}

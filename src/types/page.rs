use serde::{Deserialize, Serialize};

/// Offset-based pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based index of the first row.
    pub offset: u64,
    /// Maximum number of rows in the page.
    pub size: u64,
}

impl PageRequest {
    pub fn new(offset: u64, size: u64) -> Self {
        Self { offset, size }
    }

    /// Request for the zero-based page number `page` of `size` rows.
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            offset: page.saturating_mul(size),
            size,
        }
    }

    /// Zero-based page number this request falls on.
    pub fn page_number(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.offset / self.size
        }
    }
}

/// A page of results with the request that produced it and the total match count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_request: PageRequest,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page_request: PageRequest, total: u64) -> Self {
        Self {
            content,
            page_request,
            total,
        }
    }

    pub fn empty(page_request: PageRequest) -> Self {
        Self::new(Vec::new(), page_request, 0)
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_request.size == 0 {
            0
        } else {
            self.total.div_ceil(self.page_request.size)
        }
    }

    pub fn has_next(&self) -> bool {
        self.page_request
            .offset
            .saturating_add(self.content.len() as u64)
            < self.total
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_of() {
        let request = PageRequest::of(2, 10);
        assert_eq!(request.offset, 20);
        assert_eq!(request.size, 10);
        assert_eq!(request.page_number(), 2);
    }

    #[test]
    fn test_total_pages() {
        let page = Page::new(vec![1, 2, 3], PageRequest::of(0, 3), 7);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());

        let last = Page::new(vec![7], PageRequest::of(2, 3), 7);
        assert!(!last.has_next());
    }

    #[test]
    fn test_has_next_near_offset_limit() {
        let page = Page::new(vec![1], PageRequest::of(u64::MAX, 10), u64::MAX);
        assert_eq!(page.page_request.offset, u64::MAX);
        assert!(!page.has_next());

        let page = Page::new(vec![1, 2], PageRequest::new(u64::MAX - 5, 2), u64::MAX);
        assert!(page.has_next());
    }

    #[test]
    fn test_empty_page() {
        let page: Page<i32> = Page::empty(PageRequest::new(0, 10));
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages(), 0);
        assert_eq!(page.into_iter().count(), 0);
    }

    #[test]
    fn test_zero_size_request() {
        let page: Page<i32> = Page::new(vec![], PageRequest::new(0, 0), 5);
        assert_eq!(page.total_pages(), 0);
        assert_eq!(page.page_request.page_number(), 0);
    }
}

//! Server-side paginated list
//!
//! Tracks the paging parameters, the currently loaded page and the in-flight
//! request. Every parameter change yields a [`PageRequest`] tagged with a
//! sequence number; only the response to the most recently issued request is
//! applied, so a slow response to a superseded request can never overwrite
//! newer state.

use std::future::Future;

use super::ListView;
use crate::error::{AdminError, AdminResult};
use crate::pagination::{Page, PageDescriptor, PageSize};

/// Parameters of one page fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Monotonically increasing per list
    pub seq: u64,
    pub page_number: usize,
    pub page_size: PageSize,
    pub search_query: String,
}

/// A list whose pages are fetched one at a time
#[derive(Debug, Clone)]
pub struct ServerPaginatedList<T> {
    page_number: usize,
    page_size: PageSize,
    search_query: String,
    items: Vec<T>,
    total_items: usize,
    total_pages: usize,
    loading: bool,
    error: Option<String>,
    issued: u64,
}

impl<T> Default for ServerPaginatedList<T> {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl<T> ServerPaginatedList<T> {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_number: 1,
            page_size,
            search_query: String::new(),
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            loading: false,
            error: None,
            issued: 0,
        }
    }

    /// Issue a request for the current parameters (used on mount and refresh)
    pub fn request(&mut self) -> PageRequest {
        self.issued += 1;
        self.loading = true;

        tracing::debug!(
            seq = self.issued,
            page = self.page_number,
            page_size = self.page_size.get(),
            "Issuing page request"
        );

        PageRequest {
            seq: self.issued,
            page_number: self.page_number,
            page_size: self.page_size,
            search_query: self.search_query.clone(),
        }
    }

    /// Move to another page. Returns the request to issue, if anything changed.
    pub fn set_page(&mut self, page: usize) -> Option<PageRequest> {
        let mut page = page.max(1);
        if self.total_pages > 0 {
            page = page.min(self.total_pages);
        }
        if page == self.page_number {
            return None;
        }
        self.page_number = page;
        Some(self.request())
    }

    /// Change the page size. Always goes back to page 1.
    pub fn set_page_size(&mut self, size: PageSize) -> Option<PageRequest> {
        if size == self.page_size {
            return None;
        }
        self.page_size = size;
        self.page_number = 1;
        Some(self.request())
    }

    /// Change the search text. Goes back to page 1.
    pub fn set_search(&mut self, query: &str) -> Option<PageRequest> {
        if query == self.search_query {
            return None;
        }
        self.search_query = query.to_string();
        self.page_number = 1;
        Some(self.request())
    }

    /// Apply the outcome of request `seq`.
    ///
    /// Returns `false` when the response belongs to a superseded request and
    /// was discarded.
    pub fn apply(&mut self, seq: u64, result: AdminResult<Page<T>>) -> bool {
        if seq != self.issued {
            tracing::warn!(seq, latest = self.issued, "Discarding stale page response");
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_items = page.descriptor.total_items;
                self.total_pages = page.descriptor.total_pages;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "Page request failed");
                self.error = Some(e.user_message());
            }
        }
        true
    }

    /// Issue a request for the current parameters, await it and apply it
    pub async fn refresh_with<F, Fut>(&mut self, fetch: F) -> Result<(), String>
    where
        F: FnOnce(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>, AdminError>>,
    {
        let request = self.request();
        let seq = request.seq;
        let result = fetch(request).await;
        self.apply(seq, result);
        match &self.error {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }

    /// What the table area shows; an error takes precedence over rows
    pub fn view(&self) -> ListView<'_, T> {
        if let Some(message) = &self.error {
            ListView::Error(message)
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(&self.items)
        }
    }

    /// Paging controls are inactive while only one page exists
    pub fn controls_disabled(&self) -> bool {
        self.total_pages <= 1
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sequence number of the most recently issued request
    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    pub fn descriptor(&self) -> PageDescriptor {
        PageDescriptor {
            page_number: self.page_number,
            page_size: self.page_size.get(),
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, total_items: usize, total_pages: usize) -> AdminResult<Page<u32>> {
        Ok(Page {
            items,
            descriptor: PageDescriptor {
                page_number: 1,
                page_size: 10,
                total_items,
                total_pages,
            },
        })
    }

    fn server_error() -> AdminResult<Page<u32>> {
        Err(AdminError::Status {
            status: 500,
            message: "Failed to fetch student mark uploads.".to_string(),
        })
    }

    #[test]
    fn test_mount_loads_first_page() {
        let mut list = ServerPaginatedList::<u32>::default();
        let req = list.request();
        assert_eq!(req.page_number, 1);
        assert_eq!(req.page_size, PageSize::Ten);
        assert!(list.is_loading());

        assert!(list.apply(req.seq, page(vec![1, 2, 3], 23, 3)));
        assert!(!list.is_loading());
        assert_eq!(list.items(), &[1, 2, 3]);
        assert_eq!(list.total_pages(), 3);
        assert!(!list.controls_disabled());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut list = ServerPaginatedList::<u32>::default();
        let req = list.request();
        list.apply(req.seq, page(vec![1], 50, 5));
        list.set_page(4).unwrap();
        assert_eq!(list.page_number(), 4);

        let req = list.set_page_size(PageSize::Twenty).unwrap();
        assert_eq!(req.page_number, 1);
        assert_eq!(req.page_size, PageSize::Twenty);
        assert_eq!(list.page_number(), 1);
    }

    #[test]
    fn test_unchanged_parameters_issue_nothing() {
        let mut list = ServerPaginatedList::<u32>::default();
        assert!(list.set_page(1).is_none());
        assert!(list.set_page_size(PageSize::Ten).is_none());
        assert!(list.set_search("").is_none());
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut list = ServerPaginatedList::<u32>::default();
        let req = list.request();
        list.apply(req.seq, page(vec![1], 50, 5));
        list.set_page(3);

        let req = list.set_search("gala").unwrap();
        assert_eq!(req.page_number, 1);
        assert_eq!(req.search_query, "gala");
    }

    #[test]
    fn test_error_replaces_table_and_keeps_old_rows() {
        let mut list = ServerPaginatedList::<u32>::default();
        let req = list.request();
        list.apply(req.seq, page(vec![7, 8], 2, 1));

        let req = list.request();
        list.apply(req.seq, server_error());

        assert_eq!(list.view(), ListView::Error("Failed to fetch student mark uploads."));
        assert!(list.view().rows().is_none());
        assert_eq!(list.items(), &[7, 8]);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_success_clears_error() {
        let mut list = ServerPaginatedList::<u32>::default();
        let req = list.request();
        list.apply(req.seq, server_error());
        let req = list.request();
        list.apply(req.seq, page(vec![1], 1, 1));
        assert!(list.error().is_none());
        assert_eq!(list.view(), ListView::Rows(&[1u32][..]));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut list = ServerPaginatedList::<u32>::default();
        let first = list.request();
        list.apply(first.seq, page(vec![1], 30, 3));

        let to_page_2 = list.set_page(2).unwrap();
        let to_page_3 = list.set_page(3).unwrap();

        // Page 3 answers first, then the slower page 2 response arrives.
        assert!(list.apply(to_page_3.seq, page(vec![3], 30, 3)));
        assert!(!list.apply(to_page_2.seq, page(vec![2], 30, 3)));

        assert_eq!(list.items(), &[3]);
        assert_eq!(list.page_number(), 3);
    }

    #[test]
    fn test_loading_persists_until_latest_arrives() {
        let mut list = ServerPaginatedList::<u32>::default();
        let older = list.request();
        let newer = list.request();
        list.apply(older.seq, page(vec![1], 1, 1));
        assert!(list.is_loading());
        list.apply(newer.seq, page(vec![2], 1, 1));
        assert!(!list.is_loading());
    }

    #[test]
    fn test_single_page_disables_controls() {
        let mut list = ServerPaginatedList::<u32>::default();
        let req = list.request();
        list.apply(req.seq, page(vec![1, 2], 2, 1));
        assert!(list.controls_disabled());
    }

    #[test]
    fn test_empty_page_view() {
        let mut list = ServerPaginatedList::<u32>::default();
        let req = list.request();
        list.apply(req.seq, page(vec![], 0, 0));
        assert_eq!(list.view(), ListView::Empty);
    }

    #[tokio::test]
    async fn test_refresh_with_reports_error() {
        let mut list = ServerPaginatedList::<u32>::default();
        let result = list.refresh_with(|_| async { server_error() }).await;
        assert_eq!(result, Err("Failed to fetch student mark uploads.".to_string()));

        let result = list
            .refresh_with(|req| async move {
                assert_eq!(req.seq, 2);
                page(vec![4], 1, 1)
            })
            .await;
        assert!(result.is_ok());
    }
}

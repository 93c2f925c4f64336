//! Pagination
//!
//! Page metadata, the enumerated page sizes offered by list views, client
//! side slicing and the page-button window shown by paging controls.

use serde::{Deserialize, Serialize};

/// Server-reported pagination metadata. `page_number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    pub page_number: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageDescriptor {
    /// Descriptor for a collection paginated locally
    pub fn local(page_number: usize, page_size: usize, total_items: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size,
            total_items,
            total_pages: page_count(total_items, page_size),
        }
    }

    /// Whether more than one page exists
    pub fn is_multi_page(&self) -> bool {
        self.total_pages > 1
    }
}

/// One page of entities with its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub descriptor: PageDescriptor,
}

/// Page sizes offered by the "Items per page" selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [PageSize::Five, PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }

    /// Exact match against the offered sizes
    pub fn from_value(value: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.get() == value)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| {
            format!("Unsupported page size {}; expected one of 5, 10, 20, 50", value)
        })
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Number of pages needed for `total_items` at `per_page` (ceiling division)
pub fn page_count(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Items of 1-based page `page` when `items` is split into pages of `per_page`.
///
/// Out-of-range pages yield an empty slice; page 0 is treated as page 1.
pub fn slice_page<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 {
        return &[];
    }
    let start = (page.max(1) - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Page buttons for a paging control.
///
/// Shows `edge` pages at each end and `around` pages either side of the
/// current page. `None` marks an ellipsis gap.
pub fn page_links(total_pages: usize, current_page: usize, edge: usize, around: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let mut pages = Vec::new();

    let left_end = (1 + edge).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current.saturating_sub(around));
    // An empty window still advances past the left edge
    let mid_end = (current + around + 1).min(total_pages + 1).max(mid_start);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(edge) + 1);
    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}

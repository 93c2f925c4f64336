//! List Views
//!
//! State for the searchable, sortable, paginated tables.
//!
//! Two strategies are used, chosen by expected data volume:
//!
//! - [`ServerPaginatedList`]: one page is requested at a time. Used for
//!   collections that grow without bound (event registrations, mark uploads).
//! - [`ClientPaginatedList`]: the whole collection is fetched once and
//!   filtered, sorted and sliced locally. Used only for the customer list,
//!   which the API returns in full.

pub mod client;
pub mod server;

pub use client::{
    compare_text, stable_sort, ClientListItem, ClientPaginatedList, CustomerSortKey,
    CUSTOMERS_PER_PAGE,
};
pub use server::{PageRequest, ServerPaginatedList};

/// What a list view shows in its table area
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a, T> {
    /// The last request failed; the text replaces the table
    Error(&'a str),
    /// Nothing to show ("no records")
    Empty,
    /// Rows for the current page
    Rows(&'a [T]),
}

impl<T> ListView<'_, T> {
    pub fn is_error(&self) -> bool {
        matches!(self, ListView::Error(_))
    }

    pub fn rows(&self) -> Option<&[T]> {
        match self {
            ListView::Rows(rows) => Some(rows),
            _ => None,
        }
    }
}

//! Client-side paginated list
//!
//! Holds a fully fetched collection and derives the visible rows with
//! filter, then stable sort, then reverse, then page slicing.

use std::cmp::Ordering;

use super::ListView;
use crate::models::Customer;
use crate::pagination::{page_count, slice_page, PageDescriptor};

/// Rows per page on the customer list
pub const CUSTOMERS_PER_PAGE: usize = 6;

/// An entity that can appear in a client-paginated list
pub trait ClientListItem: Clone {
    /// Enumerated sort choices for this entity
    type SortKey: Copy + Default + PartialEq + std::fmt::Debug;

    /// Field the search box matches against
    fn search_field(&self) -> &str;

    /// Comparator for `key`; `Ordering::Equal` for keys that do not sort
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// Locale-style text comparison: case-insensitive first, then by raw text
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Stable sort of `items` by the entity comparator for `key`
pub fn stable_sort<T: ClientListItem>(items: &mut [T], key: T::SortKey) {
    // slice::sort_by is stable
    items.sort_by(|a, b| a.compare_by(b, key));
}

/// Whether `item` matches `query` (case-insensitive substring; empty matches all)
pub fn matches_query<T: ClientListItem>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    item.search_field()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// A fully fetched collection paginated locally
#[derive(Debug, Clone)]
pub struct ClientPaginatedList<T: ClientListItem> {
    source: Vec<T>,
    query: String,
    sort_key: T::SortKey,
    page: usize,
    per_page: usize,
    derived: Vec<T>,
}

impl<T: ClientListItem> ClientPaginatedList<T> {
    pub fn new(per_page: usize) -> Self {
        Self {
            source: Vec::new(),
            query: String::new(),
            sort_key: T::SortKey::default(),
            page: 1,
            per_page: per_page.max(1),
            derived: Vec::new(),
        }
    }

    /// Replace the source collection wholesale
    pub fn set_source(&mut self, items: Vec<T>) {
        self.source = items;
        self.recompute();
    }

    /// Change the search text; returns to page 1
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.page = 1;
            self.recompute();
        }
    }

    /// Change the sort key; returns to page 1
    pub fn set_sort_key(&mut self, key: T::SortKey) {
        if self.sort_key != key {
            self.sort_key = key;
            self.page = 1;
            self.recompute();
        }
    }

    /// Jump to a page, clamped to the available range. Never fetches.
    pub fn set_page(&mut self, page: usize) {
        let last = self.page_count().max(1);
        self.page = page.clamp(1, last);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_key(&self) -> T::SortKey {
        self.sort_key
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Filtered and sorted rows across all pages, in display order
    pub fn filtered(&self) -> &[T] {
        &self.derived
    }

    pub fn page_count(&self) -> usize {
        page_count(self.derived.len(), self.per_page)
    }

    /// Rows on the current page
    pub fn page_items(&self) -> &[T] {
        slice_page(&self.derived, self.page, self.per_page)
    }

    pub fn descriptor(&self) -> PageDescriptor {
        PageDescriptor::local(self.page, self.per_page, self.derived.len())
    }

    pub fn view(&self) -> ListView<'_, T> {
        if self.derived.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(self.page_items())
        }
    }

    fn recompute(&mut self) {
        let mut rows: Vec<T> = self
            .source
            .iter()
            .filter(|item| matches_query(*item, &self.query))
            .cloned()
            .collect();
        stable_sort(&mut rows, self.sort_key);
        rows.reverse();
        self.derived = rows;

        let last = self.page_count().max(1);
        if self.page > last {
            self.page = last;
        }
    }
}

/// Sort choices offered by the customer list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CustomerSortKey {
    #[default]
    Default,
    CustomerName,
    Email,
    Contact,
    Age,
    Country,
    Status,
}

impl CustomerSortKey {
    pub const ALL: [CustomerSortKey; 7] = [
        CustomerSortKey::Default,
        CustomerSortKey::CustomerName,
        CustomerSortKey::Email,
        CustomerSortKey::Contact,
        CustomerSortKey::Age,
        CustomerSortKey::Country,
        CustomerSortKey::Status,
    ];

    /// Label shown in the sort selector
    pub fn label(self) -> &'static str {
        match self {
            CustomerSortKey::Default => "Default",
            CustomerSortKey::CustomerName => "Customer Name",
            CustomerSortKey::Email => "Email",
            CustomerSortKey::Contact => "Contact",
            CustomerSortKey::Age => "Age",
            CustomerSortKey::Country => "Country",
            CustomerSortKey::Status => "Status",
        }
    }

    /// Total mapping from a selector label; unknown labels fall back to `Default`
    pub fn from_label(label: &str) -> Self {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(wanted))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for CustomerSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl ClientListItem for Customer {
    type SortKey = CustomerSortKey;

    fn search_field(&self) -> &str {
        &self.name
    }

    fn compare_by(&self, other: &Self, key: CustomerSortKey) -> Ordering {
        match key {
            CustomerSortKey::Default => Ordering::Equal,
            CustomerSortKey::CustomerName => compare_text(&self.name, &other.name),
            CustomerSortKey::Email => compare_text(&self.email, &other.email),
            CustomerSortKey::Contact => compare_text(&self.contact, &other.contact),
            CustomerSortKey::Age => self.age.cmp(&other.age),
            CustomerSortKey::Country => compare_text(&self.country, &other.country),
            CustomerSortKey::Status => compare_text(&self.status, &other.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn customer(id: usize, name: &str, age: u32) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase()),
            contact: format!("0{}", 820000000 + id),
            age,
            country: "ZA".to_string(),
            status: "active".to_string(),
            father_name: None,
            role: None,
            about: None,
            skills: Vec::new(),
            location: None,
            date: None,
            avatar: None,
        }
    }

    fn thirteen() -> Vec<Customer> {
        (0..13).map(|i| customer(i, &format!("Customer {:02}", i), 20 + i as u32)).collect()
    }

    #[test]
    fn test_thirteen_customers_three_pages() {
        let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
        list.set_source(thirteen());

        assert_eq!(list.page_count(), 3);
        list.set_page(3);
        assert_eq!(list.page_items().len(), 1);
    }

    #[test]
    fn test_default_sort_reverses_source_order() {
        let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
        list.set_source(thirteen());

        let ids: Vec<&str> = list.filtered().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"12"));
        assert_eq!(ids.last(), Some(&"0"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
        list.set_source(vec![
            customer(1, "Naledi", 30),
            customer(2, "Sipho", 25),
            customer(3, "NALEDI K", 41),
        ]);
        list.set_query("naledi");

        assert_eq!(list.filtered().len(), 2);
        assert!(list.filtered().iter().all(|c| c.name.to_lowercase().contains("naledi")));
    }

    #[test]
    fn test_zero_matches_is_empty_view() {
        let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
        list.set_source(thirteen());
        list.set_query("nobody");

        assert_eq!(list.view(), ListView::Empty);
        assert_eq!(list.page_count(), 0);
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
        list.set_source(thirteen());
        list.set_page(3);
        list.set_query("Customer");
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_age_sort_numeric_then_reversed() {
        let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
        list.set_source(vec![
            customer(1, "A", 9),
            customer(2, "B", 100),
            customer(3, "C", 25),
        ]);
        list.set_sort_key(CustomerSortKey::Age);

        let ages: Vec<u32> = list.filtered().iter().map(|c| c.age).collect();
        assert_eq!(ages, vec![100, 25, 9]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let mut items = vec![customer(1, "zola", 1), customer(2, "Amahle", 1), customer(3, "bongani", 1)];
        stable_sort(&mut items, CustomerSortKey::CustomerName);
        let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Amahle", "bongani", "zola"]);
    }

    #[test]
    fn test_sort_key_labels_total() {
        assert_eq!(CustomerSortKey::from_label("Customer Name"), CustomerSortKey::CustomerName);
        assert_eq!(CustomerSortKey::from_label("age"), CustomerSortKey::Age);
        assert_eq!(CustomerSortKey::from_label("Shoe size"), CustomerSortKey::Default);
        for key in CustomerSortKey::ALL {
            assert_eq!(CustomerSortKey::from_label(key.label()), key);
        }
    }

    #[test]
    fn test_set_page_never_leaves_range() {
        let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
        list.set_source(thirteen());
        list.set_page(0);
        assert_eq!(list.page(), 1);
        list.set_page(40);
        assert_eq!(list.page(), 3);
    }

    fn arb_customers() -> impl Strategy<Value = Vec<Customer>> {
        prop::collection::vec(("[a-dA-D ]{0,6}", 0u32..5), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, age))| customer(i, &name, age))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn filtered_is_subset_and_matches(source in arb_customers(), query in "[a-dA-D]{0,2}") {
            let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
            list.set_source(source.clone());
            list.set_query(&query);

            let needle = query.to_lowercase();
            for item in list.filtered() {
                prop_assert!(source.contains(item));
                prop_assert!(item.name.to_lowercase().contains(&needle));
            }
            let expected = source.iter().filter(|c| c.name.to_lowercase().contains(&needle)).count();
            prop_assert_eq!(list.filtered().len(), expected);
        }

        #[test]
        fn empty_query_keeps_everything(source in arb_customers()) {
            let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
            list.set_source(source.clone());
            prop_assert_eq!(list.filtered().len(), source.len());
        }

        #[test]
        fn sort_is_stable(source in arb_customers()) {
            let mut sorted = source.clone();
            stable_sort(&mut sorted, CustomerSortKey::Age);
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].age <= pair[1].age);
                if pair[0].age == pair[1].age {
                    let a: usize = pair[0].id.parse().unwrap();
                    let b: usize = pair[1].id.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }

        #[test]
        fn paging_is_idempotent(source in arb_customers(), page in 1usize..10) {
            let mut list = ClientPaginatedList::new(CUSTOMERS_PER_PAGE);
            list.set_source(source);
            list.set_sort_key(CustomerSortKey::CustomerName);
            list.set_page(page);
            let first = list.page_items().to_vec();
            list.set_page(page);
            prop_assert_eq!(first, list.page_items().to_vec());
        }
    }
}

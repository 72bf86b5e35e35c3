//! Filter/paginate engine: derives the visible rows from a fetched page.
//!
//! Nothing here sorts. Rows always come out in the order the server sent them.

use serde::{Deserialize, Serialize};

use crate::entity::ListItem;

use super::criteria::FilterCriteria;

/// Where search and status filtering happen for a given collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Criteria go to the server as query parameters; the returned page is
    /// trusted verbatim.
    ServerPaginated,
    /// The whole collection is fetched once and filtered locally.
    ClientFiltered,
}

/// One page of results as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }
}

impl<T> PageResult<T> {
    /// Wrap a whole unpaginated collection as a single page.
    pub fn collection(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self {
            items,
            total,
            total_pages: if total == 0 { 0 } else { 1 },
        }
    }
}

/// `ceil(total / page_size)`; zero items means zero pages.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size)) as u32
}

/// Case-insensitive substring match over the item's searchable fields.
///
/// An empty term matches everything. The term is used as typed, so
/// surrounding whitespace is part of the match. Fields are OR-ed together.
pub fn matches_search<T: ListItem>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep items matching both the search term and the status filter.
pub fn apply_client_filter<T: ListItem>(items: &[T], criteria: &FilterCriteria<T::Status>) -> Vec<T> {
    items
        .iter()
        .filter(|item| {
            matches_search(*item, &criteria.search) && criteria.filter.matches(&item.status())
        })
        .cloned()
        .collect()
}

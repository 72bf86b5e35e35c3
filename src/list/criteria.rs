//! User-editable filter criteria for one list view.

use crate::types::DEFAULT_PAGE_SIZE;

/// Status (or tier) selection; `All` is the "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: PartialEq + Copy> StatusFilter<S> {
    /// Status predicate. `All` short-circuits to true.
    pub fn matches(&self, status: &S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(selected) => selected == status,
        }
    }

    /// Card-click semantics: picking the active value again clears the filter.
    pub fn toggled(self, value: S) -> Self {
        match self {
            StatusFilter::Only(current) if current == value => StatusFilter::All,
            _ => StatusFilter::Only(value),
        }
    }

    pub fn selected(&self) -> Option<S> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(value) => Some(*value),
        }
    }
}

impl<S> From<Option<S>> for StatusFilter<S> {
    fn from(value: Option<S>) -> Self {
        match value {
            Some(v) => StatusFilter::Only(v),
            None => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria<S> {
    pub search: String,
    pub filter: StatusFilter<S>,
    /// 1-based; never 0
    pub page: u32,
    pub page_size: u32,
}

impl<S> Default for FilterCriteria<S> {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: StatusFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<S> FilterCriteria<S> {
    /// Trimmed search term, or `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }
}

/// Partial update merged by `ListStore::set_criteria`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaPatch<S> {
    pub search: Option<String>,
    pub filter: Option<StatusFilter<S>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl<S> Default for CriteriaPatch<S> {
    fn default() -> Self {
        Self {
            search: None,
            filter: None,
            page: None,
            page_size: None,
        }
    }
}

impl<S> CriteriaPatch<S> {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// A filter change always lands back on the first page.
    pub fn filter(filter: StatusFilter<S>) -> Self {
        Self {
            filter: Some(filter),
            page: Some(1),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn apply(self, criteria: &mut FilterCriteria<S>) {
        if let Some(search) = self.search {
            criteria.search = search;
        }
        if let Some(filter) = self.filter {
            criteria.filter = filter;
        }
        if let Some(page) = self.page {
            criteria.page = page.max(1);
        }
        if let Some(page_size) = self.page_size {
            criteria.page_size = page_size.max(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TaskStatus, TierCode};

    #[test]
    fn test_all_matches_every_status() {
        let filter: StatusFilter<TaskStatus> = StatusFilter::All;
        for status in TaskStatus::ALL {
            assert!(filter.matches(&status));
        }
    }

    #[test]
    fn test_only_is_exact_equality() {
        let filter = StatusFilter::Only(TaskStatus::Approved);
        assert!(filter.matches(&TaskStatus::Approved));
        assert!(!filter.matches(&TaskStatus::Completed));
    }

    #[test]
    fn test_toggle_same_value_returns_to_all() {
        let filter = StatusFilter::Only(TierCode::Pkg2);
        assert_eq!(filter.toggled(TierCode::Pkg2), StatusFilter::All);
        assert_eq!(
            filter.toggled(TierCode::Pkg4),
            StatusFilter::Only(TierCode::Pkg4)
        );
        assert_eq!(
            StatusFilter::All.toggled(TierCode::Pkg2),
            StatusFilter::Only(TierCode::Pkg2)
        );
    }

    #[test]
    fn test_defaults() {
        let criteria: FilterCriteria<TierCode> = FilterCriteria::default();
        assert_eq!(criteria.page, 1);
        assert_eq!(criteria.page_size, 15);
        assert_eq!(criteria.filter, StatusFilter::All);
        assert_eq!(criteria.search_term(), None);
    }

    #[test]
    fn test_patch_merges_and_clamps_page() {
        let mut criteria: FilterCriteria<TierCode> = FilterCriteria::default();
        CriteriaPatch::search("  acme ").with_page(0).apply(&mut criteria);

        assert_eq!(criteria.search, "  acme ");
        assert_eq!(criteria.search_term(), Some("acme"));
        assert_eq!(criteria.page, 1);
        assert_eq!(criteria.filter, StatusFilter::All);
    }

    #[test]
    fn test_filter_patch_resets_page() {
        let mut criteria: FilterCriteria<TierCode> = FilterCriteria {
            page: 4,
            ..FilterCriteria::default()
        };
        CriteriaPatch::filter(StatusFilter::Only(TierCode::Pkg1)).apply(&mut criteria);

        assert_eq!(criteria.page, 1);
        assert_eq!(criteria.filter.selected(), Some(TierCode::Pkg1));
    }
}

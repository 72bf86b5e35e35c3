//! List state store: single source of truth for one list view.
//!
//! Every fetch is tagged with a generation. Only the most recently issued
//! fetch may write results back, so a slow early response can never
//! overwrite a fresher one.

use crate::entity::ListItem;
use crate::error::CredoError;

use super::criteria::{CriteriaPatch, FilterCriteria};
use super::engine::PageResult;

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket<S> {
    pub generation: u64,
    /// Criteria snapshot the fetch must be issued with
    pub criteria: FilterCriteria<S>,
}

/// What happened to a fetch result handed back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// A newer fetch was issued since; the result was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListStore<T: ListItem> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub criteria: FilterCriteria<T::Status>,
    pub total: u64,
    pub total_pages: u32,
    generation: u64,
}

impl<T: ListItem> Default for ListStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            criteria: FilterCriteria::default(),
            total: 0,
            total_pages: 0,
            generation: 0,
        }
    }
}

impl<T: ListItem> ListStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria<T::Status>) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    /// Merge a partial criteria change. Does not fetch.
    pub fn set_criteria(&mut self, patch: CriteriaPatch<T::Status>) {
        patch.apply(&mut self.criteria);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin_load(&mut self) -> LoadTicket<T::Status> {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket {
            generation: self.generation,
            criteria: self.criteria.clone(),
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket<T::Status>) -> bool {
        ticket.generation == self.generation
    }

    /// Replace the page wholesale with `result`.
    pub fn complete_load(
        &mut self,
        ticket: &LoadTicket<T::Status>,
        result: PageResult<T>,
    ) -> LoadOutcome {
        if !self.is_current(ticket) {
            tracing::debug!(
                "discarding stale page (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return LoadOutcome::Stale;
        }

        self.items = result.items;
        self.total = result.total;
        self.total_pages = result.total_pages;
        self.loading = false;
        LoadOutcome::Applied
    }

    /// Record a failed fetch. Previously displayed items stay visible.
    pub fn fail_load(
        &mut self,
        ticket: &LoadTicket<T::Status>,
        err: &CredoError,
        label: &str,
    ) -> LoadOutcome {
        if !self.is_current(ticket) {
            tracing::debug!(
                "discarding stale failure (generation {} < {}): {err}",
                ticket.generation,
                self.generation
            );
            return LoadOutcome::Stale;
        }

        self.error = Some(err.banner(label));
        self.loading = false;
        LoadOutcome::Failed
    }
}

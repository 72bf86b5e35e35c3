//! Remote list view: a data source wired to a list store.
//!
//! Methods take `&self` so a caller may start a new fetch while an older one
//! is still in flight. The store lock is never held across an await; the
//! store's generation check decides which response lands.

use parking_lot::Mutex;

use crate::api::DataSource;
use crate::entity::ListItem;

use super::criteria::{CriteriaPatch, FilterCriteria, StatusFilter};
use super::engine::{FilterMode, apply_client_filter};
use super::store::{ListStore, LoadOutcome};

type StatusOf<S> = <<S as DataSource>::Item as ListItem>::Status;

pub struct ListView<S: DataSource> {
    source: S,
    store: Mutex<ListStore<S::Item>>,
}

impl<S: DataSource> ListView<S> {
    pub fn new(source: S) -> Self {
        Self::with_criteria(source, FilterCriteria::default())
    }

    /// Start from non-default criteria, e.g. an initial page from the command line.
    pub fn with_criteria(source: S, criteria: FilterCriteria<StatusOf<S>>) -> Self {
        Self {
            source,
            store: Mutex::new(ListStore::with_criteria(criteria)),
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.source.mode()
    }

    pub fn label(&self) -> &'static str {
        self.source.label()
    }

    /// Copy of the store for rendering.
    pub fn snapshot(&self) -> ListStore<S::Item> {
        self.store.lock().clone()
    }

    pub fn criteria(&self) -> FilterCriteria<StatusOf<S>> {
        self.store.lock().criteria.clone()
    }

    /// Fetch with the current criteria.
    pub async fn refresh(&self) -> LoadOutcome {
        let ticket = self.store.lock().begin_load();
        let result = self.source.fetch_page(&ticket.criteria).await;

        let mut store = self.store.lock();
        match result {
            Ok(page) => store.complete_load(&ticket, page),
            Err(e) => {
                let outcome = store.fail_load(&ticket, &e, self.source.label());
                if outcome == LoadOutcome::Failed {
                    tracing::warn!("failed to load {}: {e}", self.source.label());
                }
                outcome
            }
        }
    }

    /// Edit the search box. Never fetches.
    pub fn set_search_text(&self, text: impl Into<String>) {
        self.store.lock().set_criteria(CriteriaPatch::search(text));
    }

    /// Submit the current search text: back to page 1, then re-fetch on
    /// server-paginated sources. Client-filtered sources just re-filter.
    pub async fn submit_search(&self) -> Option<LoadOutcome> {
        self.store.lock().set_criteria(CriteriaPatch::page(1));
        self.refetch_if_server_side().await
    }

    pub async fn submit_search_text(&self, text: impl Into<String>) -> Option<LoadOutcome> {
        self.set_search_text(text);
        self.submit_search().await
    }

    /// Replace the status filter (dropdown semantics). Resets to page 1.
    pub async fn set_filter(&self, filter: StatusFilter<StatusOf<S>>) -> Option<LoadOutcome> {
        self.store.lock().set_criteria(CriteriaPatch::filter(filter));
        self.refetch_if_server_side().await
    }

    /// Toggle a status filter (summary-card semantics). Resets to page 1.
    pub async fn toggle_filter(&self, value: StatusOf<S>) -> Option<LoadOutcome> {
        {
            let mut store = self.store.lock();
            let toggled = store.criteria.filter.toggled(value);
            store.set_criteria(CriteriaPatch::filter(toggled));
        }
        self.refetch_if_server_side().await
    }

    /// Move to `page`, clamped to `[1, total_pages]`.
    ///
    /// Returns `None` without fetching when the page would not change or the
    /// source is not server-paginated.
    pub async fn go_to_page(&self, page: u32) -> Option<LoadOutcome> {
        if self.mode() != FilterMode::ServerPaginated {
            return None;
        }
        {
            let mut store = self.store.lock();
            let target = page.clamp(1, store.total_pages.max(1));
            if target == store.criteria.page {
                return None;
            }
            store.set_criteria(CriteriaPatch::page(target));
        }
        Some(self.refresh().await)
    }

    pub async fn next_page(&self) -> Option<LoadOutcome> {
        let current = self.store.lock().criteria.page;
        self.go_to_page(current.saturating_add(1)).await
    }

    pub async fn prev_page(&self) -> Option<LoadOutcome> {
        let current = self.store.lock().criteria.page;
        self.go_to_page(current.saturating_sub(1)).await
    }

    /// Rows to render, in server order.
    pub fn rows(&self) -> Vec<S::Item> {
        let store = self.store.lock();
        match self.mode() {
            FilterMode::ServerPaginated => store.items.clone(),
            FilterMode::ClientFiltered => apply_client_filter(&store.items, &store.criteria),
        }
    }

    /// `(page, total_pages)` when there is more than one page to move between.
    pub fn pagination(&self) -> Option<(u32, u32)> {
        let store = self.store.lock();
        (self.mode() == FilterMode::ServerPaginated && store.total_pages > 1)
            .then_some((store.criteria.page, store.total_pages))
    }

    async fn refetch_if_server_side(&self) -> Option<LoadOutcome> {
        match self.mode() {
            FilterMode::ServerPaginated => Some(self.refresh().await),
            FilterMode::ClientFiltered => None,
        }
    }
}

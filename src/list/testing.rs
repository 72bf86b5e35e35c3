//! In-memory data sources and mutators for exercising list views without HTTP.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::api::{DataSource, Mutator};
use crate::entity::{Review, ReviewDetails, Subscription};
use crate::error::{CredoError, Result};
use crate::types::{TaskStatus, TierCode};

use super::criteria::FilterCriteria;
use super::engine::{FilterMode, PageResult, matches_search, page_count};

pub fn subscription(id: i64, tier: TierCode) -> Subscription {
    Subscription {
        user_id: id,
        user_email: format!("user{id}@example.com"),
        user_name: Some(format!("User {id}")),
        role: "DEVELOPER".to_string(),
        tier,
        tier_name: tier.to_string(),
        valid_until: None,
        created_at: "2024-01-01T00:00:00".to_string(),
    }
}

pub fn review(id: i64, status: TaskStatus, project: &str, developer: &str) -> Review {
    Review {
        id,
        project_id: id + 100,
        status,
        assigned_at: "2024-01-01T00:00:00".to_string(),
        started_at: None,
        completed_at: None,
        project_name: Some(project.to_string()),
        project_type: Some("REDD+".to_string()),
        developer_name: Some(developer.to_string()),
        details: ReviewDetails {
            registry_user_id: 9,
            review_notes: None,
            decision: None,
        },
    }
}

/// Server-paginated source backed by a shared vector, applying tier and
/// search filters the way the real endpoint does.
#[derive(Clone, Default)]
pub struct FakeSubscriptions {
    pub rows: Arc<Mutex<Vec<Subscription>>>,
    pub calls: Arc<AtomicUsize>,
    pub fail: Arc<AtomicBool>,
    pub seen: Arc<Mutex<Vec<FilterCriteria<TierCode>>>>,
}

impl FakeSubscriptions {
    pub fn with_rows(rows: Vec<Subscription>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DataSource for FakeSubscriptions {
    type Item = Subscription;

    fn label(&self) -> &'static str {
        "subscriptions"
    }

    fn mode(&self) -> FilterMode {
        FilterMode::ServerPaginated
    }

    async fn fetch_page(
        &self,
        criteria: &FilterCriteria<TierCode>,
    ) -> Result<PageResult<Subscription>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().push(criteria.clone());

        if self.fail.load(Ordering::SeqCst) {
            return Err(CredoError::Server {
                status: 500,
                body: "internal error".to_string(),
            });
        }

        let matching: Vec<Subscription> = self
            .rows
            .lock()
            .iter()
            .filter(|s| criteria.filter.matches(&s.tier) && matches_search(*s, &criteria.search))
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let start = ((criteria.page - 1) * criteria.page_size) as usize;
        let items = matching
            .into_iter()
            .skip(start)
            .take(criteria.page_size as usize)
            .collect();

        Ok(PageResult {
            items,
            total,
            total_pages: page_count(total, criteria.page_size),
        })
    }
}

/// Client-filtered source returning a fixed collection.
#[derive(Clone, Default)]
pub struct FakeReviews {
    pub rows: Arc<Mutex<Vec<Review>>>,
    pub calls: Arc<AtomicUsize>,
    pub fail: Arc<AtomicBool>,
}

impl FakeReviews {
    pub fn with_rows(rows: Vec<Review>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DataSource for FakeReviews {
    type Item = Review;

    fn label(&self) -> &'static str {
        "reviews"
    }

    fn mode(&self) -> FilterMode {
        FilterMode::ClientFiltered
    }

    async fn fetch_page(&self, _criteria: &FilterCriteria<TaskStatus>) -> Result<PageResult<Review>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(CredoError::Network("connection refused".to_string()));
        }
        Ok(PageResult::collection(self.rows.lock().clone()))
    }
}

/// Source whose responses are released by the test, one gate per page number.
#[derive(Clone, Default)]
pub struct GatedSubscriptions {
    gates: Arc<Mutex<HashMap<u32, oneshot::Receiver<PageResult<Subscription>>>>>,
}

impl GatedSubscriptions {
    /// Register a gate for `page`; sending on the returned half releases it.
    pub fn gate(&self, page: u32) -> oneshot::Sender<PageResult<Subscription>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().insert(page, rx);
        tx
    }
}

impl DataSource for GatedSubscriptions {
    type Item = Subscription;

    fn label(&self) -> &'static str {
        "subscriptions"
    }

    fn mode(&self) -> FilterMode {
        FilterMode::ServerPaginated
    }

    async fn fetch_page(
        &self,
        criteria: &FilterCriteria<TierCode>,
    ) -> Result<PageResult<Subscription>> {
        let gate = self.gates.lock().remove(&criteria.page);
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| CredoError::Network("gate dropped".to_string())),
            None => Err(CredoError::Network(format!("no gate for page {}", criteria.page))),
        }
    }
}

/// Tier assignment that writes into the rows a [`FakeSubscriptions`] serves.
#[derive(Clone, Default)]
pub struct FakeAssign {
    pub rows: Arc<Mutex<Vec<Subscription>>>,
    pub calls: Arc<AtomicUsize>,
    pub fail: Arc<AtomicBool>,
}

impl FakeAssign {
    pub fn for_source(source: &FakeSubscriptions) -> Self {
        Self {
            rows: Arc::clone(&source.rows),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Mutator for FakeAssign {
    type Item = Subscription;
    type Value = TierCode;

    fn action(&self) -> &'static str {
        "assign subscription"
    }

    fn current_value(&self, item: &Subscription) -> Option<TierCode> {
        Some(item.tier)
    }

    async fn mutate(&self, id: i64, value: &TierCode) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(CredoError::Server {
                status: 422,
                body: "tier not allowed".to_string(),
            });
        }
        let mut rows = self.rows.lock();
        match rows.iter_mut().find(|s| s.user_id == id) {
            Some(row) => {
                row.tier = *value;
                Ok(())
            }
            None => Err(CredoError::Server {
                status: 404,
                body: "user not found".to_string(),
            }),
        }
    }
}

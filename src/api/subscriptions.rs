//! Super-admin subscription endpoints: the paginated subscription list, the
//! tier catalog, and tier assignment.

use reqwest::Method;
use serde::Serialize;

use crate::entity::{Subscription, TierDefinition};
use crate::error::Result;
use crate::list::{FilterCriteria, FilterMode, PageResult};
use crate::types::TierCode;

use super::{ApiClient, Auth, DataSource, Mutator, check_page};

const SUBSCRIPTIONS_PATH: &str = "/admin/subscriptions";
const TIERS_PATH: &str = "/admin/tiers";

/// Server-paginated list of user subscriptions.
#[derive(Debug, Clone)]
pub struct SubscriptionSource {
    client: ApiClient,
}

impl SubscriptionSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Query parameters for one page. `tier` and `search` are left out when unset.
    pub fn query(criteria: &FilterCriteria<TierCode>) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", criteria.page.to_string()),
            ("page_size", criteria.page_size.to_string()),
        ];
        if let Some(tier) = criteria.filter.selected() {
            query.push(("tier", tier.to_string()));
        }
        if let Some(term) = criteria.search_term() {
            query.push(("search", term.to_string()));
        }
        query
    }
}

impl DataSource for SubscriptionSource {
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
        check_page(criteria)?;
        self.client
            .get_json(SUBSCRIPTIONS_PATH, &Self::query(criteria))
            .await
    }
}

/// The tier definitions shown as summary cards above the subscription list.
#[derive(Debug, Clone)]
pub struct TierCatalog {
    client: ApiClient,
}

impl TierCatalog {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<TierDefinition>> {
        self.client.get_json(TIERS_PATH, &[]).await
    }
}

#[derive(Debug, Serialize)]
struct AssignTierRequest {
    tier: TierCode,
}

/// Reassigns a user's subscription tier.
#[derive(Debug, Clone)]
pub struct AssignTier {
    client: ApiClient,
}

impl AssignTier {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Mutator for AssignTier {
    type Item = Subscription;
    type Value = TierCode;

    fn action(&self) -> &'static str {
        "assign subscription"
    }

    fn current_value(&self, item: &Subscription) -> Option<TierCode> {
        Some(item.tier)
    }

    async fn mutate(&self, id: i64, value: &TierCode) -> Result<()> {
        let path = format!("/admin/users/{id}/subscription");
        self.client
            .send_json(
                Method::PUT,
                &path,
                &AssignTierRequest { tier: *value },
                Auth::Bearer,
            )
            .await
    }
}

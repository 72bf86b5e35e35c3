use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, connect};
use crate::api::{SubscriptionSource, TierCatalog};
use crate::cli::OutputOptions;
use crate::display::{format_subscriptions, format_tier_cards, pagination_footer};
use crate::error::{CredoError, Result};
use crate::list::{FilterCriteria, ListView, LoadOutcome, StatusFilter};
use crate::types::{DEFAULT_PAGE_SIZE, TierCode};

/// Query options for `credo subscriptions`
#[derive(Debug, Clone)]
pub struct SubscriptionOptions {
    pub page: u32,
    pub page_size: u32,
    pub tier: Option<TierCode>,
    pub search: Option<String>,
}

impl Default for SubscriptionOptions {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            tier: None,
            search: None,
        }
    }
}

impl SubscriptionOptions {
    fn criteria(&self) -> FilterCriteria<TierCode> {
        FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            filter: StatusFilter::from(self.tier),
            page: self.page.max(1),
            page_size: self.page_size.max(1),
        }
    }
}

/// List user subscriptions, one server page at a time
pub async fn cmd_subscriptions(options: SubscriptionOptions, output: OutputOptions) -> Result<()> {
    let view = ListView::with_criteria(SubscriptionSource::new(connect()?), options.criteria());

    if view.refresh().await == LoadOutcome::Failed {
        let banner = view.snapshot().error.unwrap_or_default();
        return Err(CredoError::Failed(banner));
    }

    let store = view.snapshot();
    let rows = view.rows();

    let json_output = json!({
        "items": rows,
        "total": store.total,
        "page": store.criteria.page,
        "page_size": store.criteria.page_size,
        "total_pages": store.total_pages,
    });

    let mut text = String::new();
    if rows.is_empty() {
        text.push_str("No subscriptions found.");
    } else {
        text.push_str(&format_subscriptions(&rows));
        if let Some(footer) = pagination_footer(store.criteria.page, store.total_pages) {
            text.push_str(&format!("\n{}", footer.dimmed()));
        }
        text.push_str(&format!("\n{} subscription(s)", store.total));
    }

    CommandOutput::new(json_output).with_text(text).print(output)
}

/// Show the subscription tier catalog
pub async fn cmd_tiers(output: OutputOptions) -> Result<()> {
    let tiers = TierCatalog::new(connect()?).list().await?;

    let text = if tiers.is_empty() {
        "No subscription tiers defined.".to_string()
    } else {
        format_tier_cards(&tiers)
    };

    CommandOutput::new(json!(tiers)).with_text(text).print(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_clamp_page_and_size() {
        let options = SubscriptionOptions {
            page: 0,
            page_size: 0,
            tier: Some(TierCode::Pkg2),
            search: Some("acme".to_string()),
        };
        let criteria = options.criteria();
        assert_eq!(criteria.page, 1);
        assert_eq!(criteria.page_size, 1);
        assert_eq!(criteria.filter, StatusFilter::Only(TierCode::Pkg2));
        assert_eq!(criteria.search, "acme");
    }

    #[test]
    fn test_default_options_match_list_defaults() {
        assert_eq!(
            SubscriptionOptions::default().criteria(),
            FilterCriteria::default()
        );
    }
}

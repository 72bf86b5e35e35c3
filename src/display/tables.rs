use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::entity::{Subscription, Task, TaskDetails, TierDefinition};

use super::{format_date, format_status_colored, format_tier};

#[derive(Tabled)]
struct SubscriptionRow {
    #[tabled(rename = "User")]
    user_id: i64,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Valid Until")]
    valid_until: String,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Type")]
    project_type: String,
    #[tabled(rename = "Developer")]
    developer: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Assigned")]
    assigned: String,
}

#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Features")]
    features: u32,
    #[tabled(rename = "Description")]
    description: String,
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn format_subscriptions(subscriptions: &[Subscription]) -> String {
    let rows = subscriptions
        .iter()
        .map(|s| SubscriptionRow {
            user_id: s.user_id,
            email: s.user_email.clone(),
            name: s.user_name.clone().unwrap_or_else(|| "-".to_string()),
            role: s.role.clone(),
            tier: format_tier(s.tier),
            valid_until: s
                .valid_until
                .as_deref()
                .map(format_date)
                .unwrap_or("never")
                .to_string(),
        })
        .collect();
    render::<SubscriptionRow>(rows)
}

pub fn format_tasks<D: TaskDetails>(tasks: &[Task<D>]) -> String {
    let rows = tasks
        .iter()
        .map(|t| TaskRow {
            id: t.id,
            project: t
                .project_name
                .clone()
                .unwrap_or_else(|| format!("Project #{}", t.project_id)),
            project_type: t.project_type.clone().unwrap_or_else(|| "-".to_string()),
            developer: t.developer_name.clone().unwrap_or_else(|| "-".to_string()),
            status: format_status_colored(t.status, t.kind()),
            assigned: format_date(&t.assigned_at).to_string(),
        })
        .collect();
    render::<TaskRow>(rows)
}

/// The tier catalog, one row per package: short code, name, feature count.
pub fn format_tier_cards(tiers: &[TierDefinition]) -> String {
    let rows = tiers
        .iter()
        .map(|t| TierRow {
            code: match t.tier {
                crate::types::TierCode::PkgFull => format!("👑 {}", t.tier.short()),
                _ => t.tier.short().to_string(),
            },
            name: t.tier_name.clone(),
            features: t.feature_count,
            description: t.tier_description.clone(),
        })
        .collect();
    render::<TierRow>(rows)
}

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, connect};
use crate::api::{AssignTier, SubscriptionSource};
use crate::cli::OutputOptions;
use crate::error::{CredoError, Result};
use crate::list::{ListView, LoadOutcome, MutationOutcome, MutationTrigger};
use crate::types::TierCode;

/// Assign a subscription tier to a user, then reload the subscription list
pub async fn cmd_assign(user_id: i64, tier: TierCode, output: OutputOptions) -> Result<()> {
    let client = connect()?;
    let assign = AssignTier::new(client.clone());
    let view = ListView::new(SubscriptionSource::new(client));

    let mut trigger: MutationTrigger<AssignTier> = MutationTrigger::new();
    trigger.open_id(user_id, Some(tier));

    let refresh = match trigger.submit(&assign, &view).await {
        MutationOutcome::Applied { refresh } => refresh,
        MutationOutcome::Failed { alert } => return Err(CredoError::Failed(alert)),
        MutationOutcome::Skipped => return Ok(()),
    };

    // The change itself succeeded; a failed reload only costs the echo below.
    let confirmed = match refresh {
        LoadOutcome::Applied => view
            .rows()
            .into_iter()
            .find(|s| s.user_id == user_id)
            .map(|s| s.tier),
        LoadOutcome::Failed | LoadOutcome::Stale => None,
    };

    let json_output = json!({
        "action": "assign_subscription",
        "user_id": user_id,
        "tier": tier,
        "success": true,
    });

    let mut text = format!("Assigned {} to user {}", tier.to_string().cyan(), user_id);
    if let Some(current) = confirmed {
        text.push_str(&format!(" (now {current})"));
    }

    CommandOutput::new(json_output).with_text(text).print(output)
}

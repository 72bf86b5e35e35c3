//! Mutation trigger: edit one field of one entity, then resynchronize the list.
//!
//! ```text
//! Idle -> Editing (entity selected) -> Saving -> Idle     (success, list refreshed)
//!                                            -> Editing  (failure, alert shown)
//! ```

use crate::api::{DataSource, Mutator};
use crate::entity::ListItem;

use super::store::LoadOutcome;
use super::view::ListView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationState<V> {
    Idle,
    Editing { target_id: i64, value: Option<V> },
    Saving { target_id: i64, value: V },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Nothing to submit; no request was made.
    Skipped,
    /// The change was accepted and the list re-fetched with current criteria.
    Applied { refresh: LoadOutcome },
    /// The change was rejected; the editor stays open for another try.
    Failed { alert: String },
}

/// Reverts `Saving` to `Editing` when dropped, so no exit path can leave
/// the trigger stuck in `Saving`.
struct SavingGuard<'a, V> {
    state: &'a mut MutationState<V>,
}

impl<V> Drop for SavingGuard<'_, V> {
    fn drop(&mut self) {
        let state = std::mem::replace(self.state, MutationState::Idle);
        *self.state = match state {
            MutationState::Saving { target_id, value } => MutationState::Editing {
                target_id,
                value: Some(value),
            },
            other => other,
        };
    }
}

pub struct MutationTrigger<M: Mutator> {
    state: MutationState<M::Value>,
    alert: Option<String>,
}

impl<M: Mutator> Default for MutationTrigger<M> {
    fn default() -> Self {
        Self {
            state: MutationState::Idle,
            alert: None,
        }
    }
}

impl<M: Mutator> MutationTrigger<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MutationState<M::Value> {
        &self.state
    }

    /// Alert from the last failed submit, cleared when editing restarts.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.state, MutationState::Saving { .. })
    }

    /// Start editing `item`, preselecting its current value.
    pub fn open(&mut self, mutator: &M, item: &M::Item) {
        self.open_id(item.id(), mutator.current_value(item));
    }

    /// Start editing by id when only the identifier is known.
    pub fn open_id(&mut self, target_id: i64, value: Option<M::Value>) {
        if self.is_saving() {
            return;
        }
        self.state = MutationState::Editing { target_id, value };
        self.alert = None;
    }

    /// Pick the new value. Ignored outside `Editing`.
    pub fn select(&mut self, new_value: Option<M::Value>) {
        if let MutationState::Editing { value, .. } = &mut self.state {
            *value = new_value;
        }
    }

    /// Close the editor without saving. Ignored while saving.
    pub fn cancel(&mut self) {
        if let MutationState::Editing { .. } = self.state {
            self.state = MutationState::Idle;
            self.alert = None;
        }
    }

    /// True when a target and a value are both selected and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            MutationState::Editing {
                value: Some(_),
                ..
            }
        )
    }

    /// Apply the selected value and refresh `view` with its current criteria.
    pub async fn submit<S>(&mut self, mutator: &M, view: &ListView<S>) -> MutationOutcome
    where
        S: DataSource<Item = M::Item>,
    {
        let (target_id, value) = match &self.state {
            MutationState::Editing {
                target_id,
                value: Some(value),
            } => (*target_id, value.clone()),
            MutationState::Idle
            | MutationState::Editing { value: None, .. }
            | MutationState::Saving { .. } => return MutationOutcome::Skipped,
        };

        self.state = MutationState::Saving {
            target_id,
            value: value.clone(),
        };
        let guard = SavingGuard {
            state: &mut self.state,
        };

        match mutator.mutate(target_id, &value).await {
            Ok(()) => {
                *guard.state = MutationState::Idle;
                drop(guard);
                self.alert = None;
                let refresh = view.refresh().await;
                MutationOutcome::Applied { refresh }
            }
            Err(e) => {
                drop(guard);
                tracing::warn!("failed to {} for {target_id}: {e}", mutator.action());
                let alert = format!("Failed to {}. Please try again.", mutator.action());
                self.alert = Some(alert.clone());
                MutationOutcome::Failed { alert }
            }
        }
    }
}

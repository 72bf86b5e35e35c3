pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod entity;
pub mod error;
pub mod list;
pub mod stats;
pub mod types;

#[cfg(test)]
pub(crate) mod test_guards;

pub use api::{
    ApiClient, AssignTier, CollectionSource, CredentialSource, DataSource, Mutator,
    PasswordReset, ResetOutcome, SubscriptionSource, TierCatalog,
};
pub use config::Config;
pub use entity::{
    ListItem, Review, Subscription, Task, TierDefinition, ValidationTask, VerificationTask,
};
pub use error::{CredoError, Result};
pub use list::{
    FilterCriteria, FilterMode, ListStore, ListView, LoadOutcome, MutationOutcome,
    MutationTrigger, PageResult, StatusFilter,
};
pub use types::{TaskKind, TaskStatus, TierCode};

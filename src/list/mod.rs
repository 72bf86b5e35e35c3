//! Remote list views: fetch, filter, paginate, mutate.
//!
//! A [`ListView`] pairs one [`DataSource`](crate::api::DataSource) with a
//! [`ListStore`]. The engine functions are pure transforms over the stored
//! page; only fetching and mutating suspend.

pub mod criteria;
pub mod engine;
pub mod mutation;
pub mod store;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use criteria::{CriteriaPatch, FilterCriteria, StatusFilter};
pub use engine::{FilterMode, PageResult, apply_client_filter, matches_search, page_count};
pub use mutation::{MutationOutcome, MutationState, MutationTrigger};
pub use store::{ListStore, LoadOutcome, LoadTicket};
pub use view::ListView;

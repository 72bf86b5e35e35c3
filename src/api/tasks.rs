//! Registry review and VVB task collections.
//!
//! These endpoints return the whole collection as a bare JSON array; search
//! and status filtering happen client-side.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::entity::{ListItem, Review, ValidationTask, VerificationTask};
use crate::error::Result;
use crate::list::{FilterCriteria, FilterMode, PageResult};
use crate::types::TaskKind;

use super::{ApiClient, DataSource, check_page};

/// An unpaginated collection endpoint.
#[derive(Debug, Clone)]
pub struct CollectionSource<T> {
    client: ApiClient,
    path: &'static str,
    label: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> CollectionSource<T> {
    fn new(client: ApiClient, path: &'static str, kind: TaskKind) -> Self {
        Self {
            client,
            path,
            label: kind.label(),
            _item: PhantomData,
        }
    }
}

impl CollectionSource<Review> {
    pub fn reviews(client: ApiClient) -> Self {
        Self::new(client, "/api/registry/reviews", TaskKind::Review)
    }
}

impl CollectionSource<ValidationTask> {
    pub fn validations(client: ApiClient) -> Self {
        Self::new(client, "/api/vvb/validations", TaskKind::Validation)
    }
}

impl CollectionSource<VerificationTask> {
    pub fn verifications(client: ApiClient) -> Self {
        Self::new(client, "/api/vvb/verifications", TaskKind::Verification)
    }
}

impl<T> DataSource for CollectionSource<T>
where
    T: ListItem + DeserializeOwned,
{
    type Item = T;

    fn label(&self) -> &'static str {
        self.label
    }

    fn mode(&self) -> FilterMode {
        FilterMode::ClientFiltered
    }

    async fn fetch_page(&self, criteria: &FilterCriteria<T::Status>) -> Result<PageResult<T>> {
        check_page(criteria)?;
        let items: Vec<T> = self.client.get_json(self.path, &[]).await?;
        Ok(PageResult::collection(items))
    }
}

//! Test support: an in-memory stand-in for the Postgres repositories.

use crate::{
    abstract_trait::payment_detail::repository::{
        command::PaymentDetailCommandRepositoryTrait, query::PaymentDetailQueryRepositoryTrait,
    },
    domain::requests::PaymentDetailRequest,
    errors::RepositoryError,
    model::PaymentDetailModel,
    utils::mask_card_number,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Map-backed repository with the same contract as the Postgres one:
/// card numbers are masked on the way in, absence is `None`/`false`,
/// and ids are assigned sequentially starting at 1.
#[derive(Default)]
pub struct InMemoryPaymentDetailRepository {
    state: Mutex<InMemoryState>,
}

#[derive(Default)]
struct InMemoryState {
    rows: BTreeMap<i32, PaymentDetailModel>,
    next_id: i32,
}

impl InMemoryPaymentDetailRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, for asserting that an operation wrote
    /// nothing.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PaymentDetailQueryRepositoryTrait for InMemoryPaymentDetailRepository {
    async fn find_all(&self) -> Result<Vec<PaymentDetailModel>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PaymentDetailModel>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.get(&id).cloned())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.contains_key(&id))
    }
}

#[async_trait]
impl PaymentDetailCommandRepositoryTrait for InMemoryPaymentDetailRepository {
    async fn create(
        &self,
        request: &PaymentDetailRequest,
    ) -> Result<PaymentDetailModel, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;

        let detail = PaymentDetailModel {
            payment_detail_id: id,
            card_owner_name: request.card_owner_name.clone(),
            card_number: mask_card_number(&request.card_number),
            expiration_date: request.expiration_date.clone(),
            cvc: request.cvc.clone(),
        };

        state.rows.insert(id, detail.clone());
        Ok(detail)
    }

    async fn update(
        &self,
        id: i32,
        request: &PaymentDetailRequest,
    ) -> Result<Option<PaymentDetailModel>, RepositoryError> {
        let mut state = self.state.lock().unwrap();

        if !state.rows.contains_key(&id) {
            return Ok(None);
        }

        let detail = PaymentDetailModel {
            payment_detail_id: id,
            card_owner_name: request.card_owner_name.clone(),
            card_number: mask_card_number(&request.card_number),
            expiration_date: request.expiration_date.clone(),
            cvc: request.cvc.clone(),
        };

        state.rows.insert(id, detail.clone());
        Ok(Some(detail))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.remove(&id).is_some())
    }
}

use crate::{
    domain::requests::PaymentDetailRequest, errors::RepositoryError, model::PaymentDetailModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentDetailCommandRepository =
    Arc<dyn PaymentDetailCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PaymentDetailCommandRepositoryTrait {
    async fn create(
        &self,
        request: &PaymentDetailRequest,
    ) -> Result<PaymentDetailModel, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        request: &PaymentDetailRequest,
    ) -> Result<Option<PaymentDetailModel>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

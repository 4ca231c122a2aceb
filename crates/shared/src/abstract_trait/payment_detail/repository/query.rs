use crate::{errors::RepositoryError, model::PaymentDetailModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentDetailQueryRepository =
    Arc<dyn PaymentDetailQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PaymentDetailQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<PaymentDetailModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<PaymentDetailModel>, RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

use crate::{domain::responses::PaymentDetailResponse, errors::ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentDetailQueryService = Arc<dyn PaymentDetailQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait PaymentDetailQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<PaymentDetailResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<PaymentDetailResponse, ServiceError>;
}

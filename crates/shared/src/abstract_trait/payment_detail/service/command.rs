use crate::{
    domain::{requests::PaymentDetailRequest, responses::PaymentDetailResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentDetailCommandService = Arc<dyn PaymentDetailCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait PaymentDetailCommandServiceTrait {
    async fn create(
        &self,
        request: &PaymentDetailRequest,
    ) -> Result<PaymentDetailResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        request: &PaymentDetailRequest,
    ) -> Result<PaymentDetailResponse, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

use crate::{
    abstract_trait::payment_detail::{
        repository::query::DynPaymentDetailQueryRepository,
        service::query::PaymentDetailQueryServiceTrait,
    },
    domain::responses::PaymentDetailResponse,
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct PaymentDetailQueryService {
    query: DynPaymentDetailQueryRepository,
}

impl PaymentDetailQueryService {
    pub fn new(query: DynPaymentDetailQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl PaymentDetailQueryServiceTrait for PaymentDetailQueryService {
    async fn find_all(&self) -> Result<Vec<PaymentDetailResponse>, ServiceError> {
        info!("📋 Fetching all payment details");

        let details = self.query.find_all().await.map_err(|e| {
            error!("💥 Failed to fetch payment details: {e:?}");
            ServiceError::from(e)
        })?;

        Ok(details
            .into_iter()
            .map(PaymentDetailResponse::from)
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<PaymentDetailResponse, ServiceError> {
        info!("🔍 Fetching payment detail id={id}");

        let detail = self.query.find_by_id(id).await.map_err(|e| {
            error!("💥 Failed to fetch payment detail id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        detail
            .map(PaymentDetailResponse::from)
            .ok_or_else(|| ServiceError::NotFound(format!("payment detail id={id} not found")))
    }
}

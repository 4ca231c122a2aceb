use crate::{
    abstract_trait::payment_detail::{
        repository::command::DynPaymentDetailCommandRepository,
        service::command::PaymentDetailCommandServiceTrait,
    },
    domain::{requests::PaymentDetailRequest, responses::PaymentDetailResponse},
    errors::{ServiceError, validation_error_map},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct PaymentDetailCommandService {
    command: DynPaymentDetailCommandRepository,
}

impl PaymentDetailCommandService {
    pub fn new(command: DynPaymentDetailCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl PaymentDetailCommandServiceTrait for PaymentDetailCommandService {
    async fn create(
        &self,
        request: &PaymentDetailRequest,
    ) -> Result<PaymentDetailResponse, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let field_errors = validation_error_map(&validation_errors);
            warn!("📝 Rejected payment detail create: {field_errors:?}");
            return Err(ServiceError::Validation(field_errors));
        }

        info!("🆕 Creating payment detail for {}", request.card_owner_name);

        let detail = self.command.create(request).await.map_err(|e| {
            error!("💥 Failed to create payment detail: {e:?}");
            ServiceError::from(e)
        })?;

        let response = PaymentDetailResponse::from(detail);

        info!(
            "✅ Payment detail created with id={}",
            response.payment_details_id
        );

        Ok(response)
    }

    async fn update(
        &self,
        id: i32,
        request: &PaymentDetailRequest,
    ) -> Result<PaymentDetailResponse, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let field_errors = validation_error_map(&validation_errors);
            warn!("📝 Rejected payment detail update id={id}: {field_errors:?}");
            return Err(ServiceError::Validation(field_errors));
        }

        info!("🔄 Updating payment detail id={id}");

        let updated = self.command.update(id, request).await.map_err(|e| {
            error!("💥 Failed to update payment detail id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        let detail = updated
            .ok_or_else(|| ServiceError::NotFound(format!("payment detail id={id} not found")))?;

        info!("✅ Payment detail updated with id={id}");

        Ok(PaymentDetailResponse::from(detail))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting payment detail id={id}");

        let removed = self.command.delete(id).await.map_err(|e| {
            error!("💥 Failed to delete payment detail id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        if !removed {
            return Err(ServiceError::NotFound(format!(
                "payment detail id={id} not found"
            )));
        }

        info!("✅ Payment detail deleted with id={id}");

        Ok(())
    }
}

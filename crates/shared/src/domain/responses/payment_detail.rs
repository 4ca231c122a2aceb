use crate::model::PaymentDetailModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct PaymentDetailResponse {
    #[serde(rename = "paymentDetailsID")]
    pub payment_details_id: i32,
    #[serde(rename = "cardOwnerName")]
    pub card_owner_name: String,
    #[serde(rename = "cardNumber")]
    pub card_number: String,
    #[serde(rename = "expirationDate")]
    pub expiration_date: String,
    pub cvc: String,
}

// model to response
impl From<PaymentDetailModel> for PaymentDetailResponse {
    fn from(value: PaymentDetailModel) -> Self {
        PaymentDetailResponse {
            payment_details_id: value.payment_detail_id,
            card_owner_name: value.card_owner_name,
            card_number: value.card_number,
            expiration_date: value.expiration_date,
            cvc: value.cvc,
        }
    }
}

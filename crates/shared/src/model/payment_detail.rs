use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored payment card record. The card number is always the masked
/// form; the raw number never reaches the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PaymentDetailModel {
    pub payment_detail_id: i32,
    pub card_owner_name: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvc: String,
}

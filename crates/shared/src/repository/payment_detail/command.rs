use crate::{
    abstract_trait::payment_detail::repository::command::PaymentDetailCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::PaymentDetailRequest, errors::RepositoryError,
    model::PaymentDetailModel, utils::mask_card_number,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct PaymentDetailCommandRepository {
    db: ConnectionPool,
}

impl PaymentDetailCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl PaymentDetailCommandRepositoryTrait for PaymentDetailCommandRepository {
    async fn create(
        &self,
        request: &PaymentDetailRequest,
    ) -> Result<PaymentDetailModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let masked_number = mask_card_number(&request.card_number);

        let detail = sqlx::query_as::<_, PaymentDetailModel>(
            r#"
            INSERT INTO payment_details (card_owner_name, card_number, expiration_date, cvc)
            VALUES ($1, $2, $3, $4)
            RETURNING payment_detail_id, card_owner_name, card_number, expiration_date, cvc
            "#,
        )
        .bind(&request.card_owner_name)
        .bind(&masked_number)
        .bind(&request.expiration_date)
        .bind(&request.cvc)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert payment detail: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(detail)
    }

    async fn update(
        &self,
        id: i32,
        request: &PaymentDetailRequest,
    ) -> Result<Option<PaymentDetailModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let existing = sqlx::query_scalar::<_, i32>(
            "SELECT payment_detail_id FROM payment_details WHERE payment_detail_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to look up payment detail {id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        if existing.is_none() {
            return Ok(None);
        }

        let masked_number = mask_card_number(&request.card_number);

        let updated = sqlx::query_as::<_, PaymentDetailModel>(
            r#"
            UPDATE payment_details
            SET card_owner_name = $2,
                card_number = $3,
                expiration_date = $4,
                cvc = $5
            WHERE payment_detail_id = $1
            RETURNING payment_detail_id, card_owner_name, card_number, expiration_date, cvc
            "#,
        )
        .bind(id)
        .bind(&request.card_owner_name)
        .bind(&masked_number)
        .bind(&request.expiration_date)
        .bind(&request.cvc)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update payment detail {id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        // the row existed at the SELECT above; losing it here means a
        // concurrent writer removed it mid-update
        match updated {
            Some(detail) => Ok(Some(detail)),
            None => Err(RepositoryError::Conflict(format!(
                "payment detail {id} was modified concurrently"
            ))),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM payment_details WHERE payment_detail_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete payment detail {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

use crate::{
    abstract_trait::payment_detail::repository::query::PaymentDetailQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::PaymentDetailModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct PaymentDetailQueryRepository {
    db: ConnectionPool,
}

impl PaymentDetailQueryRepository {
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
impl PaymentDetailQueryRepositoryTrait for PaymentDetailQueryRepository {
    async fn find_all(&self) -> Result<Vec<PaymentDetailModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let details = sqlx::query_as::<_, PaymentDetailModel>(
            r#"
            SELECT payment_detail_id, card_owner_name, card_number, expiration_date, cvc
            FROM payment_details
            ORDER BY payment_detail_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch payment details: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(details)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PaymentDetailModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let detail = sqlx::query_as::<_, PaymentDetailModel>(
            r#"
            SELECT payment_detail_id, card_owner_name, card_number, expiration_date, cvc
            FROM payment_details
            WHERE payment_detail_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch payment detail {id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(detail)
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM payment_details WHERE payment_detail_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to check payment detail {id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(exists)
    }
}

//! PostgreSQL implementation of TransactionRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::error::{db_error, ensure_updated, parse_column};
use crate::domain::foundation::{
    CompanyProfile, DomainError, ErrorCode, PackageId, PaymentMethodId, Timestamp, TransactionId,
    UserId,
};
use crate::domain::transaction::{SubscriptionTransaction, TransactionStatus};
use crate::ports::TransactionRepository;

pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a transaction. A NULL `user_id` is a guest.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    user_id: Option<Uuid>,
    user_email: String,
    user_name: String,
    package_id: Uuid,
    package_name: String,
    amount: i64,
    payment_method_id: Uuid,
    payment_method_name: String,
    payment_proof: Option<String>,
    company_data: Option<Json<CompanyProfile>>,
    status: String,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl TryFrom<TransactionRow> for SubscriptionTransaction {
    type Error = DomainError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(SubscriptionTransaction {
            id: TransactionId::from_uuid(row.id),
            user_id: row.user_id.map(UserId::from_uuid),
            user_email: row.user_email,
            user_name: row.user_name,
            package_id: PackageId::from_uuid(row.package_id),
            package_name: row.package_name,
            amount: row.amount,
            payment_method_id: PaymentMethodId::from_uuid(row.payment_method_id),
            payment_method_name: row.payment_method_name,
            payment_proof: row.payment_proof,
            company: row.company_data.map(|Json(c)| c),
            status: parse_column("status", &row.status, TransactionStatus::parse)?,
            created_at: Timestamp::from_datetime(row.created_at),
            completed_at: row.completed_at.map(Timestamp::from_datetime),
        })
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn save(&self, tx: &SubscriptionTransaction) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO subscription_transactions (
                id, user_id, user_email, user_name, package_id, package_name, amount,
                payment_method_id, payment_method_name, payment_proof, company_data,
                status, created_at, completed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(tx.id.as_uuid())
        .bind(tx.user_id.map(|u| *u.as_uuid()))
        .bind(&tx.user_email)
        .bind(&tx.user_name)
        .bind(tx.package_id.as_uuid())
        .bind(&tx.package_name)
        .bind(tx.amount)
        .bind(tx.payment_method_id.as_uuid())
        .bind(&tx.payment_method_name)
        .bind(&tx.payment_proof)
        .bind(tx.company.as_ref().map(Json))
        .bind(tx.status.as_str())
        .bind(tx.created_at.as_datetime())
        .bind(tx.completed_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("save transaction", e))?;
        Ok(())
    }

    async fn update(&self, tx: &SubscriptionTransaction) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscription_transactions SET
                payment_proof = $2,
                company_data = $3,
                status = $4,
                completed_at = $5
            WHERE id = $1
            "#,
        )
        .bind(tx.id.as_uuid())
        .bind(&tx.payment_proof)
        .bind(tx.company.as_ref().map(Json))
        .bind(tx.status.as_str())
        .bind(tx.completed_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update transaction", e))?;

        ensure_updated(
            result.rows_affected(),
            ErrorCode::TransactionNotFound,
            "Transaction not found",
        )
    }

    async fn find_by_id(
        &self,
        id: &TransactionId,
    ) -> Result<Option<SubscriptionTransaction>, DomainError> {
        let row: Option<TransactionRow> =
            sqlx::query_as("SELECT * FROM subscription_transactions WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("load transaction", e))?;
        row.map(SubscriptionTransaction::try_from).transpose()
    }

    async fn list(
        &self,
        status: Option<TransactionStatus>,
    ) -> Result<Vec<SubscriptionTransaction>, DomainError> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"
            SELECT * FROM subscription_transactions
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list transactions", e))?;
        rows.into_iter()
            .map(SubscriptionTransaction::try_from)
            .collect()
    }

    async fn delete(&self, id: &TransactionId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM subscription_transactions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete transaction", e))?;
        Ok(())
    }
}

//! PostgreSQL implementations of PackageRepository and PaymentMethodRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::error::{db_error, ensure_updated, parse_column};
use crate::domain::catalog::{
    DurationType, FeeType, PaymentMethod, PaymentMethodType, SubscriptionPackage,
};
use crate::domain::foundation::{DomainError, ErrorCode, PackageId, PaymentMethodId, Timestamp};
use crate::ports::{PackageRepository, PaymentMethodRepository};

// ════════════════════════════════════════════════════════════════════════════════
// Packages
// ════════════════════════════════════════════════════════════════════════════════

pub struct PostgresPackageRepository {
    pool: PgPool,
}

impl PostgresPackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PackageRow {
    id: Uuid,
    name: String,
    description: String,
    price: i64,
    duration: i32,
    duration_type: String,
    features: Vec<String>,
    is_active: bool,
    is_recommended: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PackageRow> for SubscriptionPackage {
    type Error = DomainError;

    fn try_from(row: PackageRow) -> Result<Self, Self::Error> {
        Ok(SubscriptionPackage {
            id: PackageId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            duration: row.duration,
            duration_type: parse_column("duration_type", &row.duration_type, DurationType::parse)?,
            features: row.features,
            is_active: row.is_active,
            is_recommended: row.is_recommended,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl PackageRepository for PostgresPackageRepository {
    async fn save(&self, package: &SubscriptionPackage) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO subscription_packages (
                id, name, description, price, duration, duration_type, features,
                is_active, is_recommended, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(package.id.as_uuid())
        .bind(&package.name)
        .bind(&package.description)
        .bind(package.price)
        .bind(package.duration)
        .bind(package.duration_type.as_str())
        .bind(&package.features)
        .bind(package.is_active)
        .bind(package.is_recommended)
        .bind(package.created_at.as_datetime())
        .bind(package.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("save package", e))?;
        Ok(())
    }

    async fn update(&self, package: &SubscriptionPackage) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscription_packages SET
                name = $2,
                description = $3,
                price = $4,
                duration = $5,
                duration_type = $6,
                features = $7,
                is_active = $8,
                is_recommended = $9,
                updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(package.id.as_uuid())
        .bind(&package.name)
        .bind(&package.description)
        .bind(package.price)
        .bind(package.duration)
        .bind(package.duration_type.as_str())
        .bind(&package.features)
        .bind(package.is_active)
        .bind(package.is_recommended)
        .bind(package.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update package", e))?;

        ensure_updated(result.rows_affected(), ErrorCode::PackageNotFound, "Package not found")
    }

    async fn find_by_id(&self, id: &PackageId) -> Result<Option<SubscriptionPackage>, DomainError> {
        let row: Option<PackageRow> =
            sqlx::query_as("SELECT * FROM subscription_packages WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("load package", e))?;
        row.map(SubscriptionPackage::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<SubscriptionPackage>, DomainError> {
        let rows: Vec<PackageRow> =
            sqlx::query_as("SELECT * FROM subscription_packages ORDER BY price ASC, name ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("list packages", e))?;
        rows.into_iter().map(SubscriptionPackage::try_from).collect()
    }

    async fn delete(&self, id: &PackageId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM subscription_packages WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete package", e))?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Payment methods
// ════════════════════════════════════════════════════════════════════════════════

pub struct PostgresPaymentMethodRepository {
    pool: PgPool,
}

impl PostgresPaymentMethodRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentMethodRow {
    id: Uuid,
    name: String,
    description: String,
    method_type: String,
    account_name: String,
    account_number: String,
    logo_url: String,
    fee: f64,
    fee_type: String,
    instructions: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PaymentMethodRow> for PaymentMethod {
    type Error = DomainError;

    fn try_from(row: PaymentMethodRow) -> Result<Self, Self::Error> {
        Ok(PaymentMethod {
            id: PaymentMethodId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            method_type: parse_column("method_type", &row.method_type, PaymentMethodType::parse)?,
            account_name: row.account_name,
            account_number: row.account_number,
            logo_url: row.logo_url,
            fee: row.fee,
            fee_type: parse_column("fee_type", &row.fee_type, FeeType::parse)?,
            instructions: row.instructions,
            is_active: row.is_active,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl PaymentMethodRepository for PostgresPaymentMethodRepository {
    async fn save(&self, method: &PaymentMethod) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payment_methods (
                id, name, description, method_type, account_name, account_number,
                logo_url, fee, fee_type, instructions, is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(method.id.as_uuid())
        .bind(&method.name)
        .bind(&method.description)
        .bind(method.method_type.as_str())
        .bind(&method.account_name)
        .bind(&method.account_number)
        .bind(&method.logo_url)
        .bind(method.fee)
        .bind(method.fee_type.as_str())
        .bind(&method.instructions)
        .bind(method.is_active)
        .bind(method.created_at.as_datetime())
        .bind(method.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("save payment method", e))?;
        Ok(())
    }

    async fn update(&self, method: &PaymentMethod) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE payment_methods SET
                name = $2,
                description = $3,
                method_type = $4,
                account_name = $5,
                account_number = $6,
                logo_url = $7,
                fee = $8,
                fee_type = $9,
                instructions = $10,
                is_active = $11,
                updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(method.id.as_uuid())
        .bind(&method.name)
        .bind(&method.description)
        .bind(method.method_type.as_str())
        .bind(&method.account_name)
        .bind(&method.account_number)
        .bind(&method.logo_url)
        .bind(method.fee)
        .bind(method.fee_type.as_str())
        .bind(&method.instructions)
        .bind(method.is_active)
        .bind(method.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update payment method", e))?;

        ensure_updated(
            result.rows_affected(),
            ErrorCode::PaymentMethodNotFound,
            "Payment method not found",
        )
    }

    async fn find_by_id(&self, id: &PaymentMethodId) -> Result<Option<PaymentMethod>, DomainError> {
        let row: Option<PaymentMethodRow> =
            sqlx::query_as("SELECT * FROM payment_methods WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("load payment method", e))?;
        row.map(PaymentMethod::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<PaymentMethod>, DomainError> {
        let rows: Vec<PaymentMethodRow> =
            sqlx::query_as("SELECT * FROM payment_methods ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("list payment methods", e))?;
        rows.into_iter().map(PaymentMethod::try_from).collect()
    }

    async fn delete(&self, id: &PaymentMethodId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM payment_methods WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete payment method", e))?;
        Ok(())
    }
}

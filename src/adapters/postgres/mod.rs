//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! One repository per collection:
//! - `PostgresUserRepository` - accounts, OTPs, reset tokens
//! - `PostgresPackageRepository` / `PostgresPaymentMethodRepository` - catalog
//! - `PostgresTransactionRepository` - subscription purchases
//! - `PostgresBlogPostRepository` - content
//!
//! A query against a table that does not exist yet surfaces as
//! `ErrorCode::StoreNotReady` so callers can answer 503 instead of 500.

mod blog_post_repository;
mod catalog_repository;
mod error;
mod transaction_repository;
mod user_repository;

pub use blog_post_repository::PostgresBlogPostRepository;
pub use catalog_repository::{PostgresPackageRepository, PostgresPaymentMethodRepository};
pub use error::STORE_NOT_READY_MESSAGE;
pub use transaction_repository::PostgresTransactionRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Opens a connection pool sized from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .max_lifetime(Some(config.max_lifetime()))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "connected to postgres"
    );
    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}

//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::error::{db_error, ensure_updated, is_unique_violation};
use crate::domain::foundation::{CompanyProfile, DomainError, ErrorCode, Role, Timestamp, UserId};
use crate::domain::user::{AccountError, OneTimeCode, ResetToken, User};
use crate::ports::UserRepository;

const USER_COLUMNS: &str = r#"
    id, fullname, email, phone, password_hash, is_verified,
    otp_code, otp_expires_at, reset_token_hash, reset_token_expires_at,
    role, company_data, created_at, updated_at
"#;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(
        &self,
        clause: &str,
        value: &str,
        action: &str,
    ) -> Result<Option<User>, DomainError> {
        let sql = format!(
            "SELECT {} FROM users WHERE {} ORDER BY created_at ASC LIMIT 1",
            USER_COLUMNS, clause
        );
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(action, e))?;
        Ok(row.map(User::from))
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    fullname: String,
    email: String,
    phone: String,
    password_hash: String,
    is_verified: bool,
    otp_code: Option<String>,
    otp_expires_at: Option<DateTime<Utc>>,
    reset_token_hash: Option<String>,
    reset_token_expires_at: Option<DateTime<Utc>>,
    role: String,
    company_data: Option<Json<CompanyProfile>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let otp = match (row.otp_code, row.otp_expires_at) {
            (Some(code), Some(expires)) => Some(OneTimeCode {
                code,
                expires_at: Timestamp::from_datetime(expires),
            }),
            _ => None,
        };
        let reset_token = match (row.reset_token_hash, row.reset_token_expires_at) {
            (Some(token_hash), Some(expires)) => Some(ResetToken {
                token_hash,
                expires_at: Timestamp::from_datetime(expires),
            }),
            _ => None,
        };

        User {
            id: UserId::from_uuid(row.id),
            fullname: row.fullname,
            email: row.email,
            phone: row.phone,
            password_hash: row.password_hash,
            is_verified: row.is_verified,
            otp,
            reset_token,
            // Unknown roles survive as `Unknown` and never gain access.
            role: Role::parse(&row.role),
            company: row.company_data.map(|Json(c)| c),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, fullname, email, phone, password_hash, is_verified,
                otp_code, otp_expires_at, reset_token_hash, reset_token_expires_at,
                role, company_data, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.fullname)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.is_verified)
        .bind(user.otp.as_ref().map(|o| o.code.clone()))
        .bind(user.otp.as_ref().map(|o| *o.expires_at.as_datetime()))
        .bind(user.reset_token.as_ref().map(|t| t.token_hash.clone()))
        .bind(user.reset_token.as_ref().map(|t| *t.expires_at.as_datetime()))
        .bind(user.role.as_str())
        .bind(user.company.as_ref().map(Json))
        .bind(user.created_at.as_datetime())
        .bind(user.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "users_email_key") {
                return AccountError::EmailTaken(user.email.clone()).into();
            }
            db_error("save user", e)
        })?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                fullname = $2,
                email = $3,
                phone = $4,
                password_hash = $5,
                is_verified = $6,
                otp_code = $7,
                otp_expires_at = $8,
                reset_token_hash = $9,
                reset_token_expires_at = $10,
                role = $11,
                company_data = $12,
                updated_at = $13
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.fullname)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.is_verified)
        .bind(user.otp.as_ref().map(|o| o.code.clone()))
        .bind(user.otp.as_ref().map(|o| *o.expires_at.as_datetime()))
        .bind(user.reset_token.as_ref().map(|t| t.token_hash.clone()))
        .bind(user.reset_token.as_ref().map(|t| *t.expires_at.as_datetime()))
        .bind(user.role.as_str())
        .bind(user.company.as_ref().map(Json))
        .bind(user.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update user", e))?;

        ensure_updated(result.rows_affected(), ErrorCode::UserNotFound, "User not found")
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("load user", e))?;
        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_where("email = $1", email, "load user by email")
            .await
    }

    async fn find_by_name(&self, fullname: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_where("fullname = $1", fullname, "load user by name")
            .await
    }

    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, DomainError> {
        self.fetch_one_where("reset_token_hash = $1", token_hash, "load user by reset token")
            .await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let sql = format!("SELECT {} FROM users ORDER BY created_at ASC", USER_COLUMNS);
        let rows: Vec<UserRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list users", e))?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete user", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete user", e))?;
        Ok(())
    }
}

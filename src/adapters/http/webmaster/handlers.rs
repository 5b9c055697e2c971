//! HTTP handlers for the admin console (`/api/webmaster`).
//!
//! Every handler requires an admin session.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

use super::dto::{
    IdQuery, IdRequest, StatusQuery, TransactionActionRequest, UpdateBlogPostRequest,
    UpdatePackageRequest, UpdatePaymentMethodRequest,
};
use crate::adapters::http::error::{ApiError, ApiJson, ApiSuccess};
use crate::adapters::http::middleware::RequireAdmin;
use crate::adapters::http::state::AppState;
use crate::application::handlers::UpdateTransactionStatusCommand;
use crate::domain::blog::NewBlogPost;
use crate::domain::catalog::{NewPackage, NewPaymentMethod};
use crate::domain::foundation::{
    BlogPostId, PackageId, PaymentMethodId, TransactionId, UserId, ValidationError,
};
use crate::domain::transaction::TransactionStatus;

/// Rejects a missing or blank id before parsing it.
fn required_id(raw: Option<String>) -> Result<String, ApiError> {
    raw.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("id is required"))
}

/// Resolves the id of a delete request. An id that does not parse names no
/// stored record, so the delete is a successful no-op.
fn deletable_id<T>(
    raw: Option<String>,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ApiError> {
    let raw = required_id(raw)?;
    match parse(&raw) {
        Ok(id) => Ok(Some(id)),
        Err(err) => {
            tracing::debug!(id = %raw, error = %err, "delete skipped for unparseable id");
            Ok(None)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Clients
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/webmaster/clients
pub async fn list_clients(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let clients = state.user_directory().list_clients().await?;
    Ok(ApiSuccess::ok("Success retrieve member data", clients))
}

/// DELETE /api/webmaster/clients
pub async fn delete_client(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(id) = deletable_id(req.id, UserId::parse)? {
        state.user_directory().delete_client(&id).await?;
    }
    Ok(ApiSuccess::message("User deleted successfully"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Packages
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/webmaster/subscription/package
pub async fn list_packages(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let packages = state.package_service().list().await?;
    Ok(ApiSuccess::ok("Success retrieve packages", packages))
}

/// POST /api/webmaster/subscription/package
pub async fn create_package(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<NewPackage>,
) -> Result<impl IntoResponse, ApiError> {
    let package = state.package_service().create(req).await?;
    Ok(ApiSuccess::created("Package created", package))
}

/// PUT /api/webmaster/subscription/package
pub async fn update_package(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<UpdatePackageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PackageId::parse(&required_id(req.id)?)?;
    let package = state.package_service().update(&id, req.patch).await?;
    Ok(ApiSuccess::ok("Package updated", package))
}

/// DELETE /api/webmaster/subscription/package
pub async fn delete_package(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(id) = deletable_id(req.id, PackageId::parse)? {
        state.package_service().delete(&id).await?;
    }
    Ok(ApiSuccess::message("Package deleted"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Payment methods
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/webmaster/subscription/payment-methods
pub async fn list_payment_methods(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let methods = state.payment_method_service().list().await?;
    Ok(ApiSuccess::ok("Success retrieve payment methods", methods))
}

/// POST /api/webmaster/subscription/payment-methods
pub async fn create_payment_method(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<NewPaymentMethod>,
) -> Result<impl IntoResponse, ApiError> {
    let method = state.payment_method_service().create(req).await?;
    Ok(ApiSuccess::created("Payment method created", method))
}

/// PUT /api/webmaster/subscription/payment-methods
pub async fn update_payment_method(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<UpdatePaymentMethodRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PaymentMethodId::parse(&required_id(req.id)?)?;
    let method = state.payment_method_service().update(&id, req.patch).await?;
    Ok(ApiSuccess::ok("Payment method updated", method))
}

/// DELETE /api/webmaster/subscription/payment-methods?id=
pub async fn delete_payment_method(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(id) = deletable_id(query.id, PaymentMethodId::parse)? {
        state.payment_method_service().delete(&id).await?;
    }
    Ok(ApiSuccess::message("Payment method deleted"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Transactions
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/webmaster/subscription/transactions?status=
pub async fn list_transactions(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let transactions = state
        .transaction_service()
        .list(query.status.as_deref())
        .await?;
    Ok(ApiSuccess::ok("Success retrieve transactions", transactions))
}

/// GET /api/webmaster/subscription/transactions/:id
pub async fn get_transaction(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = TransactionId::parse(&id)?;
    let transaction = state.transaction_service().get(&id).await?;
    Ok(ApiSuccess::ok("Success retrieve transaction", transaction))
}

/// PUT /api/webmaster/subscription/transactions
pub async fn update_transaction_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(req): ApiJson<TransactionActionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let change = state
        .update_transaction_status_handler()
        .handle(UpdateTransactionStatusCommand {
            transaction_id: req.id,
            action: req.action,
        })
        .await?;
    tracing::info!(admin_id = %admin.id, status = %change.current, "transaction settled by admin");
    let message = match change.current {
        TransactionStatus::Completed => "Transaction confirmed",
        TransactionStatus::Failed => "Transaction rejected",
        TransactionStatus::Pending => "Transaction updated",
    };
    Ok(ApiSuccess::message(message))
}

/// DELETE /api/webmaster/subscription/transactions
pub async fn delete_transaction(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(id) = deletable_id(req.id, TransactionId::parse)? {
        state.transaction_service().delete(&id).await?;
    }
    Ok(ApiSuccess::message("Transaction deleted"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Blog
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/webmaster/blog
pub async fn list_posts(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let posts = state.blog_service().list().await?;
    Ok(ApiSuccess::ok("Success retrieve blog posts", posts))
}

/// POST /api/webmaster/blog
pub async fn create_post(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<NewBlogPost>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state.blog_service().create(req).await?;
    Ok(ApiSuccess::created("Blog post created", post))
}

/// PUT /api/webmaster/blog
pub async fn update_post(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<UpdateBlogPostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = BlogPostId::parse(&required_id(req.id)?)?;
    let post = state.blog_service().update(&id, req.patch).await?;
    Ok(ApiSuccess::ok("Blog post updated", post))
}

/// DELETE /api/webmaster/blog
pub async fn delete_post(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(req): ApiJson<IdRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(id) = deletable_id(req.id, BlogPostId::parse)? {
        state.blog_service().delete(&id).await?;
    }
    Ok(ApiSuccess::message("Blog post deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_id_rejects_blank() {
        assert!(required_id(None).is_err());
        assert!(required_id(Some("  ".to_string())).is_err());
        assert_eq!(required_id(Some(" x ".to_string())).unwrap(), "x");
    }

    #[test]
    fn deletable_id_skips_unparseable_ids() {
        let skipped = deletable_id(Some("not-a-uuid".to_string()), PackageId::parse).unwrap();
        assert!(skipped.is_none());

        let id = PackageId::new();
        let parsed = deletable_id(Some(id.to_string()), PackageId::parse).unwrap();
        assert_eq!(parsed, Some(id));

        assert!(deletable_id(None, PackageId::parse).is_err());
    }
}

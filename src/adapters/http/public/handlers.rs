//! HTTP handlers for the public site: pricing, checkout, blog, contact.

use axum::extract::{Path, State};
use axum::response::IntoResponse;

use super::dto::{CheckoutRequest, HealthResponse, PaymentInstructionResponse};
use crate::adapters::http::error::{ApiError, ApiJson, ApiSuccess};
use crate::adapters::http::middleware::OptionalAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{CheckoutCommand, GetPaymentInstructionQuery};
use crate::domain::contact::ContactMessage;
use crate::domain::foundation::{PackageId, PaymentMethodId, TransactionId};

/// GET /api/packages
pub async fn list_packages(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let packages = state.package_service().list_active().await?;
    Ok(ApiSuccess::ok("Success retrieve packages", packages))
}

/// GET /api/packages/:id
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PackageId::parse(&id)?;
    let package = state.package_service().get_active(&id).await?;
    Ok(ApiSuccess::ok("Success retrieve package", package))
}

/// GET /api/payment-methods
pub async fn list_payment_methods(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let methods = state.payment_method_service().list_active().await?;
    Ok(ApiSuccess::ok("Success retrieve payment methods", methods))
}

/// POST /api/transactions
pub async fn checkout(
    State(state): State<AppState>,
    OptionalAuth(buyer): OptionalAuth,
    ApiJson(req): ApiJson<CheckoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CheckoutCommand {
        package_id: PackageId::parse(&req.package_id)?,
        payment_method_id: PaymentMethodId::parse(&req.payment_method_id)?,
        company: req.company_data,
    };
    let transaction = state.checkout_handler().handle(buyer.as_ref(), cmd).await?;
    Ok(ApiSuccess::created("Transaction created", transaction))
}

/// GET /api/transactions/:id
pub async fn payment_instruction(
    State(state): State<AppState>,
    OptionalAuth(viewer): OptionalAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetPaymentInstructionQuery {
        transaction_id: TransactionId::parse(&id)?,
    };
    let instruction = state
        .payment_instruction_handler()
        .handle(viewer.as_ref(), query)
        .await?;
    Ok(ApiSuccess::ok(
        "Success retrieve payment instruction",
        PaymentInstructionResponse::from(instruction),
    ))
}

/// GET /api/blog
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let posts = state.blog_service().list_published().await?;
    Ok(ApiSuccess::ok("Success retrieve blog posts", posts))
}

/// GET /api/blog/:slug
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state.blog_service().get_published(&slug).await?;
    Ok(ApiSuccess::ok("Success retrieve blog post", post))
}

/// POST /api/contact
pub async fn contact(
    State(state): State<AppState>,
    ApiJson(message): ApiJson<ContactMessage>,
) -> Result<impl IntoResponse, ApiError> {
    state.contact_handler().handle(message).await?;
    Ok(ApiSuccess::message("Message sent successfully"))
}

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    ApiSuccess::ok(
        "OK",
        HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

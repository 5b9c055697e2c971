//! Axum router configuration for the admin console.

use axum::{routing::get, Router};

use super::handlers::{
    create_package, create_payment_method, create_post, delete_client, delete_package,
    delete_payment_method, delete_post, delete_transaction, get_transaction, list_clients,
    list_packages, list_payment_methods, list_posts, list_transactions, update_package,
    update_payment_method, update_post, update_transaction_status,
};
use crate::adapters::http::state::AppState;

/// Routes mounted at `/api/webmaster`.
///
/// - `/clients` - GET, DELETE
/// - `/subscription/package` - GET, POST, PUT, DELETE
/// - `/subscription/payment-methods` - GET, POST, PUT, DELETE (`?id=`)
/// - `/subscription/transactions` - GET (`?status=`), PUT, DELETE
/// - `/subscription/transactions/:id` - GET
/// - `/blog` - GET, POST, PUT, DELETE
pub fn webmaster_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).delete(delete_client))
        .route(
            "/subscription/package",
            get(list_packages)
                .post(create_package)
                .put(update_package)
                .delete(delete_package),
        )
        .route(
            "/subscription/payment-methods",
            get(list_payment_methods)
                .post(create_payment_method)
                .put(update_payment_method)
                .delete(delete_payment_method),
        )
        .route(
            "/subscription/transactions",
            get(list_transactions)
                .put(update_transaction_status)
                .delete(delete_transaction),
        )
        .route("/subscription/transactions/:id", get(get_transaction))
        .route(
            "/blog",
            get(list_posts)
                .post(create_post)
                .put(update_post)
                .delete(delete_post),
        )
}

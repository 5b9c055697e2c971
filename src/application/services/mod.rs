//! Resource services - list/create/update/delete over the typed repositories.
//!
//! Creates and updates stamp timestamps server-side. Deletes by id do not
//! check for existence.

mod blog;
mod catalog;
mod transactions;
mod users;

pub use blog::BlogService;
pub use catalog::{PackageService, PaymentMethodService};
pub use transactions::TransactionService;
pub use users::UserDirectory;

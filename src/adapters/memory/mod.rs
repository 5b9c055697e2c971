//! In-memory repository adapters.
//!
//! Used for local development (`database.backend = "memory"`) and tests.
//! Each repository clones cheaply and shares its map across clones.

mod blog_post_repository;
mod catalog_repository;
mod transaction_repository;
mod user_repository;

pub use blog_post_repository::InMemoryBlogPostRepository;
pub use catalog_repository::{InMemoryPackageRepository, InMemoryPaymentMethodRepository};
pub use transaction_repository::InMemoryTransactionRepository;
pub use user_repository::InMemoryUserRepository;

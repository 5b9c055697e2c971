//! Blog post repository port.

use async_trait::async_trait;

use crate::domain::blog::BlogPost;
use crate::domain::foundation::{BlogPostId, DomainError};

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn save(&self, post: &BlogPost) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `BlogPostNotFound` if the post doesn't exist
    async fn update(&self, post: &BlogPost) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &BlogPostId) -> Result<Option<BlogPost>, DomainError>;

    /// Slugs are not unique; the most recently created match wins.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DomainError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<BlogPost>, DomainError>;

    async fn delete(&self, id: &BlogPostId) -> Result<(), DomainError>;
}

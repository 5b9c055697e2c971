//! In-memory blog post repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::blog::BlogPost;
use crate::domain::foundation::{BlogPostId, DomainError, ErrorCode};
use crate::ports::BlogPostRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryBlogPostRepository {
    posts: Arc<RwLock<HashMap<BlogPostId, BlogPost>>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn save(&self, post: &BlogPost) -> Result<(), DomainError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(())
    }

    async fn update(&self, post: &BlogPost) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(&post.id) {
            Some(slot) => {
                *slot = post.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::BlogPostNotFound, "Blog post not found")),
        }
    }

    async fn find_by_id(&self, id: &BlogPostId) -> Result<Option<BlogPost>, DomainError> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts
            .values()
            .filter(|p| p.slug == slug)
            .max_by_key(|p| p.created_at)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let mut all: Vec<_> = self.posts.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn delete(&self, id: &BlogPostId) -> Result<(), DomainError> {
        self.posts.write().await.remove(id);
        Ok(())
    }
}

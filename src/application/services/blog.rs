//! Blog administration and the public reader.

use std::sync::Arc;

use crate::domain::blog::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::domain::foundation::{BlogPostId, DomainError, ErrorCode, Timestamp};
use crate::ports::BlogPostRepository;

fn post_not_found() -> DomainError {
    DomainError::new(ErrorCode::BlogPostNotFound, "Blog post not found")
}

pub struct BlogService {
    posts: Arc<dyn BlogPostRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }

    pub async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        self.posts.list().await
    }

    pub async fn list_published(&self) -> Result<Vec<BlogPost>, DomainError> {
        let mut posts = self.posts.list().await?;
        posts.retain(|p| p.is_published);
        Ok(posts)
    }

    /// Drafts are indistinguishable from missing posts.
    pub async fn get_published(&self, slug: &str) -> Result<BlogPost, DomainError> {
        self.posts
            .find_by_slug(slug)
            .await?
            .filter(|p| p.is_published)
            .ok_or_else(post_not_found)
    }

    pub async fn create(&self, input: NewBlogPost) -> Result<BlogPost, DomainError> {
        let post = BlogPost::create(input, Timestamp::now())?;
        self.posts.save(&post).await?;
        tracing::info!(post_id = %post.id, slug = %post.slug, "blog post created");
        Ok(post)
    }

    pub async fn update(
        &self,
        id: &BlogPostId,
        patch: BlogPostPatch,
    ) -> Result<BlogPost, DomainError> {
        let mut post = self.posts.find_by_id(id).await?.ok_or_else(post_not_found)?;
        post.apply(patch, Timestamp::now())?;
        self.posts.update(&post).await?;
        tracing::info!(post_id = %id, "blog post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: &BlogPostId) -> Result<(), DomainError> {
        self.posts.delete(id).await?;
        tracing::info!(post_id = %id, "blog post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBlogPostRepository;

    fn service() -> BlogService {
        BlogService::new(Arc::new(InMemoryBlogPostRepository::new()))
    }

    fn draft(title: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            content: "Isi".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn drafts_are_hidden_from_readers() {
        let svc = service();
        let post = svc.create(draft("Tips Pajak 2024")).await.unwrap();

        assert!(post.published_at.is_none());
        assert!(svc.list_published().await.unwrap().is_empty());
        let err = svc.get_published(&post.slug).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BlogPostNotFound);
    }

    #[tokio::test]
    async fn publishing_stamps_and_unpublishing_clears() {
        let svc = service();
        let post = svc.create(draft("Tips Pajak")).await.unwrap();

        let published = svc
            .update(
                &post.id,
                BlogPostPatch {
                    is_published: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let stamped = published.published_at.unwrap();
        assert_eq!(svc.get_published(&post.slug).await.unwrap().id, post.id);

        let edited = svc
            .update(
                &post.id,
                BlogPostPatch {
                    content: Some("Baru".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(edited.published_at, Some(stamped));

        let hidden = svc
            .update(
                &post.id,
                BlogPostPatch {
                    is_published: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(hidden.published_at.is_none());
    }

    #[tokio::test]
    async fn update_of_unknown_post_is_not_found() {
        let err = service()
            .update(&BlogPostId::new(), BlogPostPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BlogPostNotFound);
    }
}

//! PostgreSQL implementation of BlogPostRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::error::{db_error, ensure_updated};
use crate::domain::blog::BlogPost;
use crate::domain::foundation::{BlogPostId, DomainError, ErrorCode, Timestamp};
use crate::ports::BlogPostRepository;

pub struct PostgresBlogPostRepository {
    pool: PgPool,
}

impl PostgresBlogPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BlogPostRow {
    id: Uuid,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    featured_image: String,
    author: String,
    tags: Vec<String>,
    is_published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        BlogPost {
            id: BlogPostId::from_uuid(row.id),
            title: row.title,
            slug: row.slug,
            content: row.content,
            excerpt: row.excerpt,
            featured_image: row.featured_image,
            author: row.author,
            tags: row.tags,
            is_published: row.is_published,
            published_at: row.published_at.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn save(&self, post: &BlogPost) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO blog_posts (
                id, title, slug, content, excerpt, featured_image, author, tags,
                is_published, published_at, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.featured_image)
        .bind(&post.author)
        .bind(&post.tags)
        .bind(post.is_published)
        .bind(post.published_at.map(|t| *t.as_datetime()))
        .bind(post.created_at.as_datetime())
        .bind(post.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("save blog post", e))?;
        Ok(())
    }

    async fn update(&self, post: &BlogPost) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE blog_posts SET
                title = $2,
                slug = $3,
                content = $4,
                excerpt = $5,
                featured_image = $6,
                author = $7,
                tags = $8,
                is_published = $9,
                published_at = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.featured_image)
        .bind(&post.author)
        .bind(&post.tags)
        .bind(post.is_published)
        .bind(post.published_at.map(|t| *t.as_datetime()))
        .bind(post.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update blog post", e))?;

        ensure_updated(result.rows_affected(), ErrorCode::BlogPostNotFound, "Blog post not found")
    }

    async fn find_by_id(&self, id: &BlogPostId) -> Result<Option<BlogPost>, DomainError> {
        let row: Option<BlogPostRow> = sqlx::query_as("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("load blog post", e))?;
        Ok(row.map(BlogPost::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DomainError> {
        let row: Option<BlogPostRow> = sqlx::query_as(
            "SELECT * FROM blog_posts WHERE slug = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("load blog post by slug", e))?;
        Ok(row.map(BlogPost::from))
    }

    async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let rows: Vec<BlogPostRow> =
            sqlx::query_as("SELECT * FROM blog_posts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("list blog posts", e))?;
        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn delete(&self, id: &BlogPostId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete blog post", e))?;
        Ok(())
    }
}

//! Blog posts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_text, BlogPostId, Timestamp, ValidationError};

/// Lowercase, hyphen-separated slug built from `title`.
///
/// Runs of anything that is not a letter or digit collapse to one hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: String,
    pub tags: Vec<String>,
    pub is_published: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

fn resolve_slug(explicit: &str, title: &str) -> Result<String, ValidationError> {
    let slug = if explicit.trim().is_empty() {
        slugify(title)
    } else {
        slugify(explicit)
    };
    if slug.is_empty() {
        return Err(ValidationError::invalid_format(
            "slug",
            "title must contain at least one letter or digit",
        ));
    }
    Ok(slug)
}

impl BlogPost {
    pub fn create(input: NewBlogPost, now: Timestamp) -> Result<Self, ValidationError> {
        require_text("title", &input.title)?;
        let slug = resolve_slug(&input.slug, &input.title)?;
        Ok(Self {
            id: BlogPostId::new(),
            title: input.title.trim().to_string(),
            slug,
            content: input.content,
            excerpt: input.excerpt,
            featured_image: input.featured_image,
            author: input.author,
            tags: input.tags,
            is_published: input.is_published,
            published_at: input.is_published.then_some(now),
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update.
    ///
    /// A post that ends up published keeps its original `published_at`
    /// (or gets `now`); an unpublished post has it cleared.
    pub fn apply(&mut self, patch: BlogPostPatch, now: Timestamp) -> Result<(), ValidationError> {
        if let Some(title) = &patch.title {
            require_text("title", title)?;
        }
        let slug = match &patch.slug {
            Some(slug) => {
                let title = patch.title.as_deref().unwrap_or(&self.title);
                Some(resolve_slug(slug, title)?)
            }
            None => None,
        };

        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(v) = patch.content {
            self.content = v;
        }
        if let Some(v) = patch.excerpt {
            self.excerpt = v;
        }
        if let Some(v) = patch.featured_image {
            self.featured_image = v;
        }
        if let Some(v) = patch.author {
            self.author = v;
        }
        if let Some(v) = patch.tags {
            self.tags = v;
        }
        if let Some(v) = patch.is_published {
            self.is_published = v;
        }

        self.published_at = if self.is_published {
            self.published_at.or(Some(now))
        } else {
            None
        };
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, published: bool) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            content: "Body".to_string(),
            is_published: published,
            ..Default::default()
        }
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Tips & Tricks -- 2024  "), "tips-tricks-2024");
        assert_eq!(slugify("Already-a-slug"), "already-a-slug");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn create_derives_slug_when_blank() {
        let post = BlogPost::create(draft("Launching Our Portal", false), Timestamp::now()).unwrap();
        assert_eq!(post.slug, "launching-our-portal");
    }

    #[test]
    fn create_keeps_explicit_slug() {
        let mut input = draft("Launching Our Portal", false);
        input.slug = "launch".to_string();
        let post = BlogPost::create(input, Timestamp::now()).unwrap();
        assert_eq!(post.slug, "launch");
    }

    #[test]
    fn create_sets_published_at_only_when_published() {
        let now = Timestamp::now();
        assert_eq!(BlogPost::create(draft("A", true), now).unwrap().published_at, Some(now));
        assert_eq!(BlogPost::create(draft("B", false), now).unwrap().published_at, None);
    }

    #[test]
    fn create_requires_sluggable_title() {
        assert!(BlogPost::create(draft("", false), Timestamp::now()).is_err());
        assert!(BlogPost::create(draft("???", false), Timestamp::now()).is_err());
    }

    #[test]
    fn republishing_keeps_original_published_at() {
        let first = Timestamp::now();
        let mut post = BlogPost::create(draft("A", true), first).unwrap();

        post.apply(
            BlogPostPatch {
                content: Some("Edited".to_string()),
                ..Default::default()
            },
            first.plus_secs(60),
        )
        .unwrap();

        assert_eq!(post.published_at, Some(first));
        assert_eq!(post.updated_at, first.plus_secs(60));
    }

    #[test]
    fn publishing_a_draft_stamps_now() {
        let now = Timestamp::now();
        let mut post = BlogPost::create(draft("A", false), now).unwrap();
        let later = now.plus_secs(30);
        post.apply(
            BlogPostPatch {
                is_published: Some(true),
                ..Default::default()
            },
            later,
        )
        .unwrap();
        assert_eq!(post.published_at, Some(later));
    }

    #[test]
    fn unpublishing_clears_published_at() {
        let now = Timestamp::now();
        let mut post = BlogPost::create(draft("A", true), now).unwrap();
        post.apply(
            BlogPostPatch {
                is_published: Some(false),
                ..Default::default()
            },
            now,
        )
        .unwrap();
        assert!(post.published_at.is_none());
    }

    #[test]
    fn blank_slug_in_patch_is_rederived_from_title() {
        let mut post = BlogPost::create(draft("Old Title", false), Timestamp::now()).unwrap();
        post.apply(
            BlogPostPatch {
                title: Some("New Title".to_string()),
                slug: Some("".to_string()),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(post.slug, "new-title");
    }
}

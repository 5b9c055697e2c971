//! Blog module - posts managed by admins and read publicly by slug.

mod post;

pub use post::{slugify, BlogPost, BlogPostPatch, NewBlogPost};

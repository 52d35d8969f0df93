//! In-memory post store - used as fallback when Postgres is unavailable,
//! and as the store double in controller tests.
//!
//! Enforces the same slug-uniqueness constraint as the real schema, with
//! matching error text. Data is lost on process restart.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use inkwell_core::domain::{Post, PostWrite};
use inkwell_core::error::StoreError;
use inkwell_core::ports::{PostFilter, PostOrder, PostStore};

const SLUG_CONSTRAINT: &str = "duplicate key value violates unique constraint \"posts_slug_key\"";

/// In-memory post store over an async RwLock. Cloning shares the rows.
#[derive(Clone, Default)]
pub struct InMemoryPostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self, filter: PostFilter, order: PostOrder) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        let mut matched: Vec<Post> = posts
            .iter()
            .filter(|p| match filter {
                PostFilter::All => true,
                PostFilter::PublishedOnly => p.published,
            })
            .cloned()
            .collect();

        match order {
            PostOrder::CreatedAtDesc => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            PostOrder::CreatedAtAsc => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }

        Ok(matched)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug && p.published).cloned())
    }

    async fn insert(
        &self,
        write: PostWrite,
        created_at: DateTime<Utc>,
    ) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.slug == write.slug) {
            return Err(StoreError::Constraint(SLUG_CONSTRAINT.to_string()));
        }

        let post = Post {
            id: Uuid::new_v4(),
            title: write.title,
            slug: write.slug,
            content: write.content,
            excerpt: write.excerpt,
            cover_image: write.cover_image,
            published: write.published,
            author_id: write.author_id,
            created_at,
            updated_at: write.updated_at,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, write: PostWrite) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.id != id && p.slug == write.slug) {
            return Err(StoreError::Constraint(SLUG_CONSTRAINT.to_string()));
        }

        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Err(StoreError::NotFound);
        };

        post.title = write.title;
        post.slug = write.slug;
        post.content = write.content;
        post.excerpt = write.excerpt;
        post.cover_image = write.cover_image;
        post.published = write.published;
        post.author_id = write.author_id;
        post.updated_at = write.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
